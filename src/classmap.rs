//! Classmap loader.
//!
//! An explicit fully-qualified-name to file mapping, with a best-effort
//! directory scanner that discovers class, interface, trait, and enum
//! declarations in PHP sources. Lookup is a plain map hit, so a classmap
//! placed in front of a prefix resolver short-circuits the probe loop for
//! known classes.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use regex::Regex;

/// Mapping from fully qualified class name to source file.
#[derive(Debug, Clone, Default)]
pub struct ClassMap {
    map: BTreeMap<String, PathBuf>,
}

impl ClassMap {
    /// Create an empty classmap.
    pub fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// Map a fully qualified class name to a file. A later insert for the
    /// same class replaces the earlier one.
    pub fn insert(&mut self, class: impl Into<String>, path: impl Into<PathBuf>) {
        self.map.insert(class.into(), path.into());
    }

    /// Look up the file for a fully qualified class name.
    pub fn find_file(&self, class: &str) -> Option<&Path> {
        self.map.get(class).map(PathBuf::as_path)
    }

    /// Number of mapped classes.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the map holds no classes.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Recursively scan `dir` for PHP declarations and add them to the map.
    ///
    /// Detection is regex-based: a `namespace X;` statement plus
    /// `class`/`interface`/`trait`/`enum` declarations (with optional
    /// `abstract`/`final` modifiers). Unreadable entries are skipped
    /// silently; scanning is best-effort by design.
    pub fn scan_dir(&mut self, dir: &Path) {
        let decl_re = Regex::new(
            r"(?m)^\s*(?:abstract\s+|final\s+)?(?:class|interface|trait|enum)\s+(\w+)",
        )
        .unwrap();
        let ns_re = Regex::new(r"(?m)^\s*namespace\s+([\w\\]+)\s*;").unwrap();

        if dir.is_file() {
            self.scan_file(dir, &decl_re, &ns_re);
        } else {
            self.scan_dir_recursive(dir, &decl_re, &ns_re);
        }
    }

    fn scan_dir_recursive(&mut self, dir: &Path, decl_re: &Regex, ns_re: &Regex) {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => return,
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                self.scan_dir_recursive(&path, decl_re, ns_re);
            } else if path.extension().map_or(false, |e| e == "php") {
                self.scan_file(&path, decl_re, ns_re);
            }
        }
    }

    fn scan_file(&mut self, path: &Path, decl_re: &Regex, ns_re: &Regex) {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return,
        };

        let namespace = ns_re
            .captures(&content)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string());

        for cap in decl_re.captures_iter(&content) {
            if let Some(name) = cap.get(1) {
                let fqcn = match &namespace {
                    Some(ns) => format!("{}\\{}", ns, name.as_str()),
                    None => name.as_str().to_string(),
                };
                self.map.insert(fqcn, path.to_path_buf());
            }
        }
    }
}
