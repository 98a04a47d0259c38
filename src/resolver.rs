//! Namespace-prefix resolver.
//!
//! The core resolution engine: given a fully qualified class name, find
//! every registered prefix that matches, build the candidate relative path
//! for each, and probe that prefix's base folders in registration order
//! until one yields an existing file.

use std::path::{Path, PathBuf};

use crate::error::AutoloadError;
use crate::path::class_file_path;
use crate::probe::{DiskProbe, FileProbe};
use crate::table::NamespaceTable;

/// Resolves fully qualified class names to files under registered
/// namespace prefixes.
pub struct Resolver {
    namespaces: NamespaceTable,
    class_prefix: String,
    extension: String,
    probe: Box<dyn FileProbe>,
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("namespaces", &self.namespaces)
            .field("class_prefix", &self.class_prefix)
            .field("extension", &self.extension)
            .finish_non_exhaustive()
    }
}

impl Resolver {
    /// Create a resolver probing the real filesystem.
    pub fn new() -> Self {
        Self::with_probe(Box::new(DiskProbe))
    }

    /// Create a resolver with a custom file probe.
    pub fn with_probe(probe: Box<dyn FileProbe>) -> Self {
        Self {
            namespaces: NamespaceTable::new(),
            class_prefix: String::new(),
            extension: "php".to_string(),
            probe,
        }
    }

    /// Set the filename prefix prepended to the leaf class name
    /// (e.g. `acme.` turns `User` into `acme.User.php`).
    pub fn set_class_prefix(&mut self, prefix: impl Into<String>) {
        self.class_prefix = prefix.into();
    }

    /// Set the file extension candidates are built with (default `php`).
    pub fn set_extension(&mut self, extension: impl Into<String>) {
        self.extension = extension.into();
    }

    /// Add a base folder for a namespace prefix.
    pub fn add_namespace(&mut self, prefix: &str, folder: &str) -> Result<(), AutoloadError> {
        self.namespaces.add(prefix, folder)
    }

    /// The registered prefix table.
    pub fn namespaces(&self) -> &NamespaceTable {
        &self.namespaces
    }

    /// Resolve `class` and invoke `load` for each file found.
    ///
    /// Every matching prefix is attempted: a class satisfying two
    /// registered prefixes (say `App` and `App\Models`) triggers a probe,
    /// and possibly a load, for each of them. Within one prefix the first
    /// existing file wins and the remaining folders are skipped. A class
    /// matching nothing is a silent no-op.
    pub fn resolve<F: FnMut(&Path)>(&self, class: &str, mut load: F) {
        for entry in self.namespaces.matching_prefixes(class) {
            let relative =
                class_file_path(class, entry.prefix(), &self.class_prefix, &self.extension);
            for folder in entry.folders() {
                let candidate = Path::new(folder).join(&relative);
                if self.probe.is_file(&candidate) {
                    load(&candidate);
                    break;
                }
            }
        }
    }

    /// Find the first existing candidate file for `class`, across all
    /// matching prefixes in table order.
    ///
    /// This is the query form used when chaining loaders in an
    /// [`AutoloadQueue`](crate::queue::AutoloadQueue): a miss here lets the
    /// next loader in the queue have a go.
    pub fn find_file(&self, class: &str) -> Option<PathBuf> {
        for entry in self.namespaces.matching_prefixes(class) {
            let relative =
                class_file_path(class, entry.prefix(), &self.class_prefix, &self.extension);
            for folder in entry.folders() {
                let candidate = Path::new(folder).join(&relative);
                if self.probe.is_file(&candidate) {
                    return Some(candidate);
                }
            }
        }
        None
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}
