//! Autoload configuration.
//!
//! A composer-style JSON document describing namespace mappings, classmap
//! directories, and path-building options:
//!
//! ```json
//! {
//!     "autoload": {
//!         "namespaces": {
//!             "App": "src",
//!             "Vendor\\Lib": ["lib", "fallback/lib"]
//!         },
//!         "classmap": ["registry"],
//!         "class-prefix": "",
//!         "extension": "php"
//!     }
//! }
//! ```
//!
//! Folder values may be a single string or an array of strings; relative
//! folders are joined onto the base directory the loader is built against.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::classmap::ClassMap;
use crate::error::AutoloadError;
use crate::queue::AutoloadQueue;
use crate::resolver::Resolver;

/// One or more folders for a namespace prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathList {
    Single(String),
    Multiple(Vec<String>),
}

impl PathList {
    /// The folders, in declaration order.
    pub fn paths(&self) -> Vec<&str> {
        match self {
            PathList::Single(s) => vec![s.as_str()],
            PathList::Multiple(v) => v.iter().map(String::as_str).collect(),
        }
    }
}

/// The `autoload` section of a configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoloadConfig {
    /// Namespace prefix to base-folder mappings.
    #[serde(default)]
    pub namespaces: BTreeMap<String, PathList>,
    /// Directories to scan into a classmap.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classmap: Vec<String>,
    /// Filename prefix for resolved class files.
    #[serde(default, rename = "class-prefix", skip_serializing_if = "String::is_empty")]
    pub class_prefix: String,
    /// File extension for resolved class files.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for AutoloadConfig {
    fn default() -> Self {
        Self {
            namespaces: BTreeMap::new(),
            classmap: Vec::new(),
            class_prefix: String::new(),
            extension: default_extension(),
        }
    }
}

fn default_extension() -> String {
    "php".to_string()
}

/// Top-level configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    autoload: AutoloadConfig,
}

impl AutoloadConfig {
    /// Parse the `autoload` section out of a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, String> {
        let file: ConfigFile = serde_json::from_str(content)
            .map_err(|e| format!("Failed to parse autoload config: {}", e))?;
        Ok(file.autoload)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_json_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        let file: ConfigFile = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;
        Ok(file.autoload)
    }

    /// Build a filesystem-backed [`Resolver`] from the namespace mappings,
    /// joining relative folders onto `base_dir`.
    pub fn build_resolver(&self, base_dir: &Path) -> Result<Resolver, AutoloadError> {
        let mut resolver = Resolver::new();
        resolver.set_class_prefix(self.class_prefix.clone());
        resolver.set_extension(self.extension.clone());

        for (prefix, folders) in &self.namespaces {
            for folder in folders.paths() {
                let folder = join_base(base_dir, folder);
                resolver.add_namespace(prefix, &folder.to_string_lossy())?;
            }
        }

        Ok(resolver)
    }

    /// Build a ready-to-use [`AutoloadQueue`]: the scanned classmap first
    /// (a map hit beats probing), then the namespace resolver.
    pub fn build_queue(&self, base_dir: &Path) -> Result<AutoloadQueue, AutoloadError> {
        let mut queue = AutoloadQueue::new();

        if !self.classmap.is_empty() {
            let mut map = ClassMap::new();
            for dir in &self.classmap {
                map.scan_dir(&join_base(base_dir, dir));
            }
            queue.register_classmap("classmap", map, false)?;
        }

        queue.register_resolver("namespaces", self.build_resolver(base_dir)?, false)?;

        Ok(queue)
    }
}

fn join_base(base_dir: &Path, folder: &str) -> PathBuf {
    if Path::new(folder).is_absolute() {
        PathBuf::from(folder)
    } else {
        base_dir.join(folder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_and_multiple_folders() {
        let config = AutoloadConfig::from_json_str(
            r#"{
                "autoload": {
                    "namespaces": {
                        "App": "src",
                        "Vendor\\Lib": ["lib", "fallback/lib"]
                    }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.namespaces["App"].paths(), ["src"]);
        assert_eq!(
            config.namespaces["Vendor\\Lib"].paths(),
            ["lib", "fallback/lib"]
        );
        assert_eq!(config.extension, "php");
        assert_eq!(config.class_prefix, "");
        assert!(config.classmap.is_empty());
    }

    #[test]
    fn test_parse_options() {
        let config = AutoloadConfig::from_json_str(
            r#"{
                "autoload": {
                    "namespaces": { "App": "src" },
                    "classmap": ["registry"],
                    "class-prefix": "acme.",
                    "extension": "inc"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.classmap, ["registry"]);
        assert_eq!(config.class_prefix, "acme.");
        assert_eq!(config.extension, "inc");
    }

    #[test]
    fn test_missing_autoload_section_defaults() {
        let config = AutoloadConfig::from_json_str("{}").unwrap();
        assert!(config.namespaces.is_empty());
        assert_eq!(config.extension, "php");
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = AutoloadConfig::from_json_str("not json").unwrap_err();
        assert!(err.starts_with("Failed to parse autoload config:"));
    }

    #[test]
    fn test_read_error_names_the_file() {
        let err =
            AutoloadConfig::from_json_file(Path::new("/no/such/autoload.json")).unwrap_err();
        assert!(err.starts_with("Failed to read /no/such/autoload.json:"));
    }

    #[test]
    fn test_build_resolver_rejects_empty_prefix() {
        let config = AutoloadConfig::from_json_str(
            r#"{ "autoload": { "namespaces": { "\\": "src" } } }"#,
        )
        .unwrap();
        assert_eq!(
            config.build_resolver(Path::new(".")).unwrap_err(),
            AutoloadError::InvalidNamespace
        );
    }

    #[test]
    fn test_build_resolver_registers_mappings() {
        let config = AutoloadConfig::from_json_str(
            r#"{
                "autoload": {
                    "namespaces": { "App": ["src", "/opt/shared/src"] }
                }
            }"#,
        )
        .unwrap();

        let resolver = config.build_resolver(Path::new("/project")).unwrap();
        let entries = resolver.namespaces().entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].prefix(), "App");
        assert_eq!(
            entries[0].folders(),
            [
                Path::new("/project").join("src").to_string_lossy().to_string(),
                "/opt/shared/src".to_string(),
            ]
        );
    }
}
