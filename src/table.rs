//! Namespace-prefix registration table.
//!
//! Maps each registered namespace prefix to an ordered, deduplicated list
//! of base folders. Insertion order is iteration order: the first prefix
//! registered is the first one matched, and within a prefix the first
//! folder registered is the first one probed.

use crate::error::AutoloadError;
use crate::normalize::{trim_separators, trim_trailing_separators, NAMESPACE_SEPARATOR};

/// One registered prefix and its base folders, in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceEntry {
    prefix: String,
    folders: Vec<String>,
}

impl NamespaceEntry {
    /// The normalized namespace prefix (no leading/trailing separators).
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Base folders in registration order.
    pub fn folders(&self) -> &[String] {
        &self.folders
    }
}

/// Ordered mapping from namespace prefix to base folders.
#[derive(Debug, Clone, Default)]
pub struct NamespaceTable {
    entries: Vec<NamespaceEntry>,
}

impl NamespaceTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a base folder for a namespace prefix.
    ///
    /// Both arguments are normalized first; the prefix loses separators on
    /// both ends, the folder only trailing ones. Registering the same
    /// `(prefix, folder)` pair twice is a no-op.
    pub fn add(&mut self, prefix: &str, folder: &str) -> Result<(), AutoloadError> {
        let prefix = trim_separators(prefix).ok_or(AutoloadError::InvalidNamespace)?;
        let folder = trim_trailing_separators(folder).ok_or(AutoloadError::InvalidFolder)?;

        match self.entries.iter_mut().find(|e| e.prefix == prefix) {
            Some(entry) => {
                if !entry.folders.iter().any(|f| f == folder) {
                    entry.folders.push(folder.to_string());
                }
            }
            None => self.entries.push(NamespaceEntry {
                prefix: prefix.to_string(),
                folders: vec![folder.to_string()],
            }),
        }

        Ok(())
    }

    /// All entries whose prefix, followed by the namespace separator, is a
    /// literal prefix of `class`, in registration order.
    ///
    /// Recomputed fresh per call; an empty class name yields an empty
    /// iterator.
    pub fn matching_prefixes<'a>(
        &'a self,
        class: &'a str,
    ) -> impl Iterator<Item = &'a NamespaceEntry> {
        self.entries.iter().filter(move |entry| {
            class
                .strip_prefix(entry.prefix.as_str())
                .map_or(false, |rest| rest.starts_with(NAMESPACE_SEPARATOR))
        })
    }

    /// All registered entries, in registration order.
    pub fn entries(&self) -> &[NamespaceEntry] {
        &self.entries
    }

    /// Number of distinct registered prefixes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no prefix has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
