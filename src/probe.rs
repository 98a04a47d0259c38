//! Filesystem probing.
//!
//! The resolver only ever asks one question of the filesystem: is this
//! candidate a regular file? Keeping that behind a trait lets tests (and
//! filesystem-less environments) answer from an in-memory set instead of
//! touching disk.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Answers whether a candidate path is an existing regular file.
pub trait FileProbe {
    fn is_file(&self, path: &Path) -> bool;
}

/// Probe backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskProbe;

impl FileProbe for DiskProbe {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// In-memory probe: a path is a file iff it was added beforehand.
#[derive(Debug, Clone, Default)]
pub struct MemoryProbe {
    files: BTreeSet<PathBuf>,
}

impl MemoryProbe {
    /// Create an empty probe.
    pub fn new() -> Self {
        Self {
            files: BTreeSet::new(),
        }
    }

    /// Mark a path as an existing file.
    pub fn add_file(&mut self, path: impl Into<PathBuf>) {
        self.files.insert(path.into());
    }
}

impl FileProbe for MemoryProbe {
    fn is_file(&self, path: &Path) -> bool {
        self.files.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_probe() {
        let mut probe = MemoryProbe::new();
        assert!(!probe.is_file(Path::new("src/User.php")));
        probe.add_file("src/User.php");
        assert!(probe.is_file(Path::new("src/User.php")));
        assert!(!probe.is_file(Path::new("src")));
    }
}
