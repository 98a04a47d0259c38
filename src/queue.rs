//! The autoload queue.
//!
//! An ordered chain of named loaders. When a class needs loading, the
//! queue walks its entries in order and the first loader that can point at
//! a file wins. Loaders are registered under a handle so they can be
//! inspected and unregistered later.

use std::path::{Path, PathBuf};

use crate::classmap::ClassMap;
use crate::error::AutoloadError;
use crate::resolver::Resolver;

/// A loader callback: receives the fully qualified class name and returns
/// the file to load, or `None` if this loader can't handle it.
pub type FinderFn = Box<dyn Fn(&str) -> Option<PathBuf>>;

struct QueueEntry {
    handle: String,
    finder: FinderFn,
}

/// Ordered chain of registered autoloaders.
#[derive(Default)]
pub struct AutoloadQueue {
    entries: Vec<QueueEntry>,
}

impl AutoloadQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register a loader under `handle`.
    ///
    /// With `prepend` the loader goes to the front of the queue instead of
    /// the back. An empty handle or a handle already in use is rejected.
    pub fn register(
        &mut self,
        handle: impl Into<String>,
        finder: FinderFn,
        prepend: bool,
    ) -> Result<(), AutoloadError> {
        let handle: String = handle.into();
        let handle = handle.trim();
        if handle.is_empty() {
            return Err(AutoloadError::InvalidHandle);
        }
        if self.entries.iter().any(|e| e.handle == handle) {
            return Err(AutoloadError::DuplicateHandle(handle.to_string()));
        }

        let entry = QueueEntry {
            handle: handle.to_string(),
            finder,
        };
        if prepend {
            self.entries.insert(0, entry);
        } else {
            self.entries.push(entry);
        }

        Ok(())
    }

    /// Register a [`Resolver`] as a queue loader via its
    /// [`find_file`](Resolver::find_file) query.
    pub fn register_resolver(
        &mut self,
        handle: impl Into<String>,
        resolver: Resolver,
        prepend: bool,
    ) -> Result<(), AutoloadError> {
        self.register(handle, Box::new(move |class| resolver.find_file(class)), prepend)
    }

    /// Register a [`ClassMap`] as a queue loader.
    pub fn register_classmap(
        &mut self,
        handle: impl Into<String>,
        map: ClassMap,
        prepend: bool,
    ) -> Result<(), AutoloadError> {
        self.register(
            handle,
            Box::new(move |class| map.find_file(class).map(Path::to_path_buf)),
            prepend,
        )
    }

    /// Remove the loader registered under `handle`.
    pub fn unregister(&mut self, handle: &str) -> Result<(), AutoloadError> {
        match self.entries.iter().position(|e| e.handle == handle) {
            Some(index) => {
                self.entries.remove(index);
                Ok(())
            }
            None => Err(AutoloadError::UnknownHandle(handle.to_string())),
        }
    }

    /// Handles of all registered loaders, in queue order.
    pub fn handles(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.handle.as_str()).collect()
    }

    /// Number of registered loaders.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue has no loaders.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Walk the queue and return the file the first capable loader points
    /// at, or `None` when no loader can handle the class.
    pub fn find_file(&self, class: &str) -> Option<PathBuf> {
        for entry in &self.entries {
            if let Some(path) = (entry.finder)(class) {
                return Some(path);
            }
        }
        None
    }

    /// Find the file for `class` and hand it to `load`.
    ///
    /// Returns whether anything was loaded; a miss is not an error.
    pub fn load<F: FnMut(&Path)>(&self, class: &str, mut load: F) -> bool {
        match self.find_file(class) {
            Some(path) => {
                load(&path);
                true
            }
            None => false,
        }
    }

    /// Remove all registered loaders.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
