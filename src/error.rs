//! Autoload error taxonomy.
//!
//! Registration-time failures (empty prefixes, empty folders, bad queue
//! handles) are raised immediately. Resolution itself never errors: an
//! unresolved class is a miss, not a failure, because several loaders may
//! be chained and a miss from one is expected to fall through to the next.

use std::fmt;

/// An error raised while registering autoload mappings or queue entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoloadError {
    /// A namespace prefix was empty after trimming separators.
    InvalidNamespace,
    /// A base folder was empty after trimming separators.
    InvalidFolder,
    /// A queue handle was empty after trimming whitespace.
    InvalidHandle,
    /// A queue handle is already taken by another loader.
    DuplicateHandle(String),
    /// No loader is registered under this handle.
    UnknownHandle(String),
}

impl fmt::Display for AutoloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutoloadError::InvalidNamespace => {
                write!(f, "autoload namespace prefix cannot be empty")
            }
            AutoloadError::InvalidFolder => write!(f, "autoload folder cannot be empty"),
            AutoloadError::InvalidHandle => write!(f, "autoload handle cannot be empty"),
            AutoloadError::DuplicateHandle(handle) => {
                write!(f, "autoloader '{}' is already registered", handle)
            }
            AutoloadError::UnknownHandle(handle) => {
                write!(f, "autoloader '{}' is not registered", handle)
            }
        }
    }
}

impl std::error::Error for AutoloadError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            AutoloadError::InvalidNamespace.to_string(),
            "autoload namespace prefix cannot be empty"
        );
        assert_eq!(
            AutoloadError::InvalidFolder.to_string(),
            "autoload folder cannot be empty"
        );
        assert_eq!(
            AutoloadError::DuplicateHandle("app".to_string()).to_string(),
            "autoloader 'app' is already registered"
        );
        assert_eq!(
            AutoloadError::UnknownHandle("gone".to_string()).to_string(),
            "autoloader 'gone' is not registered"
        );
    }
}
