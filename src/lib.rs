//! classload - class autoloading for PHP-style fully qualified names
//!
//! This crate implements the autoload resolution layer:
//! - Namespace-prefix resolution (prefix → base-folder table, lower-cased
//!   directory convention, ordered folder probing)
//! - Autoload queue (ordered chain of named loaders, first hit wins)
//! - Classmap (explicit class → file map with directory scanning)
//! - JSON configuration (composer-style `autoload` section)
//!
//! Registration is fail-fast: empty prefixes, folders, or handles are
//! rejected with [`AutoloadError`]. Resolution is best-effort: an
//! unresolved class is a silent miss so that chained loaders can fall
//! through to one another.

pub mod classmap;
pub mod config;
pub mod error;
pub mod normalize;
pub mod path;
pub mod probe;
pub mod queue;
pub mod resolver;
pub mod table;

pub use classmap::ClassMap;
pub use config::{AutoloadConfig, PathList};
pub use error::AutoloadError;
pub use probe::{DiskProbe, FileProbe, MemoryProbe};
pub use queue::{AutoloadQueue, FinderFn};
pub use resolver::Resolver;
pub use table::{NamespaceEntry, NamespaceTable};
