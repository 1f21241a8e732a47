//! goto library
//!
//! Directory bookmarks: register short aliases for directories, look them up
//! by name and drop the ones whose directories are gone. The store is a
//! plain text file with one `<alias> <path>` line per entry.
//!
//! The binary returns paths as data; changing the calling shell's directory
//! is left to the shell function printed by `goto init`.

pub mod config;
pub mod error;
pub mod shell;
pub mod store;

pub use error::{GotoError, Result};
pub use store::{Alias, AliasStore, Registration};
