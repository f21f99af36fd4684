//! Dictionary loading
//!
//! Turns a newline-separated word list into the fixed-length word set the
//! neighbor index is built from.

pub mod loader;

pub use loader::{LoadOptions, load_from_file, words_from_slice};

/// Default word list on most Unix systems
pub const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";
