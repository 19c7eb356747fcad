//! Word lists for opening-word analysis
//!
//! Provides embedded default lists and resolution of user-supplied list sources.

mod embedded;
pub mod loader;

pub use embedded::{GUESSABLE, GUESSABLE_COUNT, PLAYABLE, PLAYABLE_COUNT};

use crate::core::Word;
use loader::{load_from_file, words_from_slice};
use std::io;

/// Source keyword selecting the embedded list
pub const EMBEDDED_SOURCE: &str = "embedded";

/// Resolve a word list source: `"embedded"` uses the built-in list, anything
/// else is treated as a path to a newline-delimited file.
///
/// # Errors
///
/// Returns an I/O error if a file source cannot be read.
pub fn resolve(source: &str, embedded: &[&str]) -> io::Result<Vec<Word>> {
    if source == EMBEDDED_SOURCE {
        Ok(words_from_slice(embedded))
    } else {
        load_from_file(source)
    }
}
