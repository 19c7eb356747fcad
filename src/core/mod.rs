//! Core domain types
//!
//! Words and letter sets with no knowledge of how they get ranked.

mod letters;
mod word;

pub use letters::LetterSet;
pub use word::{Word, WordError};
