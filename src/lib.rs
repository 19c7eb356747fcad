//! Wordle Opening-Word Analyzer
//!
//! Ranks guess words by how many playable words they share a letter with, then
//! picks small sets of top words that cover the alphabet with little repetition.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_openers::analysis::{build_distribution, rank_words, select_disjoint};
//! use wordle_openers::wordlists::{GUESSABLE, PLAYABLE, loader::words_from_slice};
//!
//! let distribution = build_distribution(&words_from_slice(PLAYABLE));
//! let ranked = rank_words(&words_from_slice(GUESSABLE), &distribution).unwrap();
//!
//! for word in select_disjoint(&ranked, 0) {
//!     println!("{word}");
//! }
//! ```

// Core domain types
pub mod core;

// Distribution, ranking and selection
pub mod analysis;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output and CSV export
pub mod output;
