//! Letter-coverage analysis
//!
//! The three pipeline stages: letter distribution over the playable list,
//! coverage ranking of the guessable list, and greedy near-disjoint selection.

mod distribution;
mod ranking;
mod selection;

pub use distribution::{LetterDistribution, build_distribution};
pub use ranking::{RankError, RankedWord, RankedWords, coverage_score, rank_words};
pub use selection::{Overlap, Selection, select_disjoint, select_standard};
