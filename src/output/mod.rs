//! Terminal output and CSV export
//!
//! Display utilities for console reports, CSV rendering, and write-once export.

pub mod display;
pub mod export;
pub mod formatters;

pub use display::{
    print_analysis_result, print_letter_distribution, print_selections, print_top_words,
};
pub use export::{ExportOutcome, write_if_absent};
