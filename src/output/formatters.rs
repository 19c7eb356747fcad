//! Formatting utilities for terminal output and CSV documents
//!
//! CSV documents are comma-delimited with `\n` row separators and no trailing
//! newline.

use crate::analysis::{LetterDistribution, RankedWords, Selection};

/// Uppercase display form of a letter
#[must_use]
pub fn letter_label(letter: u8) -> char {
    letter.to_ascii_uppercase() as char
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// `Letter,Occurrences` table in distribution order
#[must_use]
pub fn letter_distribution_csv(distribution: &LetterDistribution) -> String {
    let mut csv = String::from("Letter,Occurrences");
    for (letter, indices) in distribution.iter() {
        csv.push_str(&format!("\n{},{}", letter_label(letter), indices.len()));
    }
    csv
}

/// `Word,Rank` table in rank order
#[must_use]
pub fn optimal_words_csv(ranked: &RankedWords) -> String {
    let mut csv = String::from("Word,Rank");
    for entry in ranked {
        csv.push_str(&format!("\n{},{}", entry.word, entry.score));
    }
    csv
}

/// One section per selection: heading row, then one word per row, sections
/// separated by a blank line
#[must_use]
pub fn unique_optimal_words_csv(selections: &[Selection]) -> String {
    let mut csv = String::new();
    for (index, selection) in selections.iter().enumerate() {
        if index > 0 {
            csv.push_str("\n\n");
        }
        csv.push_str(selection.overlap.heading());
        csv.push(',');
        for word in &selection.words {
            csv.push_str(&format!("\n{word},"));
        }
    }
    csv
}
