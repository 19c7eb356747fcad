//! Opening-word report
//!
//! Runs the full pipeline: distribution over the playable list, ranking of the
//! guessable list, and selection at every standard overlap level.

use crate::analysis::{
    LetterDistribution, RankError, RankedWords, Selection, build_distribution, rank_words,
    select_standard,
};
use crate::core::Word;
use crate::output::export::{
    ExportOutcome, LETTER_DISTRIBUTION_FILE, OPTIMAL_WORDS_FILE, UNIQUE_OPTIMAL_WORDS_FILE,
    write_if_absent,
};
use crate::output::formatters::{
    letter_distribution_csv, optimal_words_csv, unique_optimal_words_csv,
};
use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

/// Everything one run computes
#[derive(Debug, Clone)]
pub struct Report {
    pub distribution: LetterDistribution,
    pub ranked: RankedWords,
    pub selections: Vec<Selection>,
}

/// Build the report for a playable and a guessable word list
///
/// # Errors
///
/// Returns `RankError::UnknownLetter` if a guessable word uses a letter that
/// no playable word contains.
pub fn build_report(playable: &[Word], guessable: &[Word]) -> Result<Report, RankError> {
    let start = Instant::now();
    let distribution = build_distribution(playable);
    log::debug!(
        "Letter distribution over {} words: {} letters in {:?}",
        playable.len(),
        distribution.len(),
        start.elapsed()
    );

    let start = Instant::now();
    let ranked = rank_words(guessable, &distribution)?;
    log::debug!("Ranked {} words in {:?}", ranked.len(), start.elapsed());

    let selections = select_standard(&ranked);

    Ok(Report {
        distribution,
        ranked,
        selections,
    })
}

/// Export the report's three CSV files into `out_dir`, creating the directory
/// if needed. Existing files are skipped.
///
/// # Errors
///
/// Returns an I/O error if the directory cannot be created or a file cannot be
/// written.
pub fn export_report(report: &Report, out_dir: &Path) -> io::Result<Vec<ExportOutcome>> {
    fs::create_dir_all(out_dir)?;

    let documents = [
        (
            LETTER_DISTRIBUTION_FILE,
            letter_distribution_csv(&report.distribution),
        ),
        (OPTIMAL_WORDS_FILE, optimal_words_csv(&report.ranked)),
        (
            UNIQUE_OPTIMAL_WORDS_FILE,
            unique_optimal_words_csv(&report.selections),
        ),
    ];

    documents
        .iter()
        .map(|(name, contents)| write_if_absent(out_dir, name, contents))
        .collect()
}
