//! Word analysis command
//!
//! Reports the coverage score and rank of a single guess word.

use crate::analysis::{LetterDistribution, RankError, RankedWords, coverage_score};
use crate::core::{Word, WordError};
use std::fmt;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub score: usize,
    pub total_playable: usize,
    /// Zero-based position in the ranking, if the word is guessable
    pub rank: Option<usize>,
    pub total_ranked: usize,
    /// Each distinct letter with the number of playable words containing it
    pub letters: Vec<(u8, usize)>,
}

impl AnalysisResult {
    /// Share of playable words reached, as a percentage
    #[must_use]
    pub fn coverage_percent(&self) -> f64 {
        if self.total_playable == 0 {
            return 0.0;
        }
        self.score as f64 * 100.0 / self.total_playable as f64
    }
}

/// Why a word could not be analyzed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    InvalidWord(WordError),
    Rank(RankError),
}

impl fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(e) => write!(f, "Invalid word: {e}"),
            Self::Rank(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AnalyzeError {}

impl From<WordError> for AnalyzeError {
    fn from(e: WordError) -> Self {
        Self::InvalidWord(e)
    }
}

impl From<RankError> for AnalyzeError {
    fn from(e: RankError) -> Self {
        Self::Rank(e)
    }
}

/// Analyze a word against a distribution and an existing ranking
///
/// The word does not have to be guessable; its rank is then `None`.
///
/// # Errors
///
/// Returns an error if:
/// - The word is invalid (empty or not ASCII letters)
/// - The word uses a letter missing from the distribution
pub fn analyze_word(
    word: &str,
    distribution: &LetterDistribution,
    ranked: &RankedWords,
    total_playable: usize,
) -> Result<AnalysisResult, AnalyzeError> {
    let word = Word::new(word)?;
    let score = coverage_score(&word, distribution)?;

    let letters = word
        .unique_letters()
        .iter()
        .map(|&letter| (letter, distribution.count(letter)))
        .collect();

    Ok(AnalysisResult {
        rank: ranked.position(word.text()),
        word: word.text().to_string(),
        score,
        total_playable,
        total_ranked: ranked.len(),
        letters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::words;
    use crate::analysis::{build_distribution, rank_words};

    fn fixture() -> (LetterDistribution, RankedWords) {
        let playable = words(&["cat", "dog", "ant"]);
        let distribution = build_distribution(&playable);
        let ranked = rank_words(&words(&["dog", "cat"]), &distribution).unwrap();
        (distribution, ranked)
    }

    #[test]
    fn analyze_ranked_word() {
        let (distribution, ranked) = fixture();

        let result = analyze_word("CAT", &distribution, &ranked, 3).unwrap();

        assert_eq!(result.word, "cat");
        assert_eq!(result.score, 2);
        assert_eq!(result.rank, Some(0));
        assert_eq!(result.total_ranked, 2);
        assert_eq!(result.letters, [(b'c', 1), (b'a', 2), (b't', 2)]);
        assert!((result.coverage_percent() - 66.666).abs() < 0.01);
    }

    #[test]
    fn analyze_unranked_word() {
        let (distribution, ranked) = fixture();

        let result = analyze_word("tango", &distribution, &ranked, 3).unwrap();

        assert_eq!(result.score, 3);
        assert_eq!(result.rank, None);
    }

    #[test]
    fn analyze_invalid_word() {
        let (distribution, ranked) = fixture();

        let result = analyze_word("c4t", &distribution, &ranked, 3);
        assert!(matches!(result, Err(AnalyzeError::InvalidWord(_))));
    }

    #[test]
    fn analyze_unknown_letter() {
        let (distribution, ranked) = fixture();

        let result = analyze_word("zebra", &distribution, &ranked, 3);
        assert!(matches!(result, Err(AnalyzeError::Rank(_))));
    }
}
