//! Coverage ranking of guess words
//!
//! A guess word's coverage score is the number of distinct playable words that
//! share at least one letter with it.

use super::LetterDistribution;
use crate::core::Word;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Ranking failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    /// A guess word uses a letter that no playable word contains. The two word
    /// lists are expected to share an alphabet.
    UnknownLetter { word: String, letter: char },
}

impl fmt::Display for RankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLetter { word, letter } => write!(
                f,
                "Word '{word}' uses letter '{letter}', which appears in no playable word"
            ),
        }
    }
}

impl std::error::Error for RankError {}

/// A guess word with its coverage score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedWord {
    pub word: Word,
    pub score: usize,
}

/// Guess words ordered by descending coverage score
///
/// Ties keep the order of the guessable list.
#[derive(Debug, Clone, Default)]
pub struct RankedWords {
    ranked: Vec<RankedWord>,
    positions: FxHashMap<String, usize>,
}

/// Count the distinct playable words reachable through `word`'s unique letters
///
/// # Errors
///
/// Returns `RankError::UnknownLetter` if one of the word's letters has no entry
/// in the distribution.
///
/// # Examples
/// ```
/// use wordle_openers::analysis::{build_distribution, coverage_score};
/// use wordle_openers::core::Word;
/// use wordle_openers::wordlists::loader::words_from_slice;
///
/// let distribution = build_distribution(&words_from_slice(&["cat", "dog", "ant"]));
/// let score = coverage_score(&Word::new("cat").unwrap(), &distribution).unwrap();
/// assert_eq!(score, 2); // cat and ant
/// ```
pub fn coverage_score(word: &Word, distribution: &LetterDistribution) -> Result<usize, RankError> {
    let mut reached: FxHashSet<usize> = FxHashSet::default();

    for &letter in word.unique_letters() {
        let indices = distribution
            .get(letter)
            .ok_or_else(|| RankError::UnknownLetter {
                word: word.text().to_string(),
                letter: letter as char,
            })?;
        reached.extend(indices);
    }

    Ok(reached.len())
}

/// Rank guess words by coverage score
///
/// Words are scored in parallel; a word listed more than once is ranked once,
/// at its first position.
///
/// # Errors
///
/// Returns `RankError::UnknownLetter` for the first guess word, in list order,
/// that uses a letter missing from the distribution.
pub fn rank_words(
    words: &[Word],
    distribution: &LetterDistribution,
) -> Result<RankedWords, RankError> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let unique: Vec<&Word> = words.iter().filter(|w| seen.insert(w.text())).collect();

    // Indexed collect keeps list order, so the error reported is the first one
    let scored: Vec<Result<RankedWord, RankError>> = unique
        .par_iter()
        .map(|&word| {
            coverage_score(word, distribution).map(|score| RankedWord {
                word: word.clone(),
                score,
            })
        })
        .collect();
    let mut ranked = scored.into_iter().collect::<Result<Vec<_>, _>>()?;

    // sort_by is stable: ties stay in guessable-list order
    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    Ok(RankedWords::from_sorted(ranked))
}

impl RankedWords {
    fn from_sorted(ranked: Vec<RankedWord>) -> Self {
        let positions = ranked
            .iter()
            .enumerate()
            .map(|(position, entry)| (entry.word.text().to_string(), position))
            .collect();

        Self { ranked, positions }
    }

    /// Entries in rank order
    pub fn iter(&self) -> std::slice::Iter<'_, RankedWord> {
        self.ranked.iter()
    }

    /// Words in rank order
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.ranked.iter().map(|entry| &entry.word)
    }

    /// The `n` highest ranked entries
    #[must_use]
    pub fn top(&self, n: usize) -> &[RankedWord] {
        &self.ranked[..n.min(self.ranked.len())]
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&RankedWord> {
        self.ranked.get(position)
    }

    /// Zero-based rank of a word, if it was ranked
    #[must_use]
    pub fn position(&self, text: &str) -> Option<usize> {
        self.positions.get(text).copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

impl<'a> IntoIterator for &'a RankedWords {
    type Item = &'a RankedWord;
    type IntoIter = std::slice::Iter<'a, RankedWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
