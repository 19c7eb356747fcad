//! Letter distribution over a word list
//!
//! For every letter, the indices of the words that contain it at least once.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Per-letter word indices, ordered by how many words contain each letter
///
/// Entries are sorted by descending word count. Letters with equal counts keep
/// the order in which they were first seen. Every index list is non-empty and
/// ascending.
#[derive(Debug, Clone, Default)]
pub struct LetterDistribution {
    entries: Vec<(u8, Vec<usize>)>,
    positions: FxHashMap<u8, usize>,
}

/// Build the letter distribution of a word list
///
/// A letter repeated within one word contributes that word's index once.
///
/// # Examples
/// ```
/// use wordle_openers::analysis::build_distribution;
/// use wordle_openers::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["cat", "dog", "ant"]);
/// let distribution = build_distribution(&words);
///
/// let order: String = distribution.letters().map(char::from).collect();
/// assert_eq!(order, "atcdogn");
/// assert_eq!(distribution.get(b'a'), Some(&[0, 2][..]));
/// ```
#[must_use]
pub fn build_distribution(words: &[Word]) -> LetterDistribution {
    let mut entries: Vec<(u8, Vec<usize>)> = Vec::new();
    let mut positions: FxHashMap<u8, usize> = FxHashMap::default();

    for (index, word) in words.iter().enumerate() {
        for &letter in word.unique_letters() {
            let position = *positions.entry(letter).or_insert_with(|| {
                entries.push((letter, Vec::new()));
                entries.len() - 1
            });
            entries[position].1.push(index);
        }
    }

    // sort_by is stable: ties stay in first-seen order
    entries.sort_by(|(_, a), (_, b)| b.len().cmp(&a.len()));

    let positions = entries
        .iter()
        .enumerate()
        .map(|(position, &(letter, _))| (letter, position))
        .collect();

    LetterDistribution { entries, positions }
}

impl LetterDistribution {
    /// Indices of the words containing `letter`, or `None` if no word does
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<&[usize]> {
        self.positions
            .get(&letter)
            .map(|&position| self.entries[position].1.as_slice())
    }

    /// Number of words containing `letter` (0 if absent)
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> usize {
        self.get(letter).map_or(0, <[usize]>::len)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.positions.contains_key(&letter)
    }

    /// Entries in distribution order
    pub fn iter(&self) -> impl Iterator<Item = (u8, &[usize])> {
        self.entries
            .iter()
            .map(|(letter, indices)| (*letter, indices.as_slice()))
    }

    /// Letters in distribution order
    pub fn letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.entries.iter().map(|&(letter, _)| letter)
    }

    /// Number of distinct letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
