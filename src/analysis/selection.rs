//! Greedy selection of near-disjoint top words
//!
//! Walks the ranking once and keeps every word that repeats at most a given
//! number of already-chosen letters. No backtracking, so the result is a
//! greedy cover rather than an optimal one.

use super::RankedWords;
use crate::core::{LetterSet, Word};
use rayon::prelude::*;

/// The overlap tolerances reported for every run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlap {
    /// No letter may repeat
    Disjoint,
    /// One already-used letter allowed per word
    Single,
    /// Two already-used letters allowed per word
    Double,
}

impl Overlap {
    /// All levels, in reporting order
    pub const ALL: [Self; 3] = [Self::Disjoint, Self::Single, Self::Double];

    /// Maximum number of already-used letters a selected word may contain
    #[must_use]
    pub const fn tolerance(self) -> usize {
        match self {
            Self::Disjoint => 0,
            Self::Single => 1,
            Self::Double => 2,
        }
    }

    /// Section heading used on the console and in exports
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Disjoint => "Unique Optimal Words (No Overlap)",
            Self::Single => "Unique Optimal Words (Single Overlap)",
            Self::Double => "Unique Optimal Words (Double Overlap)",
        }
    }
}

/// Words picked at one overlap level, in rank order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub overlap: Overlap,
    pub words: Vec<Word>,
}

impl Selection {
    /// Letters covered by the selected words
    #[must_use]
    pub fn letters(&self) -> LetterSet {
        self.words
            .iter()
            .fold(LetterSet::EMPTY, |acc, word| acc.union(word.letter_set()))
    }
}

/// Select ranked words that repeat at most `overlap_tolerance` used letters
///
/// A word's overlap is the number of its distinct letters already taken by
/// earlier selections. Accepted words add all their letters to the used set;
/// rejected words are never reconsidered.
///
/// # Examples
/// ```
/// use wordle_openers::analysis::{build_distribution, rank_words, select_disjoint};
/// use wordle_openers::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["cat", "dog", "tan"]);
/// let ranked = rank_words(&words, &build_distribution(&words)).unwrap();
///
/// let texts = |tolerance| -> Vec<String> {
///     select_disjoint(&ranked, tolerance).iter().map(|w| w.to_string()).collect()
/// };
/// assert_eq!(texts(0), ["cat", "dog"]);
/// assert_eq!(texts(2), ["cat", "tan", "dog"]);
/// ```
#[must_use]
pub fn select_disjoint(ranked: &RankedWords, overlap_tolerance: usize) -> Vec<Word> {
    let mut used = LetterSet::EMPTY;

    ranked
        .words()
        .filter(|word| {
            let letters = word.letter_set();
            if letters.intersection(used).len() > overlap_tolerance {
                return false;
            }
            used = used.union(letters);
            true
        })
        .cloned()
        .collect()
}

/// Run the selector at every standard overlap level
///
/// Levels are independent and run in parallel; results come back in
/// `Overlap::ALL` order.
#[must_use]
pub fn select_standard(ranked: &RankedWords) -> Vec<Selection> {
    Overlap::ALL
        .par_iter()
        .map(|&overlap| Selection {
            overlap,
            words: select_disjoint(ranked, overlap.tolerance()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::words;
    use crate::analysis::{build_distribution, rank_words};
    use crate::wordlists::{GUESSABLE, PLAYABLE, loader::words_from_slice};

    fn texts(selected: &[Word]) -> Vec<&str> {
        selected.iter().map(Word::text).collect()
    }

    fn embedded_ranking() -> RankedWords {
        let distribution = build_distribution(&words_from_slice(PLAYABLE));
        rank_words(&words_from_slice(GUESSABLE), &distribution).unwrap()
    }

    #[test]
    fn cat_dog_tan_by_tolerance() {
        // cat and tan outrank dog, ties keep list order
        let list = words(&["cat", "dog", "tan"]);
        let ranked = rank_words(&list, &build_distribution(&list)).unwrap();

        assert_eq!(texts(&select_disjoint(&ranked, 0)), ["cat", "dog"]);
        assert_eq!(texts(&select_disjoint(&ranked, 1)), ["cat", "dog"]);
        assert_eq!(texts(&select_disjoint(&ranked, 2)), ["cat", "tan", "dog"]);
    }

    #[test]
    fn rejected_word_does_not_mark_letters() {
        // Ranked dog, cot, cat: cot repeats o and is dropped, so c and t stay free
        let distribution = build_distribution(&words(&["cat", "dog", "cot", "bug"]));
        let ranked = rank_words(&words(&["cat", "dog", "cot"]), &distribution).unwrap();
        assert_eq!(ranked.position("cot"), Some(1));

        assert_eq!(texts(&select_disjoint(&ranked, 0)), ["dog", "cat"]);
    }

    #[test]
    fn repeated_letters_count_once() {
        // "eerie" shares only e with "eagle"
        let list = words(&["eagle", "eerie"]);
        let ranked = rank_words(&list, &build_distribution(&list)).unwrap();

        assert_eq!(texts(&select_disjoint(&ranked, 1)).len(), 2);
        assert_eq!(texts(&select_disjoint(&ranked, 0)).len(), 1);
    }

    #[test]
    fn empty_ranking_selects_nothing() {
        assert!(select_disjoint(&RankedWords::default(), 2).is_empty());
    }

    #[test]
    fn tolerance_zero_selections_are_pairwise_disjoint() {
        let selected = select_disjoint(&embedded_ranking(), 0);
        assert!(!selected.is_empty());

        for (i, a) in selected.iter().enumerate() {
            for b in &selected[i + 1..] {
                assert!(
                    a.letter_set().intersection(b.letter_set()).is_empty(),
                    "{a} and {b} share letters"
                );
            }
        }
    }

    #[test]
    fn selections_respect_their_tolerance() {
        for selection in select_standard(&embedded_ranking()) {
            let mut used = LetterSet::EMPTY;
            for word in &selection.words {
                let repeated = word.letter_set().intersection(used).len();
                assert!(repeated <= selection.overlap.tolerance());
                used = used.union(word.letter_set());
            }
            assert_eq!(used, selection.letters());
        }
    }

    #[test]
    fn higher_tolerance_selects_at_least_as_many() {
        let selections = select_standard(&embedded_ranking());
        let counts: Vec<usize> = selections.iter().map(|s| s.words.len()).collect();

        assert!(counts[0] <= counts[2], "counts: {counts:?}");
    }

    #[test]
    fn standard_levels_in_order_and_match_direct_calls() {
        let ranked = embedded_ranking();
        let selections = select_standard(&ranked);

        assert_eq!(selections.len(), 3);
        for (selection, overlap) in selections.iter().zip(Overlap::ALL) {
            assert_eq!(selection.overlap, overlap);
            assert_eq!(selection.words, select_disjoint(&ranked, overlap.tolerance()));
        }
    }

    #[test]
    fn first_selected_word_is_top_ranked() {
        let ranked = embedded_ranking();
        let top = ranked.get(0).unwrap();

        for selection in select_standard(&ranked) {
            assert_eq!(selection.words.first(), Some(&top.word));
        }
    }

    #[test]
    fn headings() {
        assert_eq!(Overlap::Disjoint.heading(), "Unique Optimal Words (No Overlap)");
        assert_eq!(Overlap::Double.tolerance(), 2);
    }
}
