//! Word representation
//!
//! A Word stores its lowercase text along with its distinct letters, which is all
//! the letter-coverage analysis ever looks at.

use super::LetterSet;
use std::fmt;

/// A lowercase ASCII word with its unique letters precomputed
///
/// Length is not fixed here; a word list is assumed to hold words of one length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    unique_letters: Vec<u8>,
    letter_set: LetterSet,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The word is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_openers::core::Word;
    ///
    /// let word = Word::new("Speed").unwrap();
    /// assert_eq!(word.text(), "speed");
    /// assert_eq!(word.unique_letters(), b"sped");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        // Distinct letters in first-seen order
        let mut letter_set = LetterSet::EMPTY;
        let unique_letters = text
            .bytes()
            .filter(|&letter| letter_set.insert(letter))
            .collect();

        Ok(Self {
            text,
            unique_letters,
            letter_set,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters, counting repeats
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always `false`; construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Distinct letters in the order they first appear
    #[inline]
    #[must_use]
    pub fn unique_letters(&self) -> &[u8] {
        &self.unique_letters
    }

    /// Distinct letters as a set
    #[inline]
    #[must_use]
    pub const fn letter_set(&self) -> LetterSet {
        self.letter_set
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
