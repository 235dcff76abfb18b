//! Validated word type
//!
//! The solver deals exclusively in lowercase five-letter words. [`Word`]
//! enforces that shape once at construction so the hot paths can index
//! bytes without re-checking.

use rustc_hash::FxHashMap;
use std::fmt;

/// A lowercase five-letter word
///
/// Keeps the text, its byte form, and how often each letter occurs. The
/// occurrence counts drive duplicate-letter handling in feedback
/// evaluation and constraint checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: [u8; 5],
    letter_counts: FxHashMap<u8, u8>,
}

/// Rejection reasons for [`Word::new`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Expected a 5-letter word, got {len} characters")
            }
            Self::NonAscii => write!(f, "Only ASCII letters are allowed"),
            Self::InvalidCharacters => write!(f, "Only the letters a-z are allowed"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Build a Word, lowercasing the input first
    ///
    /// # Errors
    /// Returns `WordError` when the input is not exactly five bytes long,
    /// is not ASCII, or contains anything besides letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_freq::core::Word;
    ///
    /// let word = Word::new("Slate").unwrap();
    /// assert_eq!(word.text(), "slate");
    ///
    /// assert!(Word::new("banana").is_err());
    /// assert!(Word::new("sl8te").is_err());
    /// ```
    ///
    /// # Panics
    /// Never panics; the byte conversion is guarded by the length check.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.len() != 5 {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let chars: [u8; 5] = text.as_bytes().try_into().expect("five bytes checked above");

        // Tally letters for duplicate accounting
        let mut letter_counts: FxHashMap<u8, u8> = FxHashMap::default();
        for &ch in &chars {
            *letter_counts.entry(ch).or_insert(0) += 1;
        }

        Ok(Self {
            text,
            chars,
            letter_counts,
        })
    }

    /// The text of the word
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The word as lowercase ASCII bytes
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; 5] {
        &self.chars
    }

    /// The letter at a position
    ///
    /// # Panics
    /// Panics when position is 5 or more
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// How many times a letter occurs in the word
    ///
    /// Returns 0 for letters that do not appear.
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> u8 {
        self.letter_counts.get(&letter).copied().unwrap_or(0)
    }

    /// The count of each letter in the word
    ///
    /// Used for feedback evaluation with duplicate letters.
    #[inline]
    pub(crate) fn letter_counts(&self) -> &FxHashMap<u8, u8> {
        &self.letter_counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
