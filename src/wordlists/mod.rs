//! Word lists for Wordle solving
//!
//! One embedded dictionary serves as both the guess pool and the answer pool.
//! A custom list can be substituted from a file at runtime.

mod embedded;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use std::io;
use std::path::Path;

/// The embedded dictionary as validated [`Word`] values
#[must_use]
pub fn default_words() -> Vec<Word> {
    WORDS
        .iter()
        .filter_map(|&text| Word::new(text).ok())
        .collect()
}

/// Read a dictionary from a newline-separated file
///
/// Entries that fail [`Word`] validation are skipped, as are blank lines.
///
/// # Errors
///
/// Returns an I/O error when the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_freq::wordlists::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// assert!(!words.is_empty());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let text = std::fs::read_to_string(path)?;
    Ok(text
        .lines()
        .filter_map(|line| Word::new(line.trim()).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn expected_dictionary_size() {
        assert_eq!(WORDS_COUNT, 2261);
    }

    #[test]
    fn every_embedded_word_validates() {
        for &text in WORDS {
            assert!(
                Word::new(text).is_ok(),
                "embedded word '{text}' failed validation"
            );
        }
    }

    #[test]
    fn embedded_words_are_duplicate_free() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn default_words_converts_the_whole_list() {
        assert_eq!(default_words().len(), WORDS_COUNT);
    }
}
