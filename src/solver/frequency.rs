//! Letter frequency tallies over a dictionary
//!
//! The ranking heuristic needs two views of the dictionary: how often each
//! letter appears at each position, and how often it appears anywhere. Both
//! are tallied in one pass and held in fixed-size arrays indexed by letter.

use crate::core::Word;

/// Letter occurrence counts for a dictionary, positional and overall
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterFrequencies {
    /// Occurrences of each letter anywhere in the dictionary
    totals: [u32; 26],
    /// Occurrences of each letter at each of the five positions
    by_position: [[u32; 26]; 5],
}

impl LetterFrequencies {
    /// Tally letter occurrences over the given words
    ///
    /// Every position of every word counts, so a word with a repeated letter
    /// contributes that letter more than once to the overall total.
    #[must_use]
    pub fn tally(words: &[Word]) -> Self {
        let mut totals = [0u32; 26];
        let mut by_position = [[0u32; 26]; 5];

        for word in words {
            for (position, &letter) in word.chars().iter().enumerate() {
                let index = letter_index(letter);
                totals[index] += 1;
                by_position[position][index] += 1;
            }
        }

        Self {
            totals,
            by_position,
        }
    }

    /// Occurrences of `letter` anywhere in the tallied dictionary
    #[inline]
    #[must_use]
    pub const fn total(&self, letter: u8) -> u32 {
        self.totals[letter_index(letter)]
    }

    /// Occurrences of `letter` at `position` (0-4) in the tallied dictionary
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn at_position(&self, position: usize, letter: u8) -> u32 {
        self.by_position[position][letter_index(letter)]
    }
}

#[inline]
const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}
