//! Frequency-weighted guess scoring
//!
//! Each candidate word is scored from the dictionary's letter frequencies:
//! a positional term for matching common letters in their common spots, and
//! a heavier inclusion term for covering letters that appear often anywhere.
//! Ranking the whole dictionary by this score fixes the guess order for a
//! solve.

use super::frequency::LetterFrequencies;
use crate::core::Word;

/// Weight applied to positional letter frequency
pub const POSITION_WEIGHT: f64 = 0.4;

/// Weight applied to overall inclusion frequency
pub const INCLUSION_WEIGHT: f64 = 2.7;

/// A word paired with its heuristic score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredWord {
    pub word: Word,
    pub score: f64,
}

/// Score a single word against the tallied frequencies
///
/// Every position contributes its positional frequency scaled by
/// [`POSITION_WEIGHT`]. Each distinct letter also contributes its overall
/// frequency scaled by [`INCLUSION_WEIGHT`], counted at its first occurrence
/// only, so repeating a letter earns no extra inclusion credit.
///
/// # Examples
/// ```
/// use wordle_freq::core::Word;
/// use wordle_freq::solver::{word_score, LetterFrequencies};
///
/// let dictionary = vec![Word::new("aaaaa").unwrap()];
/// let frequencies = LetterFrequencies::tally(&dictionary);
///
/// // 0.4 * 5 positional hits + 2.7 * 5 inclusion hits, credited once
/// let score = word_score(&dictionary[0], &frequencies);
/// assert!((score - 15.5).abs() < 1e-9);
/// ```
#[must_use]
pub fn word_score(word: &Word, frequencies: &LetterFrequencies) -> f64 {
    let chars = word.chars();
    let mut score = 0.0;

    for (position, &letter) in chars.iter().enumerate() {
        score += POSITION_WEIGHT * f64::from(frequencies.at_position(position, letter));

        if !chars[..position].contains(&letter) {
            score += INCLUSION_WEIGHT * f64::from(frequencies.total(letter));
        }
    }

    score
}

/// Rank every word by descending score
///
/// The sort is stable, so words with equal scores keep their dictionary
/// order.
#[must_use]
pub fn rank_words(words: &[Word], frequencies: &LetterFrequencies) -> Vec<ScoredWord> {
    let mut ranked: Vec<ScoredWord> = words
        .iter()
        .map(|word| ScoredWord {
            word: word.clone(),
            score: word_score(word, frequencies),
        })
        .collect();

    // Stable sort keeps dictionary order for equal scores
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}
