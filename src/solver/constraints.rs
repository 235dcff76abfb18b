//! Accumulated knowledge about the hidden target
//!
//! Every evaluated guess narrows two kinds of facts: letters pinned to exact
//! positions, and per-letter occurrence bounds. Bounds only ever tighten, so
//! the set of permitted candidates shrinks monotonically over a session.

use crate::core::{Evaluation, Feedback, Word};

/// Inclusive occurrence bounds for one letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterBounds {
    /// Minimum occurrences the target must contain
    pub min: u8,
    /// Maximum occurrences the target may contain
    pub max: u8,
}

impl LetterBounds {
    /// The unconstrained range: anywhere from zero to all five positions
    pub const FULL: Self = Self { min: 0, max: 5 };

    /// Check whether an occurrence count falls within these bounds
    #[inline]
    #[must_use]
    pub const fn contains(self, count: u8) -> bool {
        count >= self.min && count <= self.max
    }
}

/// Constraint state built up from evaluated guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraints {
    /// Letters confirmed at exact positions
    fixed: [Option<u8>; 5],
    /// Occurrence bounds per letter, indexed a-z
    bounds: [LetterBounds; 26],
}

impl Constraints {
    /// Start with no knowledge: nothing fixed, every letter unconstrained
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fixed: [None; 5],
            bounds: [LetterBounds::FULL; 26],
        }
    }

    /// Fold one evaluated guess into the constraint state
    ///
    /// Correct symbols pin their letter to that position. For each distinct
    /// letter of the guess, the count of non-Absent symbols raises that
    /// letter's minimum, and the presence of an Absent symbol caps its
    /// maximum at the same count. Existing bounds are only ever tightened.
    pub fn record(&mut self, guess: &Word, evaluation: &Evaluation) {
        for position in 0..5 {
            if evaluation.symbol_at(position) == Feedback::Correct {
                let letter = guess.char_at(position);
                debug_assert!(
                    self.fixed[position].is_none_or(|existing| existing == letter),
                    "conflicting fixed letter at position {position}"
                );
                self.fixed[position] = Some(letter);
            }
        }

        for &letter in guess.letter_counts().keys() {
            let mut good = 0u8;
            let mut has_absent = false;

            for position in 0..5 {
                if guess.char_at(position) == letter {
                    if evaluation.symbol_at(position) == Feedback::Absent {
                        has_absent = true;
                    } else {
                        good += 1;
                    }
                }
            }

            let bounds = &mut self.bounds[letter_index(letter)];
            bounds.min = bounds.min.max(good);
            if has_absent {
                // An Absent symbol means every target occurrence is already
                // accounted for, so `good` is exact
                bounds.max = bounds.max.min(good);
            }
            debug_assert!(
                bounds.min <= bounds.max,
                "contradictory bounds for letter '{}'",
                letter as char
            );
        }
    }

    /// Check whether a candidate word is consistent with everything recorded
    #[must_use]
    pub fn permits(&self, candidate: &Word) -> bool {
        for position in 0..5 {
            if let Some(letter) = self.fixed[position]
                && candidate.char_at(position) != letter
            {
                return false;
            }
        }

        for letter in b'a'..=b'z' {
            if !self.bounds(letter).contains(candidate.count_of(letter)) {
                return false;
            }
        }

        true
    }

    /// Check whether all five positions are pinned (the target is known)
    #[inline]
    #[must_use]
    pub fn all_fixed(&self) -> bool {
        self.fixed.iter().all(Option::is_some)
    }

    /// Letters confirmed at exact positions, `None` where still unknown
    #[inline]
    #[must_use]
    pub const fn fixed_positions(&self) -> &[Option<u8>; 5] {
        &self.fixed
    }

    /// Current occurrence bounds for a letter
    #[inline]
    #[must_use]
    pub const fn bounds(&self, letter: u8) -> LetterBounds {
        self.bounds[letter_index(letter)]
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}
