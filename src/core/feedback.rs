//! Guess feedback evaluation
//!
//! Evaluating a guess against a hidden target yields one feedback symbol per
//! position. Duplicate letters follow the standard accounting rules: each
//! target occurrence is consumed once, by Correct marks first and then by
//! Misplaced marks allocated left to right.

use super::Word;
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter matches the target at this exact position
    Correct,
    /// Letter exists in the target but not at this position
    Misplaced,
    /// No unaccounted occurrence of this letter remains in the target
    Absent,
}

impl Feedback {
    /// Single-character code used in text output
    #[inline]
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => '*',
            Self::Misplaced => '^',
            Self::Absent => 'X',
        }
    }

    /// Parse a feedback symbol from its single-character code
    ///
    /// Accepts `*` for Correct, `^` for Misplaced, and `X`/`x` for Absent.
    #[must_use]
    pub const fn from_code(c: char) -> Option<Self> {
        match c {
            '*' => Some(Self::Correct),
            '^' => Some(Self::Misplaced),
            'X' | 'x' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// The complete feedback for one guess: five symbols, ordered left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation([Feedback; 5]);

impl Evaluation {
    /// All positions correct (the guess equals the target)
    pub const SOLVED: Self = Self([Feedback::Correct; 5]);

    /// Build an evaluation from five explicit symbols
    #[inline]
    #[must_use]
    pub const fn new(symbols: [Feedback; 5]) -> Self {
        Self(symbols)
    }

    /// Evaluate `guess` against the hidden `target`
    ///
    /// Implements the exact feedback rules, including duplicate-letter
    /// handling.
    ///
    /// # Algorithm
    /// 1. First pass: mark Correct wherever guess and target agree, removing
    ///    that occurrence from the target's available pool
    /// 2. Second pass, left to right over the remaining positions: mark
    ///    Misplaced while the pool still holds the guess letter, else Absent
    ///
    /// The function is pure: the same (target, guess) pair always yields the
    /// identical evaluation.
    ///
    /// # Examples
    /// ```
    /// use wordle_freq::core::{Evaluation, Word};
    ///
    /// let target = Word::new("crane").unwrap();
    /// let guess = Word::new("slate").unwrap();
    /// let evaluation = Evaluation::calculate(&target, &guess);
    ///
    /// // S(absent) L(absent) A(correct) T(absent) E(correct)
    /// assert_eq!(evaluation.to_codes(), "XX*X*");
    /// ```
    #[must_use]
    pub fn calculate(target: &Word, guess: &Word) -> Self {
        let mut symbols = [Feedback::Absent; 5];
        let mut available = target.letter_counts().clone();

        // First pass: exact matches consume their target occurrence
        // Allow: index needed to read guess[i] and target[i] and to set symbols[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if guess.char_at(i) == target.char_at(i) {
                symbols[i] = Feedback::Correct;

                if let Some(count) = available.get_mut(&guess.char_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced marks drain what the first pass left,
        // leftmost occurrences first
        // Allow: index needed to read guess[i] and check/set symbols[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if symbols[i] == Feedback::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                symbols[i] = Feedback::Misplaced;
                *count -= 1;
            }
        }

        Self(symbols)
    }

    /// The five symbols, left to right
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[Feedback; 5] {
        &self.0
    }

    /// The feedback symbol at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn symbol_at(&self, position: usize) -> Feedback {
        self.0[position]
    }

    /// Check if every position is Correct
    #[inline]
    #[must_use]
    pub fn is_solved(self) -> bool {
        self == Self::SOLVED
    }

    /// Render as a five-character code string like `"XX*X*"`
    #[must_use]
    pub fn to_codes(self) -> String {
        self.0.iter().map(|symbol| symbol.code()).collect()
    }

    /// Parse an evaluation from a five-character code string
    ///
    /// # Examples
    /// ```
    /// use wordle_freq::core::Evaluation;
    ///
    /// let evaluation = Evaluation::from_str("^^**X").unwrap();
    /// assert_eq!(evaluation.to_codes(), "^^**X");
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Option form reads better at call sites; FromStr is implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != 5 {
            return None;
        }

        let mut symbols = [Feedback::Absent; 5];
        for (i, ch) in chars.into_iter().enumerate() {
            symbols[i] = Feedback::from_code(ch)?;
        }

        Some(Self(symbols))
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_codes())
    }
}

impl std::str::FromStr for Evaluation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn all_correct_when_guess_equals_target() {
        for text in ["crane", "slate", "abbey", "aaaaa"] {
            let w = word(text);
            let evaluation = Evaluation::calculate(&w, &w);
            assert_eq!(evaluation, Evaluation::SOLVED);
            assert!(evaluation.is_solved());
        }
    }

    #[test]
    fn all_absent_for_disjoint_words() {
        let evaluation = Evaluation::calculate(&word("fghij"), &word("abcde"));
        assert_eq!(evaluation.to_codes(), "XXXXX");
        assert!(!evaluation.is_solved());
    }

    #[test]
    fn crane_versus_slate() {
        // A and E sit at the same positions in both words; S, L, T do not
        // appear in CRANE at all
        let evaluation = Evaluation::calculate(&word("crane"), &word("slate"));
        assert_eq!(evaluation.to_codes(), "XX*X*");
    }

    #[test]
    fn duplicate_letters_babes_against_abbey() {
        // ABBEY has two B's: one is consumed by the Correct at position 2,
        // the other by the Misplaced B at position 0
        let evaluation = Evaluation::calculate(&word("abbey"), &word("babes"));
        assert_eq!(evaluation.to_codes(), "^^**X");
    }

    #[test]
    fn excess_duplicates_marked_absent() {
        // Three B's guessed, two in the target: the Correct consumes one,
        // the leftmost unmatched B takes the other, the rest is Absent
        let evaluation = Evaluation::calculate(&word("abbey"), &word("bobby"));
        assert_eq!(evaluation.to_codes(), "^X*X*");
    }

    #[test]
    fn correct_takes_priority_over_misplaced() {
        // CRANE has a single E; the Correct at position 4 claims it, so the
        // earlier E's get nothing
        let evaluation = Evaluation::calculate(&word("crane"), &word("eerie"));
        assert_eq!(evaluation.to_codes(), "XX^X*");
    }

    #[test]
    fn leftmost_misplaced_wins() {
        // EARLY has one E; the guess offers two, the leftmost takes the mark
        let evaluation = Evaluation::calculate(&word("early"), &word("speed"));
        assert_eq!(evaluation.to_codes(), "XX^XX");
    }

    #[test]
    fn misplaced_pair_within_target_count() {
        // SPEED holds two E's and one S, so both guessed E's and the S are
        // Misplaced
        let evaluation = Evaluation::calculate(&word("speed"), &word("erase"));
        assert_eq!(evaluation.to_codes(), "^XX^^");
    }

    #[test]
    fn evaluation_is_deterministic() {
        let target = word("abbey");
        let guess = word("babes");
        let first = Evaluation::calculate(&target, &guess);

        for _ in 0..3 {
            assert_eq!(Evaluation::calculate(&target, &guess), first);
        }
    }

    #[test]
    fn from_str_valid() {
        let evaluation = Evaluation::from_str("X^*x*").unwrap();
        assert_eq!(evaluation.symbol_at(0), Feedback::Absent);
        assert_eq!(evaluation.symbol_at(1), Feedback::Misplaced);
        assert_eq!(evaluation.symbol_at(2), Feedback::Correct);
        assert_eq!(evaluation.symbol_at(3), Feedback::Absent);
        assert_eq!(evaluation.symbol_at(4), Feedback::Correct);
    }

    #[test]
    fn from_str_invalid() {
        assert!(Evaluation::from_str("**^XX*").is_none()); // Too long (6 chars)
        assert!(Evaluation::from_str("**^").is_none()); // Too short
        assert!(Evaluation::from_str("**?XX").is_none()); // Invalid char
        assert!(Evaluation::from_str("").is_none()); // Empty
    }

    #[test]
    fn from_str_trait_round_trip() {
        let evaluation: Evaluation = "^^**X".parse().unwrap();
        assert_eq!(evaluation.to_codes(), "^^**X");
        assert_eq!(format!("{evaluation}"), "^^**X");

        let error: Result<Evaluation, _> = "nope!".parse();
        assert!(error.is_err());
    }

    #[test]
    fn symbols_accessor_matches_positions() {
        let evaluation = Evaluation::calculate(&word("crane"), &word("trace"));
        assert_eq!(
            evaluation.symbols(),
            &[
                Feedback::Absent,
                Feedback::Correct,
                Feedback::Correct,
                Feedback::Misplaced,
                Feedback::Correct,
            ]
        );
    }
}
