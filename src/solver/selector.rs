//! Cursor-based guess selection
//!
//! Guesses are drawn from the pre-ranked dictionary by a forward-only
//! cursor: each turn resumes the scan where the previous turn left off and
//! takes the first word that has not been guessed and that the constraints
//! permit. A forced opener bypasses the scan for the first turn without
//! moving the cursor.

use super::constraints::Constraints;
use super::scorer::ScoredWord;
use crate::core::Word;
use std::fmt;

/// Errors that can abort a solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The ranked word list was exhausted before a permitted guess was found
    NoViableGuess,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoViableGuess => {
                write!(f, "ranked word list exhausted without a viable guess")
            }
        }
    }
}

impl std::error::Error for SolveError {}

/// Forward-only guess picker over a ranked word list
#[derive(Debug)]
pub struct GuessSelector<'a> {
    ranked: &'a [ScoredWord],
    cursor: usize,
    opener: Option<Word>,
}

impl<'a> GuessSelector<'a> {
    /// Create a selector, optionally forcing the first guess
    ///
    /// The opener is returned verbatim on the first pick and leaves the
    /// cursor at the top of the ranking, so the second turn still considers
    /// the best-ranked words.
    #[must_use]
    pub const fn new(ranked: &'a [ScoredWord], opener: Option<Word>) -> Self {
        Self {
            ranked,
            cursor: 0,
            opener,
        }
    }

    /// Pick the next guess for the current turn
    ///
    /// Scans forward from the cursor for the highest-ranked word that is not
    /// in `history` and that `constraints` permit. Words skipped here are
    /// never reconsidered on later turns.
    ///
    /// # Errors
    /// Returns [`SolveError::NoViableGuess`] when the scan reaches the end
    /// of the ranked list.
    pub fn next_viable(
        &mut self,
        history: &[Word],
        constraints: &Constraints,
    ) -> Result<Word, SolveError> {
        if history.is_empty()
            && let Some(opener) = self.opener.take()
        {
            return Ok(opener);
        }

        while let Some(scored) = self.ranked.get(self.cursor) {
            self.cursor += 1;

            if !history.contains(&scored.word) && constraints.permits(&scored.word) {
                return Ok(scored.word.clone());
            }
        }

        Err(SolveError::NoViableGuess)
    }
}
