//! One solving session against a hidden target
//!
//! A session owns the per-game state: the guess history, the accumulated
//! constraints, and the selection cursor. Each turn picks a guess, evaluates
//! it against the target, and folds the feedback back into the constraints.
//! The loop ends once every position is pinned, which can only happen on the
//! guess that equals the target.

use super::constraints::Constraints;
use super::scorer::ScoredWord;
use super::selector::{GuessSelector, SolveError};
use crate::core::{Evaluation, Word};

/// One guess and the feedback it earned
#[derive(Debug, Clone)]
pub struct SolveStep {
    pub guess: Word,
    pub evaluation: Evaluation,
}

/// Record of a completed session
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// The target the session was solving for
    pub target: Word,
    /// Every guess taken, in order
    pub steps: Vec<SolveStep>,
    /// Final pinned letters, all `Some` for a completed session
    pub fixed_positions: [Option<u8>; 5],
}

impl SolveReport {
    /// Number of guesses the session took
    #[inline]
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.steps.len()
    }

    /// The final guess, which equals the target
    ///
    /// # Panics
    /// Panics if the report holds no steps
    #[must_use]
    pub fn solution(&self) -> &Word {
        &self
            .steps
            .last()
            .expect("a completed session holds at least one step")
            .guess
    }
}

/// Drives guess, evaluate, and record turns until the target is pinned
#[derive(Debug)]
pub struct Session<'a> {
    selector: GuessSelector<'a>,
    constraints: Constraints,
    history: Vec<Word>,
}

impl<'a> Session<'a> {
    /// Start a session over a ranked word list, optionally forcing the opener
    #[must_use]
    pub fn new(ranked: &'a [ScoredWord], opener: Option<Word>) -> Self {
        Self {
            selector: GuessSelector::new(ranked, opener),
            constraints: Constraints::new(),
            history: Vec::new(),
        }
    }

    /// Run the session to completion against `target`
    ///
    /// Takes as many turns as the ranking allows; the caller decides what
    /// guess count still counts as a win.
    ///
    /// # Errors
    /// Returns [`SolveError::NoViableGuess`] if the ranked list runs out,
    /// which can only happen when the target is not part of the ranking.
    pub fn run(mut self, target: &Word) -> Result<SolveReport, SolveError> {
        let mut steps = Vec::new();

        loop {
            let guess = self.selector.next_viable(&self.history, &self.constraints)?;
            let evaluation = Evaluation::calculate(target, &guess);

            self.constraints.record(&guess, &evaluation);
            self.history.push(guess.clone());
            steps.push(SolveStep { guess, evaluation });

            if self.constraints.all_fixed() {
                return Ok(SolveReport {
                    target: target.clone(),
                    steps,
                    fixed_positions: *self.constraints.fixed_positions(),
                });
            }
        }
    }
}
