//! Solver facade over a prepared dictionary
//!
//! Construction tallies letter frequencies and ranks the dictionary once.
//! Every session afterwards reuses that ranking, so running thousands of
//! targets amortizes the setup cost.

use super::frequency::LetterFrequencies;
use super::scorer::{ScoredWord, rank_words};
use super::selector::SolveError;
use super::session::{Session, SolveReport};
use crate::core::Word;

/// Frequency-ranking solver over a fixed dictionary
#[derive(Debug)]
pub struct Solver {
    dictionary: Vec<Word>,
    ranked: Vec<ScoredWord>,
}

impl Solver {
    /// Build a solver from a dictionary, ranking it up front
    #[must_use]
    pub fn new(dictionary: Vec<Word>) -> Self {
        let frequencies = LetterFrequencies::tally(&dictionary);
        let ranked = rank_words(&dictionary, &frequencies);

        Self { dictionary, ranked }
    }

    /// The dictionary the solver draws guesses from
    #[must_use]
    pub fn dictionary(&self) -> &[Word] {
        &self.dictionary
    }

    /// The dictionary ranked by descending heuristic score
    #[must_use]
    pub fn ranked(&self) -> &[ScoredWord] {
        &self.ranked
    }

    /// Check whether a word belongs to the dictionary
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.dictionary.contains(word)
    }

    /// Start a fresh session, optionally forcing the opening guess
    #[must_use]
    pub fn session(&self, opener: Option<Word>) -> Session<'_> {
        Session::new(&self.ranked, opener)
    }

    /// Solve for a target in one call
    ///
    /// # Errors
    /// Returns [`SolveError::NoViableGuess`] if the ranking runs out of
    /// candidates, which cannot happen for targets inside the dictionary.
    pub fn solve(&self, target: &Word, opener: Option<Word>) -> Result<SolveReport, SolveError> {
        self.session(opener).run(target)
    }
}
