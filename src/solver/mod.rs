//! Wordle solving machinery
//!
//! The pieces fit together in layers: frequency tallies feed the scorer,
//! the scorer's ranking feeds the selector, and a session drives selection
//! against accumulating constraints until the target is pinned. [`Solver`]
//! wraps the whole pipeline behind one type.

mod constraints;
mod engine;
mod frequency;
mod scorer;
mod selector;
mod session;

pub use constraints::{Constraints, LetterBounds};
pub use engine::Solver;
pub use frequency::LetterFrequencies;
pub use scorer::{INCLUSION_WEIGHT, POSITION_WEIGHT, ScoredWord, rank_words, word_score};
pub use selector::{GuessSelector, SolveError};
pub use session::{Session, SolveReport, SolveStep};
