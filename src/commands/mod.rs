//! Command implementations

pub mod evaluate;
pub mod opener;
pub mod solve;

pub use evaluate::{EvaluationSummary, run_evaluation};
pub use opener::{OpenerResult, find_best_opener};
pub use solve::{SolveOutcome, TurnReport, run_solve};
