//! Wordle Frequency Solver
//!
//! A Wordle solver that ranks guesses by positional and inclusion letter
//! frequency, then narrows the field with occurrence-bound constraints until
//! the target is pinned.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_freq::core::Word;
//! use wordle_freq::solver::Solver;
//!
//! let dictionary: Vec<Word> = ["crane", "slate", "irate", "trace"]
//!     .iter()
//!     .map(|text| Word::new(*text).unwrap())
//!     .collect();
//!
//! let solver = Solver::new(dictionary);
//! let target = Word::new("crane").unwrap();
//!
//! let report = solver.solve(&target, None).unwrap();
//! assert_eq!(report.solution(), &target);
//! assert!(report.guess_count() <= 4);
//! ```

// Core domain types
pub mod core;

// Solving machinery
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
