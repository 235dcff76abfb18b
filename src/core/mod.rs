//! Core domain types for Wordle
//!
//! Validated five-letter words and the feedback produced by evaluating a
//! guess against a target. Everything here is pure and deterministic.

mod feedback;
mod word;

pub use feedback::{Evaluation, Feedback};
pub use word::{Word, WordError};
