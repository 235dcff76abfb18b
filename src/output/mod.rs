//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_evaluation_summary, print_opener_result, print_solve_outcome};
pub use formatters::FeedbackStyle;
