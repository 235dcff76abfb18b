//! Formatting utilities for terminal output

use crate::core::{Evaluation, Feedback};

/// How to render feedback symbols in terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackStyle {
    /// Single-character codes: `*` correct, `^` misplaced, `X` absent
    Codes,
    /// Colored square emoji
    Emoji,
}

/// Render an evaluation in the requested style
#[must_use]
pub fn render_evaluation(evaluation: &Evaluation, style: FeedbackStyle) -> String {
    match style {
        FeedbackStyle::Codes => evaluation.to_codes(),
        FeedbackStyle::Emoji => evaluation
            .symbols()
            .iter()
            .map(|symbol| match symbol {
                Feedback::Correct => '🟩',
                Feedback::Misplaced => '🟨',
                Feedback::Absent => '⬛',
            })
            .collect(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn distribution_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
