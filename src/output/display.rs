//! Display functions for command results

use super::formatters::{FeedbackStyle, distribution_bar, render_evaluation};
use crate::commands::{EvaluationSummary, OpenerResult, SolveOutcome};
use colored::Colorize;

/// Print the guess path of a solved word
pub fn print_solve_outcome(outcome: &SolveOutcome, verbose: bool, style: FeedbackStyle) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        outcome.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in outcome.turns.iter().enumerate() {
        println!(
            "\nGuess {}: {}  {}",
            i + 1,
            turn.guess.to_uppercase(),
            render_evaluation(&turn.evaluation, style)
        );

        if verbose {
            println!(
                "  Viable candidates: {} → {}",
                turn.viable_before, turn.viable_after
            );
        }
    }

    println!();
    println!(
        "{}",
        format!("✅ Solved in {} guesses!", outcome.guess_count())
            .green()
            .bold()
    );
}

/// Print a full-dictionary evaluation summary
pub fn print_evaluation_summary(summary: &EvaluationSummary) {
    println!("\n{}", "═".repeat(70));
    println!(" Evaluation Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Puzzles played:      {}", summary.total_words);
    println!(
        "  Average guesses:     {}",
        format!("{:.3}", summary.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Success rate:        {}",
        format!("{:.1}%", summary.success_rate()).green()
    );
    if summary.failures > 0 {
        println!(
            "  Failed to solve:     {}",
            format!("{}", summary.failures).red()
        );
    }
    if let Some((word, count)) = &summary.worst {
        println!(
            "  Hardest word:        {} ({count} guesses)",
            word.to_uppercase().yellow()
        );
    }
    println!(
        "  Total time:          {:.2}s",
        summary.duration.as_secs_f64()
    );
    println!("  Time per word:       {:.1}ms", summary.millis_per_word());

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = summary.distribution.iter().copied().max().unwrap_or(0).max(1);

    for (index, &count) in summary.distribution.iter().enumerate() {
        let percentage = if summary.total_words == 0 {
            0.0
        } else {
            count as f64 / summary.total_words as f64 * 100.0
        };
        let bar = distribution_bar(count as f64, max_count as f64, 40);

        println!(
            "  {} guesses: {} {count:4} ({percentage:5.1}%)",
            index + 1,
            bar.green()
        );
    }
}

/// Print the winner of an opening word sweep
pub fn print_opener_result(result: &OpenerResult) {
    println!("\n{}", "═".repeat(70));
    println!(" Opening Word Sweep ");
    println!("{}", "═".repeat(70));

    println!(
        "\n🏆 Best opener: {}",
        result.word.to_uppercase().bright_green().bold()
    );
    println!(
        "   Failed targets:   {}",
        format!("{}", result.failures).yellow()
    );
    println!("   Candidates tried: {}", result.candidates_tried);
    println!("   Sweep time:       {:.2}s", result.duration.as_secs_f64());
}
