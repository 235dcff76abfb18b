//! Best opening word sweep
//!
//! Tries every dictionary word as a forced opener, scores each by how many
//! targets its full-dictionary evaluation fails to solve within six guesses,
//! and keeps the candidate with the fewest failures.

use super::evaluate::run_evaluation;
use crate::core::Word;
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Result of sweeping candidate opening words
#[derive(Debug, Clone)]
pub struct OpenerResult {
    /// The winning opener
    pub word: String,
    /// Targets its evaluation failed to solve within six guesses
    pub failures: usize,
    pub candidates_tried: usize,
    pub duration: Duration,
}

/// Evaluate every candidate opener and keep the one with the fewest failures
///
/// Ties keep the earliest candidate in dictionary order.
///
/// # Errors
///
/// Returns an error if there are no candidates to try, or if any underlying
/// evaluation aborts.
pub fn find_best_opener(
    solver: &Solver,
    limit: Option<usize>,
    show_progress: bool,
) -> Result<OpenerResult, String> {
    let candidates: Vec<&Word> = solver
        .dictionary()
        .iter()
        .take(limit.unwrap_or(solver.dictionary().len()))
        .collect();

    if candidates.is_empty() {
        return Err("No candidate opening words to evaluate".to_string());
    }

    let progress = show_progress.then(|| {
        println!("🎯 Sweeping {} candidate openers...", candidates.len());

        let pb = ProgressBar::new(candidates.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    });

    let best_seen = AtomicUsize::new(usize::MAX);

    let start = Instant::now();

    let failure_counts: Vec<usize> = candidates
        .par_iter()
        .map(|&candidate| {
            let failures = run_evaluation(solver, None, Some(candidate), false)?.failures;

            if let Some(pb) = &progress {
                let best = best_seen.fetch_min(failures, Ordering::Relaxed).min(failures);
                pb.set_message(format!("best so far: {best} failures"));
                pb.inc(1);
            }

            Ok(failures)
        })
        .collect::<Result<Vec<usize>, String>>()?;

    let duration = start.elapsed();

    if let Some(pb) = &progress {
        pb.finish_with_message("Complete!");
    }

    let mut best_index = 0;
    let mut best_failures = failure_counts[0];

    for (index, &failures) in failure_counts.iter().enumerate().skip(1) {
        if failures < best_failures {
            best_index = index;
            best_failures = failures;
        }
    }

    Ok(OpenerResult {
        word: candidates[best_index].text().to_string(),
        failures: best_failures,
        candidates_tried: candidates.len(),
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_solver() -> Solver {
        let dictionary = ["crane", "slate", "irate", "trace"]
            .iter()
            .map(|t| Word::new(*t).unwrap())
            .collect();
        Solver::new(dictionary)
    }

    #[test]
    fn sweep_keeps_the_first_of_tied_candidates() {
        let solver = small_solver();
        let result = find_best_opener(&solver, None, false).unwrap();

        // Every opener solves all four targets, so the tie resolves to the
        // first dictionary word
        assert_eq!(result.word, "crane");
        assert_eq!(result.failures, 0);
        assert_eq!(result.candidates_tried, 4);
    }

    #[test]
    fn limit_restricts_the_candidate_set() {
        let solver = small_solver();
        let result = find_best_opener(&solver, Some(2), false).unwrap();

        assert_eq!(result.candidates_tried, 2);
        assert_eq!(result.word, "crane");
    }

    #[test]
    fn empty_dictionary_is_an_error() {
        let solver = Solver::new(Vec::new());
        let result = find_best_opener(&solver, None, false);

        assert!(result.unwrap_err().contains("No candidate opening words"));
    }
}
