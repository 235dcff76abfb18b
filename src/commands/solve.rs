//! Word solving command
//!
//! Solves a specific target word and reports the guess path, including how
//! far each turn narrowed the viable candidates.

use crate::core::{Evaluation, Word};
use crate::solver::{Constraints, Solver};

/// One turn of a finished solve
#[derive(Debug, Clone)]
pub struct TurnReport {
    pub guess: String,
    pub evaluation: Evaluation,
    pub viable_before: usize,
    pub viable_after: usize,
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub target: String,
    pub turns: Vec<TurnReport>,
}

impl SolveOutcome {
    /// Number of guesses the solve took
    #[inline]
    #[must_use]
    pub fn guess_count(&self) -> usize {
        self.turns.len()
    }
}

/// Solve a specific target word using the given solver
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid 5-letter word
/// - The target is missing from the solver's dictionary
/// - The forced first word is not a valid 5-letter word
/// - The solver exhausts its ranking without finding the target
pub fn run_solve(
    target: &str,
    first_word: Option<&str>,
    solver: &Solver,
) -> Result<SolveOutcome, String> {
    let target_word = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;

    if !solver.contains(&target_word) {
        return Err(format!("Target '{target_word}' is not in the word list"));
    }

    let opener = first_word
        .map(|w| Word::new(w).map_err(|e| format!("Invalid first word: {e}")))
        .transpose()?;

    let report = solver
        .solve(&target_word, opener)
        .map_err(|e| e.to_string())?;

    // Replay the feedback to count how each turn narrowed the field
    let mut constraints = Constraints::new();
    let mut history: Vec<Word> = Vec::new();
    let mut turns = Vec::with_capacity(report.steps.len());

    for step in &report.steps {
        let viable_before = count_viable(solver, &history, &constraints);

        constraints.record(&step.guess, &step.evaluation);
        history.push(step.guess.clone());

        let viable_after = count_viable(solver, &history, &constraints);

        turns.push(TurnReport {
            guess: step.guess.text().to_string(),
            evaluation: step.evaluation,
            viable_before,
            viable_after,
        });
    }

    Ok(SolveOutcome {
        target: report.target.text().to_string(),
        turns,
    })
}

/// Dictionary words not yet guessed that the constraints still permit
fn count_viable(solver: &Solver, history: &[Word], constraints: &Constraints) -> usize {
    solver
        .ranked()
        .iter()
        .filter(|scored| !history.contains(&scored.word) && constraints.permits(&scored.word))
        .count()
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
    fn solve_reports_the_guess_path() {
        let solver = small_solver();
        let outcome = run_solve("crane", None, &solver).unwrap();

        assert_eq!(outcome.target, "crane");
        assert_eq!(outcome.guess_count(), 2);
        assert_eq!(outcome.turns[0].guess, "trace");
        assert_eq!(outcome.turns[0].evaluation.to_codes(), "X**^*");
        assert_eq!(outcome.turns[1].guess, "crane");
        assert!(outcome.turns[1].evaluation.is_solved());
    }

    #[test]
    fn narrowing_counts_track_the_replay() {
        let solver = small_solver();
        let outcome = run_solve("crane", None, &solver).unwrap();

        // TRACE bans T and pins R, A, E, leaving only CRANE; guessing it
        // empties the field
        assert_eq!(outcome.turns[0].viable_before, 4);
        assert_eq!(outcome.turns[0].viable_after, 1);
        assert_eq!(outcome.turns[1].viable_before, 1);
        assert_eq!(outcome.turns[1].viable_after, 0);

        for turn in &outcome.turns {
            assert!(turn.viable_after <= turn.viable_before);
        }
    }

    #[test]
    fn invalid_target_returns_error() {
        let solver = small_solver();
        let result = run_solve("toolong", None, &solver);

        assert!(result.unwrap_err().contains("Invalid target word"));
    }

    #[test]
    fn unknown_target_returns_error() {
        let solver = small_solver();
        let result = run_solve("zzzzz", None, &solver);

        assert!(result.unwrap_err().contains("not in the word list"));
    }

    #[test]
    fn invalid_first_word_returns_error() {
        let solver = small_solver();
        let result = run_solve("crane", Some("abc"), &solver);

        assert!(result.unwrap_err().contains("Invalid first word"));
    }

    #[test]
    fn forced_first_word_leads_the_path() {
        let solver = small_solver();
        let outcome = run_solve("crane", Some("slate"), &solver).unwrap();

        assert_eq!(outcome.turns[0].guess, "slate");
        assert_eq!(outcome.guess_count(), 2);
    }

    #[test]
    fn first_word_outside_the_dictionary_is_allowed() {
        let solver = small_solver();
        let outcome = run_solve("crane", Some("cargo"), &solver).unwrap();

        assert_eq!(outcome.turns[0].guess, "cargo");
        assert_eq!(outcome.target, "crane");
    }
}
