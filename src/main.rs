//! Wordle Frequency Solver - CLI
//!
//! Solves Wordle puzzles by ranking guesses on letter frequency and
//! narrowing the field with occurrence-bound constraints.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_freq::{
    commands::{find_best_opener, run_evaluation, run_solve},
    core::Word,
    output::{FeedbackStyle, print_evaluation_summary, print_opener_result, print_solve_outcome},
    solver::Solver,
    wordlists,
};

#[derive(Parser)]
#[command(
    name = "wordle_freq",
    about = "Wordle solver ranking guesses by positional and inclusion letter frequency",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a custom word list (default: embedded 2,261-word dictionary)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Render feedback as colored square emoji instead of codes
    #[arg(long, global = true)]
    emoji: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one target word
    Solve {
        /// The answer the solver must reach
        word: String,

        /// Show how each guess narrows the viable candidates
        #[arg(short, long)]
        verbose: bool,

        /// Force the opening guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },

    /// Run the solver against every dictionary word
    Evaluate {
        /// Force the opening guess for every session
        #[arg(short = 'f', long)]
        first_word: Option<String>,

        /// Limit the number of target words
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Sweep for the opening word with the fewest failures
    BestOpener {
        /// Limit the number of candidate openers
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: Option<&str>) -> Result<Vec<Word>> {
    match wordlist {
        Some(path) => Ok(wordlists::load_from_file(path)?),
        None => Ok(wordlists::default_words()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.wordlist.as_deref())?;
    let solver = Solver::new(dictionary);

    let style = if cli.emoji {
        FeedbackStyle::Emoji
    } else {
        FeedbackStyle::Codes
    };

    match cli.command {
        Commands::Solve {
            word,
            verbose,
            first_word,
        } => {
            let outcome =
                run_solve(&word, first_word.as_deref(), &solver).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_outcome(&outcome, verbose, style);
        }
        Commands::Evaluate { first_word, limit } => {
            let opener = first_word
                .as_deref()
                .map(|w| Word::new(w).map_err(|e| anyhow::anyhow!("Invalid first word: {e}")))
                .transpose()?;

            let summary = run_evaluation(&solver, limit, opener.as_ref(), true)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_evaluation_summary(&summary);
        }
        Commands::BestOpener { limit } => {
            let result = find_best_opener(&solver, limit, true).map_err(|e| anyhow::anyhow!(e))?;
            print_opener_result(&result);
        }
    }

    Ok(())
}
