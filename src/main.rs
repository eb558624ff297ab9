//! Wordle Lab - CLI
//!
//! Simulates Wordle solve runs against a known answer and aggregates
//! strategy performance across the whole corpus.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_lab::{
    commands::{ExploreConfig, SolveConfig, run_explore, solve_word},
    output::{print_explore_report, print_strategies, print_trace},
    solver::Strategy,
    wordlists::Corpus,
};

#[derive(Parser)]
#[command(
    name = "wordle-lab",
    about = "Simulate Wordle solving strategies and compare them across a corpus",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Newline-delimited list of five-letter words
    #[arg(short, long, global = true, default_value = "data/words.txt")]
    wordlist: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate solving one answer from a given opening
    Solve {
        /// The answer to solve for
        answer: String,

        /// The first guess to play
        opening: String,

        /// Strategy name (see `strategies`)
        #[arg(short, long, default_value = "max-info")]
        strategy: String,

        /// Show candidate counts and rankings per turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Run the solver across every corpus answer and aggregate statistics
    Explore {
        /// Force this opening for every run (default: try every opening)
        #[arg(short, long)]
        opening: Option<String>,

        /// Strategy name (default: run every registered strategy)
        #[arg(short, long)]
        strategy: Option<String>,

        /// Limit the number of answers tested
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List the registered strategies
    Strategies,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if matches!(&cli.command, Commands::Strategies) {
        print_strategies();
        return Ok(());
    }

    let corpus = Corpus::load(&cli.wordlist)
        .with_context(|| format!("loading word list from {}", cli.wordlist.display()))?;

    match cli.command {
        Commands::Solve {
            answer,
            opening,
            strategy,
            verbose,
        } => {
            let strategy = named_strategy(&strategy)?;
            let config = SolveConfig::new(answer, opening);
            let trace = solve_word(&config, &corpus, strategy).map_err(|e| anyhow::anyhow!(e))?;
            print_trace(&trace, verbose);
        }
        Commands::Explore {
            opening,
            strategy,
            limit,
        } => {
            let strategies: Vec<&'static Strategy> = match strategy.as_deref() {
                Some(name) => vec![named_strategy(name)?],
                None => Strategy::all().iter().collect(),
            };

            let config = ExploreConfig { opening, limit };
            for strategy in strategies {
                let report =
                    run_explore(&config, &corpus, strategy).map_err(|e| anyhow::anyhow!(e))?;
                print_explore_report(&report);
            }
        }
        Commands::Strategies => unreachable!("handled before corpus loading"),
    }

    Ok(())
}

fn named_strategy(name: &str) -> Result<&'static Strategy> {
    match Strategy::named(name) {
        Some(strategy) => Ok(strategy),
        None => {
            let known: Vec<&str> = Strategy::all().iter().map(Strategy::name).collect();
            bail!("unknown strategy '{name}' (known: {})", known.join(", "))
        }
    }
}
