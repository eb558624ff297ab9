//! Display functions for command results

use super::formatters::{board_row, colored_guess, distribution_bar};
use crate::commands::ExploreReport;
use crate::solver::{Strategy, Trace};
use colored::Colorize;

/// Print a solve trace
pub fn print_trace(trace: &Trace, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}  (strategy: {})",
        trace.answer.text().to_uppercase().bright_yellow().bold(),
        trace.strategy
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in trace.turns.iter().enumerate() {
        println!(
            "\nTurn {}: {}   {}",
            i + 1,
            colored_guess(&turn.guess, &turn.feedback),
            board_row(&turn.after).bright_blue()
        );

        if verbose {
            println!("  Candidates remaining: {}", turn.ranked.len());

            let present = turn.after.present();
            if !present.is_empty() {
                println!("  Placed somewhere:     {}", present.to_string().yellow());
            }

            if !turn.solved {
                let top: Vec<String> = turn
                    .ranked
                    .iter()
                    .take(5)
                    .map(|(word, score)| format!("{word} ({score})"))
                    .collect();
                if !top.is_empty() {
                    println!("  Top ranked:           {}", top.join(", "));
                }
            }
        }
    }

    println!();
    if trace.solved {
        println!(
            "{}",
            format!("Solved in {} guesses", trace.guesses())
                .green()
                .bold()
        );
    } else if trace.exhausted_erroneously {
        println!(
            "{}",
            "Exhausted erroneously: no consistent candidates remain"
                .red()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Not solved in {} guesses", trace.guesses())
                .red()
                .bold()
        );
    }
}

/// Print aggregate exploration statistics for one strategy
pub fn print_explore_report(report: &ExploreReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " Strategy: {} ",
        report.strategy.to_uppercase().bright_cyan().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Overall:".bright_cyan().bold());
    println!("  Runs:             {}", report.runs);
    println!(
        "  Solved:           {} {}",
        report.solved,
        format!(
            "({:.1}%)",
            report.solved as f64 / report.runs as f64 * 100.0
        )
        .green()
    );
    if report.failed > 0 {
        println!("  Unsolved:         {}", report.failed.to_string().yellow());
    }
    if report.erroneous > 0 {
        println!(
            "  Exhausted erroneously: {}",
            report.erroneous.to_string().red().bold()
        );
    }
    println!(
        "  Average guesses:  {}",
        format!("{:.3}", report.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Time taken:       {:.2}s",
        report.duration.as_secs_f64()
    );

    println!("\n{}", "Guess distribution:".bright_cyan().bold());
    let max_count = report.distribution.values().copied().max().unwrap_or(1);
    for guesses in 1..=6 {
        let count = report.distribution.get(&guesses).copied().unwrap_or(0);
        if report.solved > 0 {
            let pct = count as f64 / report.solved as f64 * 100.0;
            let bar = distribution_bar(count, max_count, 40);
            println!("  {guesses} guesses: {bar} {count:5} ({pct:5.1}%)");
        }
    }

    if !report.hardest.is_empty() {
        println!("\n{}", "Hardest answers:".yellow().bold());
        for (word, guesses) in report.hardest.iter().take(5) {
            println!("  {} ({} guesses)", word.to_uppercase().yellow(), guesses);
        }
    }

    if !report.best_openings.is_empty() {
        println!("\n{}", "Best openings:".green().bold());
        for (word, average) in report.best_openings.iter().take(5) {
            println!(
                "  {} ({average:.3} avg guesses)",
                word.to_uppercase().bright_green()
            );
        }
    }
}

/// Print the strategy registry
pub fn print_strategies() {
    println!("{}", "Registered strategies:".bright_cyan().bold());
    for strategy in Strategy::all() {
        println!(
            "  {:<12} {}",
            strategy.name().bright_yellow(),
            strategy.summary()
        );
    }
}
