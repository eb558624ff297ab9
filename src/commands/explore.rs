//! Exhaustive exploration command
//!
//! Replays the solve loop for every corpus word as the answer, either from
//! one forced opening or from every corpus word as the opening, and
//! aggregates guess-count statistics per strategy. Runs are independent
//! and state is never shared, so the fan-out is a plain rayon parallel
//! iterator.

use crate::core::Word;
use crate::solver::{MAX_GUESSES, Solver, Strategy, Trace};
use crate::wordlists::Corpus;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Configuration for an exploration run
pub struct ExploreConfig {
    /// Forced opening; `None` iterates every corpus word as the opening
    pub opening: Option<String>,
    /// Cap on the number of answers to test
    pub limit: Option<usize>,
}

/// Aggregate statistics for one strategy's exploration
pub struct ExploreReport {
    pub strategy: &'static str,
    pub runs: usize,
    pub solved: usize,
    pub failed: usize,
    /// Runs that ran out of consistent candidates without solving
    pub erroneous: usize,
    /// Average guesses across solved runs
    pub average_guesses: f64,
    /// Guess count -> solved-run count
    pub distribution: HashMap<usize, usize>,
    /// Answers needing the most guesses (forced-opening mode only)
    pub hardest: Vec<(String, usize)>,
    /// Openings with the lowest average guesses (full-cross mode only)
    pub best_openings: Vec<(String, f64)>,
    pub duration: Duration,
}

/// Running totals merged across parallel workers
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    runs: usize,
    solved: usize,
    erroneous: usize,
    guess_total: usize,
    // Index = guesses taken on a solved run.
    dist: [usize; MAX_GUESSES + 1],
}

impl Tally {
    fn record(&mut self, trace: &Trace) {
        self.runs += 1;
        if trace.solved {
            self.solved += 1;
            self.guess_total += trace.guesses();
            self.dist[trace.guesses()] += 1;
        }
        if trace.exhausted_erroneously {
            self.erroneous += 1;
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.runs += other.runs;
        self.solved += other.solved;
        self.erroneous += other.erroneous;
        self.guess_total += other.guess_total;
        for (slot, n) in self.dist.iter_mut().zip(other.dist) {
            *slot += n;
        }
        self
    }
}

/// Explore every answer with `strategy`
///
/// # Errors
///
/// Returns an error if the forced opening is invalid or not in the corpus.
pub fn run_explore(
    config: &ExploreConfig,
    corpus: &Corpus,
    strategy: &'static Strategy,
) -> Result<ExploreReport, String> {
    let opening = config
        .opening
        .as_deref()
        .map(|text| {
            let word = Word::new(text).map_err(|e| format!("invalid opening: {e}"))?;
            if corpus.contains(&word) {
                Ok(word)
            } else {
                Err(format!("opening '{word}' is not in the word list"))
            }
        })
        .transpose()?;

    let answers: Vec<&Word> = corpus
        .iter()
        .take(config.limit.unwrap_or(corpus.len()))
        .collect();

    let start = Instant::now();
    let report = match opening {
        Some(opening) => explore_forced(corpus, strategy, &answers, &opening),
        None => explore_cross(corpus, strategy, &answers),
    };

    Ok(ExploreReport {
        duration: start.elapsed(),
        ..report
    })
}

/// One run per answer from a fixed opening, parallel over answers
fn explore_forced(
    corpus: &Corpus,
    strategy: &'static Strategy,
    answers: &[&Word],
    opening: &Word,
) -> ExploreReport {
    let solver = Solver::new(corpus, strategy);
    let pb = progress_bar(answers.len() as u64, strategy.name());

    let outcomes: Vec<(String, Trace)> = answers
        .par_iter()
        .map(|answer| {
            let trace = solver.solve(answer, opening);
            pb.inc(1);
            (answer.text().to_string(), trace)
        })
        .collect();
    pb.finish_and_clear();

    let mut tally = Tally::default();
    let mut hardest: Vec<(String, usize)> = Vec::new();
    for (answer, trace) in &outcomes {
        tally.record(trace);
        if trace.solved && trace.guesses() >= MAX_GUESSES - 1 {
            hardest.push((answer.clone(), trace.guesses()));
        }
    }
    hardest.sort_by(|(wa, na), (wb, nb)| nb.cmp(na).then_with(|| wa.cmp(wb)));
    hardest.truncate(10);

    report_from(strategy, tally, hardest, Vec::new())
}

/// The full cross product: every opening against every answer, parallel
/// over openings
fn explore_cross(
    corpus: &Corpus,
    strategy: &'static Strategy,
    answers: &[&Word],
) -> ExploreReport {
    let solver = Solver::new(corpus, strategy);
    let pb = progress_bar(corpus.len() as u64, strategy.name());

    let per_opening: Vec<(String, Tally)> = corpus
        .words()
        .par_iter()
        .map(|opening| {
            let mut tally = Tally::default();
            for answer in answers {
                tally.record(&solver.solve(answer, opening));
            }
            pb.inc(1);
            (opening.text().to_string(), tally)
        })
        .collect();
    pb.finish_and_clear();

    let tally = per_opening
        .iter()
        .map(|(_, t)| *t)
        .fold(Tally::default(), Tally::merge);

    let mut best_openings: Vec<(String, f64)> = per_opening
        .into_iter()
        .filter(|(_, t)| t.solved > 0)
        .map(|(opening, t)| (opening, t.guess_total as f64 / t.solved as f64))
        .collect();
    best_openings.sort_by(|(wa, avg_a), (wb, avg_b)| {
        avg_a
            .partial_cmp(avg_b)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| wa.cmp(wb))
    });
    best_openings.truncate(10);

    report_from(strategy, tally, Vec::new(), best_openings)
}

fn report_from(
    strategy: &'static Strategy,
    tally: Tally,
    hardest: Vec<(String, usize)>,
    best_openings: Vec<(String, f64)>,
) -> ExploreReport {
    let mut distribution = HashMap::new();
    for (guesses, &count) in tally.dist.iter().enumerate() {
        if count > 0 {
            distribution.insert(guesses, count);
        }
    }

    let average_guesses = if tally.solved > 0 {
        tally.guess_total as f64 / tally.solved as f64
    } else {
        0.0
    };

    ExploreReport {
        strategy: strategy.name(),
        runs: tally.runs,
        solved: tally.solved,
        failed: tally.runs - tally.solved,
        erroneous: tally.erroneous,
        average_guesses,
        distribution,
        hardest,
        best_openings,
        duration: Duration::ZERO,
    }
}

fn progress_bar(len: u64, strategy: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );
    pb.set_message(strategy.to_string());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::corpus_from_slice;

    fn strategy() -> &'static Strategy {
        Strategy::named("max-info").unwrap()
    }

    fn small_corpus() -> Corpus {
        corpus_from_slice(&["apple", "angle", "ankle", "table", "maple", "eagle"]).unwrap()
    }

    #[test]
    fn forced_opening_runs_every_answer_once() {
        let corpus = small_corpus();
        let config = ExploreConfig {
            opening: Some("table".into()),
            limit: None,
        };

        let report = run_explore(&config, &corpus, strategy()).unwrap();

        assert_eq!(report.runs, corpus.len());
        assert_eq!(report.solved + report.failed, report.runs);
        let distributed: usize = report.distribution.values().sum();
        assert_eq!(distributed, report.solved);
    }

    #[test]
    fn cross_mode_runs_the_full_product() {
        let corpus = small_corpus();
        let config = ExploreConfig {
            opening: None,
            limit: Some(3),
        };

        let report = run_explore(&config, &corpus, strategy()).unwrap();

        // 3 answers x 6 openings.
        assert_eq!(report.runs, 18);
        assert!(!report.best_openings.is_empty());
        assert!(report.hardest.is_empty());
    }

    #[test]
    fn limit_caps_answers() {
        let corpus = small_corpus();
        let config = ExploreConfig {
            opening: Some("table".into()),
            limit: Some(2),
        };

        let report = run_explore(&config, &corpus, strategy()).unwrap();
        assert_eq!(report.runs, 2);
    }

    #[test]
    fn invalid_opening_is_rejected() {
        let corpus = small_corpus();

        let config = ExploreConfig {
            opening: Some("nope".into()),
            limit: None,
        };
        assert!(run_explore(&config, &corpus, strategy()).is_err());

        let config = ExploreConfig {
            opening: Some("zonal".into()),
            limit: None,
        };
        assert!(run_explore(&config, &corpus, strategy()).is_err());
    }

    #[test]
    fn average_is_bounded_by_distribution() {
        let corpus = small_corpus();
        let config = ExploreConfig {
            opening: Some("eagle".into()),
            limit: None,
        };

        let report = run_explore(&config, &corpus, strategy()).unwrap();
        if report.solved > 0 {
            assert!(report.average_guesses >= 1.0);
            assert!(report.average_guesses <= MAX_GUESSES as f64);
        }
    }

    #[test]
    fn every_registered_strategy_can_explore() {
        let corpus = small_corpus();
        for strategy in Strategy::all() {
            let config = ExploreConfig {
                opening: Some("table".into()),
                limit: Some(2),
            };
            let report = run_explore(&config, &corpus, strategy).unwrap();
            assert_eq!(report.strategy, strategy.name());
            assert_eq!(report.runs, 2);
        }
    }
}
