//! Single-run solve command
//!
//! Simulates solving one answer from one opening and returns the trace.

use crate::core::Word;
use crate::solver::{Solver, Strategy, Trace};
use crate::wordlists::Corpus;

/// Configuration for a single solve run
pub struct SolveConfig {
    pub answer: String,
    pub opening: String,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(answer: String, opening: String) -> Self {
        Self { answer, opening }
    }
}

/// Run one solve simulation
///
/// # Errors
///
/// Returns an error if:
/// - The answer or opening is not a valid five-letter word
/// - The answer or opening is not in the corpus
pub fn solve_word(
    config: &SolveConfig,
    corpus: &Corpus,
    strategy: &'static Strategy,
) -> Result<Trace, String> {
    let answer = Word::new(config.answer.as_str()).map_err(|e| format!("invalid answer: {e}"))?;
    let opening =
        Word::new(config.opening.as_str()).map_err(|e| format!("invalid opening: {e}"))?;

    if !corpus.contains(&answer) {
        return Err(format!("answer '{answer}' is not in the word list"));
    }
    if !corpus.contains(&opening) {
        return Err(format!("opening '{opening}' is not in the word list"));
    }

    Ok(Solver::new(corpus, strategy).solve(&answer, &opening))
}
