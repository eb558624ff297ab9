//! The solve loop
//!
//! Drives repeated guess → feedback → re-enumerate → re-rank cycles from a
//! caller-supplied opening until the answer is found or the guess budget
//! runs out, recording a full per-turn trace along the way. The next guess
//! is always the top-ranked remaining candidate; there is no backtracking
//! and no look-ahead.

use super::enumerate::{Candidates, enumerate};
use super::strategy::Strategy;
use crate::core::{Constraints, Feedback, LetterSet, Word, evaluate};
use crate::wordlists::Corpus;

/// Guess budget per run, matching the puzzle's rules
pub const MAX_GUESSES: usize = 6;

/// One recorded turn of a solve run
#[derive(Debug, Clone)]
pub struct Turn {
    /// The word guessed this turn
    pub guess: Word,
    /// Tiles the guess earned
    pub feedback: Feedback,
    /// Constraint snapshot before the guess
    pub before: Constraints,
    /// Constraint snapshot after folding the feedback in
    pub after: Constraints,
    /// Remaining candidates ranked by strategy score, best first
    pub ranked: Vec<(Word, u64)>,
    /// Whether this guess was the answer
    pub solved: bool,
}

/// Complete record of one solve run
#[derive(Debug, Clone)]
pub struct Trace {
    /// The answer being solved for
    pub answer: Word,
    /// Registry name of the strategy that drove the run
    pub strategy: &'static str,
    /// The turns, in order
    pub turns: Vec<Turn>,
    /// Whether the run ended on the answer
    pub solved: bool,
    /// Set when the run ended with zero consistent candidates while the
    /// answer was still unfound, which means the constraint model reached
    /// an answer-inconsistent state. A debugging signal, not an error.
    pub exhausted_erroneously: bool,
}

impl Trace {
    /// Number of guesses recorded
    #[must_use]
    pub fn guesses(&self) -> usize {
        self.turns.len()
    }
}

/// Simulation driver binding a corpus to a strategy
pub struct Solver<'a> {
    corpus: &'a Corpus,
    strategy: &'static Strategy,
}

impl<'a> Solver<'a> {
    /// Create a solver over `corpus` driven by `strategy`
    #[must_use]
    pub const fn new(corpus: &'a Corpus, strategy: &'static Strategy) -> Self {
        Self { corpus, strategy }
    }

    /// The strategy driving this solver
    #[must_use]
    pub const fn strategy(&self) -> &'static Strategy {
        self.strategy
    }

    /// Play out a full run: guess `opening` first, then follow the
    /// top-ranked candidate each turn until solved or six guesses are
    /// spent. Every turn is recorded; the trace is the whole output.
    #[must_use]
    pub fn solve(&self, answer: &Word, opening: &Word) -> Trace {
        let mut constraints = Constraints::new();
        let mut tried = LetterSet::EMPTY;
        let mut turns: Vec<Turn> = Vec::with_capacity(MAX_GUESSES);
        let mut guess = opening.clone();
        let mut solved = false;
        let mut exhausted_erroneously = false;

        while turns.len() < MAX_GUESSES {
            let before = constraints;
            let outcome = evaluate(&guess, answer, constraints);
            constraints = outcome.constraints;
            tried = tried.union(guess.letters());

            let Candidates { counts, words } = enumerate(self.corpus, &constraints);
            let untried = LetterSet::ALPHABET.difference(tried);

            let mut ranked: Vec<(Word, u64)> = words
                .into_iter()
                .map(|word| {
                    let score = self.strategy.score(&counts, untried, &word);
                    (word, score)
                })
                .collect();
            // Descending by score; alphabetical within a score so runs are
            // reproducible.
            ranked.sort_by(|(wa, sa), (wb, sb)| sb.cmp(sa).then_with(|| wa.cmp(wb)));

            solved = outcome.solved;
            turns.push(Turn {
                guess: guess.clone(),
                feedback: outcome.feedback,
                before,
                after: constraints,
                ranked,
                solved,
            });

            if solved {
                break;
            }

            match turns
                .last()
                .and_then(|turn| turn.ranked.first())
                .map(|(word, _)| word.clone())
            {
                Some(next) => guess = next,
                None => {
                    // Nothing left to guess with turns still in the
                    // budget: the model contradicted the answer.
                    exhausted_erroneously = true;
                    break;
                }
            }
        }

        if !solved
            && turns.len() == MAX_GUESSES
            && turns.last().is_some_and(|turn| turn.ranked.is_empty())
        {
            exhausted_erroneously = true;
        }

        Trace {
            answer: answer.clone(),
            strategy: self.strategy.name(),
            turns,
            solved,
            exhausted_erroneously,
        }
    }
}
