//! Guess scoring strategies
//!
//! A strategy is a stateless scoring policy: a plain function that rates a
//! candidate word against the current letter frequencies and the letters
//! not yet tried, higher being better. Strategies live in one static
//! registry table so batch comparison runs can discover every known
//! strategy without any caller hardcoding a count or a switch.

use crate::core::{LetterCounts, LetterSet, Word};

/// Scoring function signature shared by all strategies
///
/// Arguments: letter frequencies over the current candidate set, the
/// letters never yet guessed, and the word to score.
pub type ScoreFn = fn(&LetterCounts, LetterSet, &Word) -> u64;

/// A named, stateless scoring policy
pub struct Strategy {
    name: &'static str,
    summary: &'static str,
    score: ScoreFn,
}

/// Every known strategy, in presentation order
static STRATEGIES: &[Strategy] = &[
    Strategy {
        name: "max-info",
        summary: "favor untried common letters and distinct-letter coverage",
        score: max_info,
    },
    Strategy {
        name: "easy-mode",
        summary: "favor common letters regardless of what was already tried",
        score: easy_mode,
    },
];

impl Strategy {
    /// All registered strategies
    #[must_use]
    pub fn all() -> &'static [Self] {
        STRATEGIES
    }

    /// Look a strategy up by name
    #[must_use]
    pub fn named(name: &str) -> Option<&'static Self> {
        STRATEGIES.iter().find(|s| s.name == name)
    }

    /// The strategy's registry name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// One-line description for listings
    #[must_use]
    pub const fn summary(&self) -> &'static str {
        self.summary
    }

    /// Score `word` given the current candidate letter frequencies and the
    /// set of letters never yet guessed. Higher is better.
    #[must_use]
    pub fn score(&self, counts: &LetterCounts, untried: LetterSet, word: &Word) -> u64 {
        (self.score)(counts, untried, word)
    }
}

impl std::fmt::Debug for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Strategy").field("name", &self.name).finish()
    }
}

/// Maximum-information scoring
///
/// Each letter of the word contributes its candidate-set frequency at its
/// first occurrence only, and only if it was never tried before; repeats
/// and already-tried letters elicit nothing new. The sum is multiplied by
/// the number of distinct letters, pushing toward guesses that probe as
/// many fresh letters as possible rather than toward winning this turn.
fn max_info(counts: &LetterCounts, untried: LetterSet, word: &Word) -> u64 {
    let mut seen = LetterSet::EMPTY;
    let mut sum = 0u64;

    for &c in word.chars() {
        if seen.contains(c) {
            continue;
        }
        seen = seen.with(c);
        if untried.contains(c) {
            sum += u64::from(counts.count(c));
        }
    }

    sum * u64::from(word.letters().len())
}

/// Relaxed scoring that ignores guess history
///
/// Same first-occurrence frequency sum as `max_info`, but every distinct
/// letter counts whether or not it was tried before.
fn easy_mode(counts: &LetterCounts, _untried: LetterSet, word: &Word) -> u64 {
    let mut seen = LetterSet::EMPTY;
    let mut sum = 0u64;

    for &c in word.chars() {
        if seen.contains(c) {
            continue;
        }
        seen = seen.with(c);
        sum += u64::from(counts.count(c));
    }

    sum * u64::from(word.letters().len())
}
