//! Tile scoring and the constraint fold
//!
//! `Feedback::score` implements the standard Wordle rules, including
//! duplicate-letter disambiguation: greens claim their occurrence of a
//! letter first, then yellows are handed out left to right while
//! unclaimed occurrences remain, and any excess shows gray.
//!
//! `evaluate` folds a scored guess into a `Constraints` snapshot, one
//! position at a time, left to right, state flowing forward.

use super::constraints::Constraints;
use super::letters::LetterSet;
use super::word::Word;
use std::fmt;

/// Verdict for one guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Right letter, right position
    Green,
    /// Letter is in the answer, but not here
    Yellow,
    /// No unclaimed occurrence of this letter in the answer
    Gray,
}

/// The five tiles produced by one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback([Tile; 5]);

impl Feedback {
    /// Score `guess` against `answer` using the standard Wordle rules
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> Self {
        let mut tiles = [Tile::Gray; 5];
        let mut remaining = [0u8; 26];

        // Greens first; every non-green answer letter stays claimable.
        // Allow: index needed to compare guess[i] with answer[i].
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            if guess.char_at(i) == answer.char_at(i) {
                tiles[i] = Tile::Green;
            } else {
                remaining[usize::from(answer.char_at(i) - b'a')] += 1;
            }
        }

        // Yellows left to right, while unclaimed occurrences last.
        for (i, tile) in tiles.iter_mut().enumerate() {
            if *tile == Tile::Green {
                continue;
            }
            let slot = &mut remaining[usize::from(guess.char_at(i) - b'a')];
            if *slot > 0 {
                *tile = Tile::Yellow;
                *slot -= 1;
            }
        }

        Self(tiles)
    }

    /// The five tiles, left to right
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; 5] {
        &self.0
    }

    /// Check for a perfect guess (all green)
    #[must_use]
    pub fn is_all_green(&self) -> bool {
        self.0.iter().all(|&t| t == Tile::Green)
    }

    /// Letters that received at least one non-gray tile in this guess,
    /// i.e. letters proven to occur in the answer.
    #[must_use]
    pub fn confirmed_letters(&self, guess: &Word) -> LetterSet {
        self.0
            .iter()
            .zip(guess.chars())
            .filter(|(tile, _)| **tile != Tile::Gray)
            .map(|(_, &c)| c)
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in &self.0 {
            f.write_str(match tile {
                Tile::Green => "G",
                Tile::Yellow => "Y",
                Tile::Gray => "-",
            })?;
        }
        Ok(())
    }
}

/// Result of evaluating one guess
#[derive(Debug, Clone, Copy)]
pub struct Outcome {
    /// Whether the guess was the answer
    pub solved: bool,
    /// The scored tiles
    pub feedback: Feedback,
    /// Constraint state after folding the feedback in
    pub constraints: Constraints,
}

/// Score `guess` against `answer` and fold the feedback into
/// `constraints`, returning the updated snapshot.
///
/// The fold walks positions left to right:
///
/// - Green fixes the position to that letter and resolves it out of the
///   unresolved-present set.
/// - Yellow records the letter as present and rules it out at this
///   position only.
/// - Gray on a letter with no green or yellow tile anywhere in the guess
///   rules it out at every position; gray on an excess duplicate (the
///   letter was confirmed elsewhere in the same guess) rules it out at
///   this position only, since the answer does contain it.
#[must_use]
pub fn evaluate(guess: &Word, answer: &Word, constraints: Constraints) -> Outcome {
    let feedback = Feedback::score(guess, answer);
    let confirmed = feedback.confirmed_letters(guess);

    let mut next = constraints;
    for (i, &tile) in feedback.tiles().iter().enumerate() {
        let letter = guess.char_at(i);
        next = match tile {
            Tile::Green => next.fix(i, letter),
            Tile::Yellow => next.note_present(letter).exclude_at(i, letter),
            Tile::Gray if confirmed.contains(letter) => next.exclude_at(i, letter),
            Tile::Gray => next.exclude_everywhere(letter),
        };
    }

    Outcome {
        solved: guess == answer,
        feedback,
        constraints: next,
    }
}
