//! Accumulated knowledge about the answer
//!
//! `Constraints` tracks, for every board position, which letters are still
//! possible there, plus the letters known to be in the answer whose
//! position is not yet pinned down. Every update is value-in/value-out:
//! the struct is `Copy`, so a solve trace can keep the snapshot from before
//! each guess without any cloning or aliasing concerns.
//!
//! Position sets only ever shrink. A position narrowed to a single letter
//! is a confirmed green match.

use super::letters::LetterSet;
use super::word::Word;

/// Per-position candidate sets plus unresolved present letters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    positions: [LetterSet; 5],
    present: LetterSet,
}

impl Default for Constraints {
    fn default() -> Self {
        Self::new()
    }
}

impl Constraints {
    /// The unconstrained starting state: every position can hold any
    /// letter, nothing is known to be present.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: [LetterSet::ALPHABET; 5],
            present: LetterSet::EMPTY,
        }
    }

    /// Candidate letters still possible at `position` (0-4)
    ///
    /// # Panics
    /// Panics if `position >= 5`
    #[inline]
    #[must_use]
    pub const fn position(&self, position: usize) -> LetterSet {
        self.positions[position]
    }

    /// All five per-position candidate sets
    #[inline]
    #[must_use]
    pub const fn positions(&self) -> &[LetterSet; 5] {
        &self.positions
    }

    /// Letters known to be in the answer, position not yet confirmed
    #[inline]
    #[must_use]
    pub const fn present(&self) -> LetterSet {
        self.present
    }

    /// Confirm `letter` at `position`: the position's candidate set
    /// collapses to that single letter, and the letter no longer counts as
    /// unresolved.
    #[must_use]
    pub fn fix(mut self, position: usize, letter: u8) -> Self {
        debug_assert!(
            self.positions[position].contains(letter),
            "fixing a letter already excluded at this position"
        );
        self.positions[position] = LetterSet::single(letter);
        self.present = self.present.without(letter);
        self
    }

    /// Rule `letter` out at `position` only
    #[must_use]
    pub fn exclude_at(mut self, position: usize, letter: u8) -> Self {
        self.positions[position] = self.positions[position].without(letter);
        self
    }

    /// Rule `letter` out everywhere: it is not in the answer at all
    #[must_use]
    pub fn exclude_everywhere(mut self, letter: u8) -> Self {
        for set in &mut self.positions {
            *set = set.without(letter);
        }
        self.present = self.present.without(letter);
        self
    }

    /// Record that `letter` occurs somewhere in the answer
    #[must_use]
    pub fn note_present(mut self, letter: u8) -> Self {
        self.present = self.present.with(letter);
        self
    }

    /// Check whether `word` is consistent with everything known so far:
    /// each of its letters is still allowed at its position, and it
    /// contains every unresolved present letter.
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        self.positions
            .iter()
            .zip(word.chars())
            .all(|(set, &c)| set.contains(c))
            && self.present.is_subset_of(word.letters())
    }

    /// Positions already confirmed to a single letter
    #[must_use]
    pub fn confirmed(&self) -> [Option<u8>; 5] {
        let mut out = [None; 5];
        for (slot, set) in out.iter_mut().zip(&self.positions) {
            *slot = set.sole_letter();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_unconstrained() {
        let c = Constraints::new();
        for i in 0..5 {
            assert_eq!(c.position(i), LetterSet::ALPHABET);
        }
        assert!(c.present().is_empty());
        assert_eq!(c.confirmed(), [None; 5]);
    }

    #[test]
    fn fix_collapses_position_and_resolves() {
        let c = Constraints::new().note_present(b'a').fix(0, b'a');

        assert_eq!(c.position(0).sole_letter(), Some(b'a'));
        assert!(!c.present().contains(b'a'));
        assert_eq!(c.confirmed()[0], Some(b'a'));
        // Other positions untouched
        assert_eq!(c.position(1), LetterSet::ALPHABET);
    }

    #[test]
    fn exclude_at_is_local() {
        let c = Constraints::new().exclude_at(2, b'n');

        assert!(!c.position(2).contains(b'n'));
        assert!(c.position(0).contains(b'n'));
        assert!(c.position(4).contains(b'n'));
    }

    #[test]
    fn exclude_everywhere_is_global() {
        let c = Constraints::new()
            .note_present(b'g')
            .exclude_everywhere(b'g');

        for i in 0..5 {
            assert!(!c.position(i).contains(b'g'));
        }
        assert!(!c.present().contains(b'g'));
    }

    #[test]
    fn updates_are_pure_snapshots() {
        let before = Constraints::new();
        let after = before.exclude_everywhere(b'q').fix(0, b'a');

        // The earlier snapshot is unaffected by later updates.
        assert_eq!(before, Constraints::new());
        assert!(before.position(0).contains(b'q'));
        assert!(!after.position(1).contains(b'q'));
    }

    #[test]
    fn allows_checks_positions() {
        let word = Word::new("apple").unwrap();
        let c = Constraints::new();
        assert!(c.allows(&word));

        let c = c.exclude_at(1, b'p');
        assert!(!c.allows(&word));
    }

    #[test]
    fn allows_requires_present_letters() {
        let apple = Word::new("apple").unwrap();
        let table = Word::new("table").unwrap();

        let c = Constraints::new().note_present(b'p');
        assert!(c.allows(&apple));
        assert!(!c.allows(&table));
    }

    #[test]
    fn fixed_position_rejects_other_letters() {
        let c = Constraints::new().fix(0, b'a');
        assert!(!c.allows(&Word::new("table").unwrap()));
        assert!(c.allows(&Word::new("apple").unwrap()));
    }
}
