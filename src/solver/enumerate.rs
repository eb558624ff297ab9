//! Candidate enumeration
//!
//! One pass over the corpus per turn: a word survives iff its letter at
//! every position is still in that position's candidate set and it
//! contains every unresolved present letter. The per-word test is five
//! bitmask membership checks plus one subset check against constraint
//! state compiled once per turn, which is what keeps a turn cheap against
//! a corpus in the low thousands.
//!
//! The cross-product enumerator over per-position candidate letters is
//! kept only as a correctness oracle in the tests below; it is hundreds of
//! times slower on realistic constraint states and must never sit on a
//! non-test path.

use crate::core::{Constraints, LetterCounts, Word};
use crate::wordlists::Corpus;

/// The corpus words still consistent with the constraints, plus letter
/// occurrence counts across them
#[derive(Debug, Clone)]
pub struct Candidates {
    /// Letter occurrence counts over `words` (duplicates counted)
    pub counts: LetterCounts,
    /// Surviving words, in corpus (sorted) order
    pub words: Vec<Word>,
}

impl Candidates {
    /// Number of surviving words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether no candidate survived
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Enumerate the corpus words consistent with `constraints`
#[must_use]
pub fn enumerate(corpus: &Corpus, constraints: &Constraints) -> Candidates {
    let words: Vec<Word> = corpus
        .iter()
        .filter(|word| constraints.allows(word))
        .cloned()
        .collect();
    let counts = LetterCounts::tally(&words);

    Candidates { counts, words }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;
    use crate::wordlists::corpus_from_slice;

    /// Reference implementation: walk the cross product of per-position
    /// candidate letters and keep the combinations that are corpus words
    /// containing every unresolved letter. Mirrors the shape the
    /// constraint model describes, at combinatorial cost.
    fn brute_force(corpus: &Corpus, constraints: &Constraints) -> Candidates {
        let mut words = Vec::new();

        for c0 in constraints.position(0).iter() {
            for c1 in constraints.position(1).iter() {
                for c2 in constraints.position(2).iter() {
                    for c3 in constraints.position(3).iter() {
                        for c4 in constraints.position(4).iter() {
                            let chars = [c0, c1, c2, c3, c4];
                            if !corpus.contains_chars(&chars) {
                                continue;
                            }
                            let word = corpus
                                .iter()
                                .find(|w| w.chars() == &chars)
                                .expect("index and word list agree")
                                .clone();
                            if constraints.present().is_subset_of(word.letters()) {
                                words.push(word);
                            }
                        }
                    }
                }
            }
        }

        words.sort();
        let counts = LetterCounts::tally(&words);
        Candidates { counts, words }
    }

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn unconstrained_enumeration_returns_whole_corpus() {
        let corpus = corpus_from_slice(&["apple", "angle", "ankle", "table"]).unwrap();
        let candidates = enumerate(&corpus, &Constraints::new());

        assert_eq!(candidates.len(), 4);
        assert_eq!(candidates.counts.count(b'a'), 4);
        assert_eq!(candidates.counts.count(b'l'), 4);
        assert_eq!(candidates.counts.count(b'p'), 2); // both in "apple"
    }

    #[test]
    fn enumeration_after_guess_narrows() {
        let corpus = corpus_from_slice(&["apple", "angle", "ankle", "table"]).unwrap();
        let outcome = evaluate(&w("angle"), &w("apple"), Constraints::new());
        let candidates = enumerate(&corpus, &outcome.constraints);

        let texts: Vec<&str> = candidates.words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["apple"]);
    }

    #[test]
    fn unresolved_letters_filter_candidates() {
        let corpus = corpus_from_slice(&["apple", "angle", "ankle", "table"]).unwrap();
        let constraints = Constraints::new().note_present(b'p');
        let candidates = enumerate(&corpus, &constraints);

        let texts: Vec<&str> = candidates.words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["apple"]);
    }

    #[test]
    fn matches_brute_force_oracle() {
        let corpus = corpus_from_slice(&[
            "apple", "angle", "ankle", "table", "maple", "eagle", "bugle", "agile", "amble",
            "ample",
        ])
        .unwrap();

        // A few progressively narrowed states.
        let states = [
            Constraints::new(),
            evaluate(&w("table"), &w("apple"), Constraints::new()).constraints,
            evaluate(&w("eagle"), &w("ample"), Constraints::new()).constraints,
            {
                let first = evaluate(&w("bugle"), &w("ankle"), Constraints::new()).constraints;
                evaluate(&w("table"), &w("ankle"), first).constraints
            },
        ];

        for (i, constraints) in states.iter().enumerate() {
            let fast = enumerate(&corpus, constraints);
            let slow = brute_force(&corpus, constraints);

            assert_eq!(fast.words, slow.words, "word sets diverged for state {i}");
            assert_eq!(fast.counts, slow.counts, "counts diverged for state {i}");
        }
    }

    #[test]
    fn zero_candidates_is_representable() {
        let corpus = corpus_from_slice(&["apple", "angle"]).unwrap();
        let constraints = Constraints::new().note_present(b'z');
        let candidates = enumerate(&corpus, &constraints);

        assert!(candidates.is_empty());
        assert_eq!(candidates.counts.total(), 0);
    }
}
