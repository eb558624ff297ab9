//! The immutable universe of valid words
//!
//! A `Corpus` is loaded once, deduplicated, sorted, and never mutated.
//! Membership checks go through a hashed index so the brute-force test
//! oracle and interactive lookups stay O(1) per word.

use crate::core::{Word, WordError};
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// An immutable, deduplicated, sorted set of five-letter words
#[derive(Debug, Clone)]
pub struct Corpus {
    words: Vec<Word>,
    index: FxHashSet<[u8; 5]>,
}

/// Error type for corpus loading
#[derive(Debug)]
pub enum CorpusError {
    Io(io::Error),
    InvalidWord { line: usize, source: WordError },
    Empty,
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read word list: {e}"),
            Self::InvalidWord { line, source } => {
                write!(f, "invalid word on line {line}: {source}")
            }
            Self::Empty => write!(f, "word list contains no words"),
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidWord { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

impl From<io::Error> for CorpusError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl Corpus {
    /// Build a corpus from already-validated words, collapsing duplicates
    /// and sorting for reproducible iteration order.
    ///
    /// # Errors
    /// Returns `CorpusError::Empty` if no words remain.
    pub fn from_words(words: impl IntoIterator<Item = Word>) -> Result<Self, CorpusError> {
        let mut words: Vec<Word> = words.into_iter().collect();
        words.sort();
        words.dedup();

        if words.is_empty() {
            return Err(CorpusError::Empty);
        }

        let index = words.iter().map(|w| *w.chars()).collect();
        Ok(Self { words, index })
    }

    /// Parse a newline-delimited word list
    ///
    /// The corpus is expected to be pre-validated; a line that is not a
    /// five-letter word is caller error and is reported, not skipped.
    ///
    /// # Errors
    /// Returns `CorpusError::InvalidWord` naming the offending line, or
    /// `CorpusError::Empty` for a blank input.
    pub fn parse(text: &str) -> Result<Self, CorpusError> {
        let mut words = Vec::new();
        for (i, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            let word = Word::new(trimmed)
                .map_err(|source| CorpusError::InvalidWord { line: i + 1, source })?;
            words.push(word);
        }
        Self::from_words(words)
    }

    /// Load a newline-delimited word list from a file
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read, or any `parse`
    /// error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Check membership by raw letters
    #[inline]
    #[must_use]
    pub fn contains_chars(&self, chars: &[u8; 5]) -> bool {
        self.index.contains(chars)
    }

    /// Check membership of a word
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word.chars())
    }

    /// The words in sorted order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Iterate the words in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the corpus is empty (never true for a constructed
    /// corpus, but clippy insists `len` has a companion)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Build a corpus from string literals, for tests and doc examples
///
/// # Errors
/// Returns the first word validation failure, or `CorpusError::Empty`.
pub fn corpus_from_slice(words: &[&str]) -> Result<Corpus, CorpusError> {
    let words: Result<Vec<Word>, WordError> = words.iter().map(|&s| Word::new(s)).collect();
    let words = words.map_err(|source| CorpusError::InvalidWord { line: 0, source })?;
    Corpus::from_words(words)
}
