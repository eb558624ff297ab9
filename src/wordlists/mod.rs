//! Word list loading
//!
//! The corpus is a runtime input: a newline-delimited text file of
//! five-letter words, loaded once at startup and treated as immutable.

mod corpus;

pub use corpus::{Corpus, CorpusError, corpus_from_slice};
