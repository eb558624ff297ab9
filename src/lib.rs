//! Wordle Lab
//!
//! A simulation harness for Wordle solving strategies: given a known
//! answer and a starting guess, it plays out the constraint-tracking
//! solve loop with perfect feedback and records a full per-turn trace,
//! so strategies and opening words can be compared across the whole
//! corpus.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_lab::core::Word;
//! use wordle_lab::solver::{Solver, Strategy};
//! use wordle_lab::wordlists::corpus_from_slice;
//!
//! let corpus = corpus_from_slice(&["apple", "angle", "ankle", "table"]).unwrap();
//! let strategy = Strategy::named("max-info").unwrap();
//!
//! let answer = Word::new("apple").unwrap();
//! let opening = Word::new("angle").unwrap();
//!
//! let trace = Solver::new(&corpus, strategy).solve(&answer, &opening);
//! assert!(trace.solved);
//! assert_eq!(trace.guesses(), 2);
//! ```

// Core domain types
pub mod core;

// Enumeration, strategies, and the solve loop
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
