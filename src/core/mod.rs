//! Core domain types for the solving engine
//!
//! This module contains the fundamental domain types with zero external
//! dependencies: validated words, letter sets, constraint snapshots, and
//! tile feedback. Everything here is pure and cheap to copy.

mod constraints;
mod feedback;
mod letters;
mod word;

pub use constraints::Constraints;
pub use feedback::{Feedback, Outcome, Tile, evaluate};
pub use letters::{LetterCounts, LetterSet};
pub use word::{Word, WordError};
