//! Candidate enumeration, scoring strategies, and the solve loop

mod engine;
mod enumerate;
pub mod strategy;

pub use engine::{MAX_GUESSES, Solver, Trace, Turn};
pub use enumerate::{Candidates, enumerate};
pub use strategy::{ScoreFn, Strategy};
