//! Command implementations

pub mod explore;
pub mod solve;

pub use explore::{ExploreConfig, ExploreReport, run_explore};
pub use solve::{SolveConfig, solve_word};
