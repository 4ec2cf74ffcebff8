//! Command implementations

pub mod solve;

pub use solve::{SolveConfig, SolveReport, solve_ladder};
