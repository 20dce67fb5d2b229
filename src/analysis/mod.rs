//! Evaluation around the exact solver.
//!
//! - [`compare`]: exact vs. greedy makespan on one instance
//! - [`sweep`]: runtime and makespan across random instances of growing size
//! - [`SolveReport`]: printable summary of a solve

mod compare;
mod report;
mod sweep;

pub use compare::{compare, Comparison};
pub use report::SolveReport;
pub use sweep::{random_instance, sweep, SweepConfig, SweepPoint};
