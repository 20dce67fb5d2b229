//! Exact makespan minimization on identical parallel machines.
//!
//! Assigns independent jobs with fixed processing times to a small number
//! of machines so that the largest machine load (the makespan) is minimal.
//! The problem is NP-hard; this crate solves it exactly with best-first
//! branch-and-bound and memoized admissible bounds.
//!
//! # Modules
//!
//! - **`models`**: `Instance` (input) and `Partition` (assignment + loads)
//! - **`bnb`**: the exact search, its bound, frontier and metrics
//! - **`heuristic`**: greedy list-scheduling baseline and load KPIs
//! - **`analysis`**: exact/greedy comparison, size sweep, text report
//! - **`validation`**: input integrity checks
//!
//! # Example
//!
//! ```
//! use u_makespan::{solve, SolverConfig};
//!
//! let solution = solve(&[2.0, 4.0, 6.0, 8.0], &SolverConfig::default()).unwrap();
//! assert_eq!(solution.makespan, 8.0);
//! assert_eq!(solution.partition.assignment.len(), 4);
//! ```
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"

pub mod analysis;
pub mod bnb;
pub mod config;
pub mod error;
pub mod heuristic;
pub mod models;
pub mod validation;

pub use bnb::{solve, BnbSolution, BranchAndBound, SearchMetrics};
pub use config::SolverConfig;
pub use error::{Result, SolveError};
pub use models::{Instance, Partition};
