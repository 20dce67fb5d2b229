//! Exact branch-and-bound search.
//!
//! Best-first search over partial job-to-machine assignments. Each level of
//! the tree decides one job; each node branches over all machines.
//!
//! # Components
//!
//! - [`BoundEstimator`]: admissible bound with a per-solve memo table
//! - [`Frontier`]: min-heap of pending nodes, FIFO on equal bounds
//! - [`SearchMetrics`]: counters and timers of one run
//! - [`BranchAndBound`]: the search loop and incumbent
//!
//! # References
//!
//! - Land & Doig (1960), "An Automatic Method of Solving Discrete Programming Problems"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5 (Parallel Machines)

mod bound;
mod frontier;
mod metrics;
mod node;
mod solver;

pub use bound::{compute_lower_bound, BoundCache, BoundEstimator};
pub use frontier::Frontier;
pub use metrics::SearchMetrics;
pub use node::SearchNode;
pub use solver::{solve, BnbSolution, BranchAndBound};
