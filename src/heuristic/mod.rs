//! Greedy baseline and partition quality metrics.
//!
//! `GreedyScheduler` places each job on the least-loaded machine. It is not
//! optimal, but gives a fast reference value for the exact search.
//!
//! `LoadKpi` summarizes how evenly a partition spreads load.

mod greedy;
mod kpi;

pub use greedy::{GreedyScheduler, ListOrder};
pub use kpi::LoadKpi;
