//! Greedy list scheduler.
//!
//! # Algorithm
//!
//! 1. Order jobs (input order, or longest processing time first).
//! 2. Place each job on the machine with the smallest current load,
//!    lowest machine index on ties.
//!
//! # Complexity
//! O(n * m) plus O(n log n) for LPT ordering.
//!
//! # Reference
//! Graham (1969), "Bounds on Multiprocessing Timing Anomalies"

use serde::{Deserialize, Serialize};

use crate::models::{Instance, Partition};

/// Order in which jobs are offered to the machines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListOrder {
    /// Jobs in input order.
    #[default]
    Input,
    /// Longest processing time first; ties keep input order.
    Lpt,
}

/// Greedy least-loaded-machine scheduler.
///
/// # Example
///
/// ```
/// use u_makespan::heuristic::GreedyScheduler;
/// use u_makespan::models::Instance;
///
/// let instance = Instance::new(vec![2.0, 4.0, 6.0, 8.0], 3).unwrap();
/// let partition = GreedyScheduler::new().schedule(&instance);
/// assert_eq!(partition.makespan(), 10.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyScheduler {
    order: ListOrder,
}

impl GreedyScheduler {
    /// Creates a scheduler using input order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the job order.
    pub fn with_order(mut self, order: ListOrder) -> Self {
        self.order = order;
        self
    }

    /// Assigns every job of `instance`.
    pub fn schedule(&self, instance: &Instance) -> Partition {
        let times = instance.processing_times();
        let mut loads = vec![0.0; instance.num_machines()];
        let mut assignment = vec![0; instance.num_jobs()];

        for job in self.job_order(times) {
            let machine = least_loaded(&loads);
            loads[machine] += times[job];
            assignment[job] = machine;
        }

        Partition { assignment, loads }
    }

    fn job_order(&self, times: &[f64]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..times.len()).collect();
        if self.order == ListOrder::Lpt {
            indices.sort_by(|&a, &b| times[b].total_cmp(&times[a]));
        }
        indices
    }
}

/// Index of the smallest load, first one on ties.
fn least_loaded(loads: &[f64]) -> usize {
    let mut best = 0;
    for (i, &load) in loads.iter().enumerate().skip(1) {
        if load < loads[best] {
            best = i;
        }
    }
    best
}
