//! Load-balance metrics (KPIs) of a partition.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Largest machine load |
//! | Utilization (per machine) | load / makespan |
//! | Avg Utilization | Mean of per-machine utilization |
//! | Imbalance | max load − min load |
//! | Bound Gap | (makespan − lower bound) / lower bound |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use serde::Serialize;

use crate::models::Partition;

/// Partition performance indicators.
#[derive(Debug, Clone, Serialize)]
pub struct LoadKpi {
    /// Largest machine load.
    pub makespan: f64,
    /// Per-machine utilization (0.0..1.0), indexed by machine.
    pub utilization: Vec<f64>,
    /// Average utilization (0.0..1.0).
    pub avg_utilization: f64,
    /// Difference between the most and least loaded machine.
    pub imbalance: f64,
}

impl LoadKpi {
    /// Computes KPIs from a partition.
    ///
    /// With a zero makespan every machine counts as fully utilized.
    pub fn calculate(partition: &Partition) -> Self {
        let makespan = partition.makespan();
        let utilization: Vec<f64> = partition
            .loads
            .iter()
            .map(|&load| if makespan > 0.0 { load / makespan } else { 1.0 })
            .collect();

        let avg_utilization = if utilization.is_empty() {
            0.0
        } else {
            utilization.iter().sum::<f64>() / utilization.len() as f64
        };

        let imbalance = if partition.loads.is_empty() {
            0.0
        } else {
            makespan - partition.min_load()
        };

        Self {
            makespan,
            utilization,
            avg_utilization,
            imbalance,
        }
    }

    /// Relative distance of the makespan above `lower_bound`.
    ///
    /// Returns 0 when `lower_bound` is not positive.
    pub fn bound_gap(&self, lower_bound: f64) -> f64 {
        if lower_bound > 0.0 {
            (self.makespan - lower_bound) / lower_bound
        } else {
            0.0
        }
    }
}
