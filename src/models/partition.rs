//! Partition (solution) model.
//!
//! A partition assigns every job of an instance to exactly one machine.
//! Per-machine loads and the makespan are derived from the assignment.

use serde::{Deserialize, Serialize};

use super::Instance;

/// A complete job-to-machine assignment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Partition {
    /// Machine index for each job, in job order.
    pub assignment: Vec<usize>,
    /// Total processing time on each machine.
    pub loads: Vec<f64>,
}

impl Partition {
    /// Builds a partition from an assignment vector.
    ///
    /// Machine indices must be `< instance.num_machines()` and the vector must
    /// have one entry per job.
    pub fn from_assignment(instance: &Instance, assignment: Vec<usize>) -> Self {
        debug_assert_eq!(assignment.len(), instance.num_jobs());
        let mut loads = vec![0.0; instance.num_machines()];
        for (&machine, &time) in assignment.iter().zip(instance.processing_times()) {
            loads[machine] += time;
        }
        Self { assignment, loads }
    }

    /// Makespan: the largest machine load (0 when there are no jobs).
    pub fn makespan(&self) -> f64 {
        self.loads.iter().copied().fold(0.0, f64::max)
    }

    /// Smallest machine load.
    pub fn min_load(&self) -> f64 {
        self.loads.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Job indices assigned to `machine`, ascending.
    pub fn jobs_on(&self, machine: usize) -> Vec<usize> {
        self.assignment
            .iter()
            .enumerate()
            .filter(|&(_, &m)| m == machine)
            .map(|(job, _)| job)
            .collect()
    }

    /// Number of machines.
    pub fn machine_count(&self) -> usize {
        self.loads.len()
    }

    /// Number of assigned jobs.
    pub fn job_count(&self) -> usize {
        self.assignment.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Partition {
        let inst = Instance::new(vec![2.0, 4.0, 6.0, 8.0], 3).unwrap();
        Partition::from_assignment(&inst, vec![0, 1, 1, 0])
    }

    #[test]
    fn test_partition_loads() {
        let p = sample();
        assert_eq!(p.loads, vec![10.0, 10.0, 0.0]);
        assert!((p.makespan() - 10.0).abs() < 1e-10);
        assert!((p.min_load() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_jobs_on() {
        let p = sample();
        assert_eq!(p.jobs_on(0), vec![0, 3]);
        assert_eq!(p.jobs_on(1), vec![1, 2]);
        assert!(p.jobs_on(2).is_empty());
    }

    #[test]
    fn test_empty_partition() {
        let inst = Instance::new(vec![], 3).unwrap();
        let p = Partition::from_assignment(&inst, vec![]);
        assert_eq!(p.makespan(), 0.0);
        assert_eq!(p.job_count(), 0);
        assert_eq!(p.machine_count(), 3);
    }
}
