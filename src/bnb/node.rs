//! Search tree nodes.

/// A partial assignment of the first `level` jobs.
///
/// Invariant: `loads.iter().sum() == processing_times[..level].iter().sum()`
/// and `assignment.len() == level`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode {
    /// Number of jobs already decided.
    pub level: usize,
    /// Current load on each machine.
    pub loads: Vec<f64>,
    /// Machine index of each decided job.
    pub assignment: Vec<usize>,
    /// Admissible lower bound on the makespan of any completion.
    pub lower_bound: f64,
}

impl SearchNode {
    /// The root: nothing decided, all machines empty.
    pub fn root(num_machines: usize, lower_bound: f64) -> Self {
        Self {
            level: 0,
            loads: vec![0.0; num_machines],
            assignment: Vec::new(),
            lower_bound,
        }
    }

    /// The child that places job `self.level` on `machine`.
    ///
    /// `loads` must already include that job's time on `machine`.
    pub fn child(&self, machine: usize, loads: Vec<f64>, lower_bound: f64) -> Self {
        let mut assignment = Vec::with_capacity(self.level + 1);
        assignment.extend_from_slice(&self.assignment);
        assignment.push(machine);
        Self {
            level: self.level + 1,
            loads,
            assignment,
            lower_bound,
        }
    }

    /// Largest machine load.
    #[inline]
    pub fn makespan(&self) -> f64 {
        max_load(&self.loads)
    }
}

/// Largest value of a non-negative load vector (0 when empty).
#[inline]
pub(crate) fn max_load(loads: &[f64]) -> f64 {
    loads.iter().copied().fold(0.0, f64::max)
}
