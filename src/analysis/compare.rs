//! Exact search vs. greedy baseline on one instance.

use serde::Serialize;

use crate::bnb::{BnbSolution, BranchAndBound};
use crate::heuristic::{GreedyScheduler, LoadKpi};
use crate::models::{Instance, Partition};

/// Side-by-side result of both solvers.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    /// Optimal solution from the exact search.
    pub exact: BnbSolution,
    pub greedy: Partition,
    pub exact_kpi: LoadKpi,
    pub greedy_kpi: LoadKpi,
}

impl Comparison {
    /// Greedy makespan relative to the optimum: `(greedy - exact) / exact`.
    ///
    /// Returns 0 when the optimum is 0.
    pub fn greedy_gap(&self) -> f64 {
        self.greedy_kpi.bound_gap(self.exact.makespan)
    }
}

/// Solves `instance` exactly and with `greedy`.
pub fn compare(instance: &Instance, greedy: &GreedyScheduler) -> Comparison {
    let exact = BranchAndBound::new(instance).solve();
    let greedy = greedy.schedule(instance);
    let exact_kpi = LoadKpi::calculate(&exact.partition);
    let greedy_kpi = LoadKpi::calculate(&greedy);
    Comparison {
        exact,
        greedy,
        exact_kpi,
        greedy_kpi,
    }
}
