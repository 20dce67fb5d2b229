//! Human-readable solve report.

use std::fmt;

use crate::bnb::BnbSolution;
use crate::heuristic::LoadKpi;

/// Formats an exact solution with its search metrics.
///
/// # Example
///
/// ```
/// use u_makespan::analysis::SolveReport;
/// use u_makespan::bnb::BranchAndBound;
/// use u_makespan::models::Instance;
///
/// let instance = Instance::new(vec![5.0, 10.0, 15.0], 3).unwrap();
/// let solution = BranchAndBound::new(&instance).solve();
/// let text = SolveReport::new(&solution).to_string();
/// assert!(text.contains("Makespan achieved: 15.00"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SolveReport<'a> {
    solution: &'a BnbSolution,
}

impl<'a> SolveReport<'a> {
    pub fn new(solution: &'a BnbSolution) -> Self {
        Self { solution }
    }
}

impl fmt::Display for SolveReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let metrics = &self.solution.metrics;
        let partition = &self.solution.partition;
        let kpi = LoadKpi::calculate(partition);
        let rule = "=".repeat(60);

        writeln!(f, "{rule}")?;
        writeln!(f, "COMPLETE SOLVE REPORT")?;
        writeln!(f, "{rule}")?;

        writeln!(f, "EXECUTION METRICS")?;
        writeln!(f, "  Nodes explored: {}", metrics.nodes_explored)?;
        writeln!(f, "  Nodes pruned: {}", metrics.nodes_pruned)?;
        writeln!(
            f,
            "  Pruning efficiency: {:.2}%",
            metrics.pruning_ratio() * 100.0
        )?;
        writeln!(f, "  Max depth: {}", metrics.max_depth)?;
        writeln!(f, "  Feasible solutions: {}", metrics.feasible_solutions)?;
        writeln!(f, "  Bound cache entries: {}", metrics.cache_entries)?;
        writeln!(
            f,
            "  Execution time: {:.4}s",
            metrics.execution_time.as_secs_f64()
        )?;

        writeln!(f, "SOLUTION ANALYSIS")?;
        for machine in 0..partition.machine_count() {
            let jobs: Vec<String> = partition
                .jobs_on(machine)
                .iter()
                .map(|j| format!("J{}", j + 1))
                .collect();
            writeln!(
                f,
                "  Machine {}: [{}] load {:.2} ({:.1}%)",
                machine + 1,
                jobs.join(", "),
                partition.loads[machine],
                kpi.utilization[machine] * 100.0
            )?;
        }
        writeln!(f, "  Makespan achieved: {:.2}", self.solution.makespan)?;
        writeln!(f, "  Theoretical lower bound: {:.2}", metrics.theoretical_lb)?;
        writeln!(f, "  Load imbalance: {:.2}", kpi.imbalance)?;
        write!(f, "{rule}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bnb::BranchAndBound;
    use crate::models::Instance;

    #[test]
    fn test_report_sections() {
        let inst = Instance::new(vec![2.0, 4.0, 6.0, 8.0], 3).unwrap();
        let sol = BranchAndBound::new(&inst).solve();
        let text = SolveReport::new(&sol).to_string();
        assert!(text.contains("COMPLETE SOLVE REPORT"));
        assert!(text.contains("EXECUTION METRICS"));
        assert!(text.contains("SOLUTION ANALYSIS"));
        assert!(text.contains("Makespan achieved: 8.00"));
        assert!(text.contains("Theoretical lower bound: 8.00"));
        assert!(text.contains("Machine 3:"));
    }

    #[test]
    fn test_report_empty_instance() {
        let inst = Instance::new(vec![], 3).unwrap();
        let sol = BranchAndBound::new(&inst).solve();
        let text = SolveReport::new(&sol).to_string();
        assert!(text.contains("Machine 1: [] load 0.00"));
    }
}
