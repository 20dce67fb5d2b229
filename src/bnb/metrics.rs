//! Search statistics for one completed solve.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | nodes_explored | Nodes popped from the frontier |
//! | nodes_pruned | Popped nodes discarded because `bound >= incumbent` |
//! | pruning_ratio | `nodes_pruned / max(1, nodes_explored)` |
//! | max_depth | Deepest level popped |
//! | feasible_solutions | Complete assignments reached (not pruned) |
//! | execution_time | Wall-clock duration of the search |
//! | best_makespan | Final incumbent makespan |
//! | theoretical_lb | `max(max(p), sum(p) / m)` for the instance |
//!
//! Children rejected at generation time are never pushed and are not counted
//! as pruned.

use std::collections::BTreeMap;
use std::time::{Duration, SystemTime};

use serde::Serialize;

/// Counters and timers describing one search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchMetrics {
    /// Nodes popped from the frontier, pruned ones included.
    pub nodes_explored: u64,
    /// Popped nodes discarded because their bound reached the incumbent.
    pub nodes_pruned: u64,
    /// Deepest level popped.
    pub max_depth: usize,
    /// Complete assignments reached without being pruned.
    pub feasible_solutions: u64,
    /// Final incumbent makespan (`+∞` until the first leaf).
    pub best_makespan: f64,
    /// Bound computed at the root node by the search's own estimator.
    pub root_bound: f64,
    /// Instance-level bound: largest job or average machine load, whichever is larger.
    pub theoretical_lb: f64,
    /// Makespan of each incumbent improvement, in discovery order.
    pub incumbent_trace: Vec<f64>,
    /// Bound lookups answered from the cache.
    pub cache_hits: u64,
    /// Distinct states held in the bound cache at the end of the search.
    pub cache_entries: usize,
    /// Largest frontier size reached.
    pub peak_frontier: usize,
    /// Wall-clock time the search started.
    pub started_at: SystemTime,
    /// Wall-clock time the search finished.
    pub finished_at: SystemTime,
    /// Elapsed search time.
    pub execution_time: Duration,
}

impl Default for SearchMetrics {
    fn default() -> Self {
        Self {
            nodes_explored: 0,
            nodes_pruned: 0,
            max_depth: 0,
            feasible_solutions: 0,
            best_makespan: f64::INFINITY,
            root_bound: 0.0,
            theoretical_lb: 0.0,
            incumbent_trace: Vec::new(),
            cache_hits: 0,
            cache_entries: 0,
            peak_frontier: 0,
            started_at: SystemTime::UNIX_EPOCH,
            finished_at: SystemTime::UNIX_EPOCH,
            execution_time: Duration::ZERO,
        }
    }
}

impl SearchMetrics {
    #[inline]
    pub(crate) fn on_node_explored(&mut self, level: usize) {
        self.nodes_explored += 1;
        self.max_depth = self.max_depth.max(level);
    }

    #[inline]
    pub(crate) fn on_node_pruned(&mut self) {
        self.nodes_pruned += 1;
    }

    #[inline]
    pub(crate) fn on_feasible(&mut self) {
        self.feasible_solutions += 1;
    }

    #[inline]
    pub(crate) fn on_incumbent(&mut self, makespan: f64) {
        self.best_makespan = makespan;
        self.incumbent_trace.push(makespan);
    }

    /// Fraction of explored nodes that were pruned, in `[0, 1]`.
    pub fn pruning_ratio(&self) -> f64 {
        self.nodes_pruned as f64 / self.nodes_explored.max(1) as f64
    }

    /// Named scalar metrics, as handed to a presentation layer.
    ///
    /// `execution_time` is in seconds.
    pub fn named(&self) -> BTreeMap<&'static str, f64> {
        BTreeMap::from([
            ("nodes_explored", self.nodes_explored as f64),
            ("nodes_pruned", self.nodes_pruned as f64),
            ("pruning_ratio", self.pruning_ratio()),
            ("max_depth", self.max_depth as f64),
            ("execution_time", self.execution_time.as_secs_f64()),
            ("feasible_solutions", self.feasible_solutions as f64),
            ("best_makespan", self.best_makespan),
            ("theoretical_lb", self.theoretical_lb),
        ])
    }
}

impl std::fmt::Display for SearchMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Metrics:")?;
        writeln!(f, "  Nodes Explored: {}", self.nodes_explored)?;
        writeln!(f, "  Nodes Pruned: {}", self.nodes_pruned)?;
        writeln!(f, "  Pruning Ratio: {:.2}%", self.pruning_ratio() * 100.0)?;
        writeln!(f, "  Max Depth: {}", self.max_depth)?;
        writeln!(f, "  Feasible Solutions: {}", self.feasible_solutions)?;
        writeln!(f, "  Best Makespan: {:.2}", self.best_makespan)?;
        writeln!(f, "  Theoretical Lower Bound: {:.2}", self.theoretical_lb)?;
        writeln!(
            f,
            "  Execution Time (secs): {:.4}",
            self.execution_time.as_secs_f64()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_zeroed() {
        let m = SearchMetrics::default();
        assert_eq!(m.nodes_explored, 0);
        assert_eq!(m.nodes_pruned, 0);
        assert!(m.best_makespan.is_infinite());
        assert_eq!(m.pruning_ratio(), 0.0);
    }

    #[test]
    fn test_counters() {
        let mut m = SearchMetrics::default();
        m.on_node_explored(0);
        m.on_node_explored(3);
        m.on_node_explored(1);
        m.on_node_pruned();
        m.on_feasible();
        assert_eq!(m.nodes_explored, 3);
        assert_eq!(m.max_depth, 3);
        assert!((m.pruning_ratio() - 1.0 / 3.0).abs() < 1e-10);
        assert_eq!(m.feasible_solutions, 1);
    }

    #[test]
    fn test_incumbent_trace() {
        let mut m = SearchMetrics::default();
        m.on_incumbent(12.0);
        m.on_incumbent(9.0);
        assert_eq!(m.best_makespan, 9.0);
        assert_eq!(m.incumbent_trace, vec![12.0, 9.0]);
    }

    #[test]
    fn test_named_keys() {
        let named = SearchMetrics::default().named();
        for key in [
            "nodes_explored",
            "nodes_pruned",
            "pruning_ratio",
            "max_depth",
            "execution_time",
            "feasible_solutions",
            "best_makespan",
            "theoretical_lb",
        ] {
            assert!(named.contains_key(key), "missing {key}");
        }
    }

    #[test]
    fn test_serialize_json() {
        let mut m = SearchMetrics::default();
        m.on_node_explored(2);
        m.on_incumbent(4.5);
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["nodes_explored"], 1);
        assert_eq!(json["best_makespan"], 4.5);
        assert_eq!(json["max_depth"], 2);
    }

    #[test]
    fn test_display() {
        let text = SearchMetrics::default().to_string();
        assert!(text.contains("Nodes Explored: 0"));
        assert!(text.contains("Pruning Ratio: 0.00%"));
    }
}
