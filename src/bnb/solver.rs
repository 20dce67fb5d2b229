//! Best-first branch-and-bound solver.
//!
//! # Algorithm
//!
//! 1. Push the root (no jobs decided) with its bound.
//! 2. Pop the node with the smallest bound.
//! 3. Discard it if its bound is not below the incumbent makespan.
//! 4. At a leaf, record the makespan and replace the incumbent if strictly better.
//! 5. Otherwise branch job `level` onto every machine, pushing only children
//!    whose bound is below the incumbent.
//! 6. Stop when the frontier is empty; the incumbent is then optimal.
//!
//! Depth is bounded by the job count and branching by the machine count,
//! and every child is one level deeper than its parent, so the loop ends.
//!
//! # Complexity
//! O(m^n) nodes in the worst case, where n=jobs and m=machines.
//!
//! # Reference
//! Land & Doig (1960), "An Automatic Method of Solving Discrete Programming Problems"

use std::time::{Instant, SystemTime};

use serde::Serialize;

use super::bound::BoundEstimator;
use super::frontier::Frontier;
use super::metrics::SearchMetrics;
use super::node::SearchNode;
use crate::config::SolverConfig;
use crate::error::Result;
use crate::models::{Instance, Partition};

/// Result of an exact solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BnbSolution {
    /// Optimal job-to-machine assignment with its loads.
    pub partition: Partition,
    /// Optimal makespan.
    pub makespan: f64,
    /// Statistics of the search that produced it.
    pub metrics: SearchMetrics,
}

impl BnbSolution {
    /// Splits into `(assignment, makespan, metrics)`.
    pub fn into_parts(self) -> (Vec<usize>, f64, SearchMetrics) {
        (self.partition.assignment, self.makespan, self.metrics)
    }
}

/// Exact makespan solver for one instance.
///
/// All mutable search state is created inside [`solve`](Self::solve), so a
/// solver can be called repeatedly and each call starts from scratch.
///
/// # Example
///
/// ```
/// use u_makespan::bnb::BranchAndBound;
/// use u_makespan::models::Instance;
///
/// let instance = Instance::new(vec![5.0, 10.0, 15.0], 3).unwrap();
/// let solution = BranchAndBound::new(&instance).solve();
/// assert_eq!(solution.makespan, 15.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BranchAndBound<'a> {
    instance: &'a Instance,
}

impl<'a> BranchAndBound<'a> {
    /// Creates a solver for `instance`.
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    /// Runs the search to exhaustion.
    pub fn solve(&self) -> BnbSolution {
        SearchSession::new(self.instance).run()
    }
}

/// Validates `processing_times` and solves with the configured machine count.
pub fn solve(processing_times: &[f64], config: &SolverConfig) -> Result<BnbSolution> {
    let instance = Instance::with_config(processing_times.to_vec(), config)?;
    Ok(BranchAndBound::new(&instance).solve())
}

/// Best complete assignment found so far.
#[derive(Debug)]
struct Incumbent {
    assignment: Option<Vec<usize>>,
    makespan: f64,
}

impl Incumbent {
    fn new() -> Self {
        Self {
            assignment: None,
            makespan: f64::INFINITY,
        }
    }

    /// Installs `assignment` if strictly better. Returns whether it was installed.
    fn offer(&mut self, assignment: &[usize], makespan: f64) -> bool {
        if makespan < self.makespan {
            self.makespan = makespan;
            self.assignment = Some(assignment.to_vec());
            true
        } else {
            false
        }
    }
}

/// State of a single search run. Dropped when the run ends.
struct SearchSession<'a> {
    instance: &'a Instance,
    estimator: BoundEstimator<'a>,
    frontier: Frontier,
    incumbent: Incumbent,
    metrics: SearchMetrics,
    start_time: Instant,
}

impl<'a> SearchSession<'a> {
    fn new(instance: &'a Instance) -> Self {
        let metrics = SearchMetrics {
            started_at: SystemTime::now(),
            ..SearchMetrics::default()
        };
        Self {
            instance,
            estimator: BoundEstimator::new(instance),
            frontier: Frontier::new(),
            incumbent: Incumbent::new(),
            metrics,
            start_time: Instant::now(),
        }
    }

    fn run(mut self) -> BnbSolution {
        let num_machines = self.instance.num_machines();
        let root_loads = vec![0.0; num_machines];
        let root_bound = self.estimator.lower_bound(&root_loads, 0);
        self.metrics.root_bound = root_bound;
        self.metrics.theoretical_lb = self
            .instance
            .max_time()
            .max(self.instance.total_time() / num_machines as f64);
        self.frontier.push(SearchNode::root(num_machines, root_bound));

        while let Some(node) = self.frontier.pop_min() {
            self.metrics.on_node_explored(node.level);

            if node.lower_bound >= self.incumbent.makespan {
                self.metrics.on_node_pruned();
                continue;
            }

            if node.level == self.instance.num_jobs() {
                self.on_leaf(&node);
            } else {
                self.expand(&node);
            }
        }

        self.finish()
    }

    fn on_leaf(&mut self, node: &SearchNode) {
        self.metrics.on_feasible();
        let makespan = node.makespan();
        if self.incumbent.offer(&node.assignment, makespan) {
            self.metrics.on_incumbent(makespan);
            tracing::debug!(
                makespan,
                nodes_explored = self.metrics.nodes_explored,
                frontier = self.frontier.len(),
                "Incumbent improved"
            );
        }
    }

    fn expand(&mut self, node: &SearchNode) {
        let time = self.instance.processing_times()[node.level];
        let next_level = node.level + 1;
        for machine in 0..self.instance.num_machines() {
            let mut loads = node.loads.clone();
            loads[machine] += time;
            let bound = self.estimator.lower_bound(&loads, next_level);
            if bound < self.incumbent.makespan {
                self.frontier.push(node.child(machine, loads, bound));
            }
        }
    }

    fn finish(mut self) -> BnbSolution {
        self.metrics.execution_time = self.start_time.elapsed();
        self.metrics.finished_at = SystemTime::now();
        self.metrics.cache_hits = self.estimator.cache().hits();
        self.metrics.cache_entries = self.estimator.cache().len();
        self.metrics.peak_frontier = self.frontier.peak_len();

        // Validation keeps the total time finite, so every bound is finite,
        // the root is never pruned and a leaf is always reached.
        let assignment = self.incumbent.assignment.unwrap_or_default();
        let partition = Partition::from_assignment(self.instance, assignment);
        let makespan = self.incumbent.makespan;

        tracing::info!(
            makespan,
            nodes_explored = self.metrics.nodes_explored,
            nodes_pruned = self.metrics.nodes_pruned,
            elapsed_ms = self.metrics.execution_time.as_millis() as u64,
            "Branch-and-bound finished"
        );

        BnbSolution {
            partition,
            makespan,
            metrics: self.metrics,
        }
    }
}
