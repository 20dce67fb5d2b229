//! Sensitivity sweep over instance sizes.
//!
//! For each size, draws a random instance with integer job times, then
//! times the exact search and the greedy baseline on it. Sizes are solved
//! independently; a fixed seed reproduces the same instances.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::bnb::BranchAndBound;
use crate::config::DEFAULT_MACHINES;
use crate::error::Result;
use crate::heuristic::GreedyScheduler;
use crate::models::Instance;
use crate::validation::validate_time_range;

/// Sweep parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Job counts to solve.
    pub sizes: Vec<usize>,
    /// Smallest job time (inclusive).
    pub min_time: u32,
    /// Largest job time (exclusive).
    pub max_time: u32,
    /// RNG seed.
    pub seed: u64,
    /// Machine count for every instance.
    pub num_machines: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sizes: vec![5, 10, 15, 20, 25],
            min_time: 1,
            max_time: 20,
            seed: 0,
            num_machines: DEFAULT_MACHINES,
        }
    }
}

impl SweepConfig {
    /// Sets the job counts.
    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = sizes;
        self
    }

    /// Sets the job time range `[min_time, max_time)`.
    pub fn with_time_range(mut self, min_time: u32, max_time: u32) -> Self {
        self.min_time = min_time;
        self.max_time = max_time;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the machine count.
    pub fn with_machines(mut self, num_machines: usize) -> Self {
        self.num_machines = num_machines;
        self
    }
}

/// Measurements for one instance size.
#[derive(Debug, Clone, Serialize)]
pub struct SweepPoint {
    /// Job count of the instance.
    pub num_jobs: usize,
    /// Optimal makespan.
    pub exact_makespan: f64,
    /// Greedy list-scheduling makespan.
    pub greedy_makespan: f64,
    /// Time spent in the exact search.
    pub exact_time: Duration,
    pub greedy_time: Duration,
    pub nodes_explored: u64,
    pub nodes_pruned: u64,
}

/// Draws a random instance of `num_jobs` jobs.
pub fn random_instance(
    rng: &mut impl Rng,
    num_jobs: usize,
    config: &SweepConfig,
) -> Result<Instance> {
    validate_time_range(config.min_time, config.max_time)?;
    let times = (0..num_jobs)
        .map(|_| rng.random_range(config.min_time..config.max_time) as f64)
        .collect();
    Instance::new(times, config.num_machines)
}

/// Runs the sweep.
///
/// # Errors
/// `SolveError::InvalidInput` for an empty time range or zero machines.
pub fn sweep(config: &SweepConfig) -> Result<Vec<SweepPoint>> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let greedy = GreedyScheduler::new();
    let mut points = Vec::with_capacity(config.sizes.len());

    for &num_jobs in &config.sizes {
        let instance = random_instance(&mut rng, num_jobs, config)?;

        let start = Instant::now();
        let exact = BranchAndBound::new(&instance).solve();
        let exact_time = start.elapsed();

        let start = Instant::now();
        let heuristic = greedy.schedule(&instance);
        let greedy_time = start.elapsed();

        tracing::debug!(
            num_jobs,
            exact_makespan = exact.makespan,
            greedy_makespan = heuristic.makespan(),
            exact_ms = exact_time.as_millis() as u64,
            "Sweep point solved"
        );

        points.push(SweepPoint {
            num_jobs,
            exact_makespan: exact.makespan,
            greedy_makespan: heuristic.makespan(),
            exact_time,
            greedy_time,
            nodes_explored: exact.metrics.nodes_explored,
            nodes_pruned: exact.metrics.nodes_pruned,
        });
    }

    Ok(points)
}
