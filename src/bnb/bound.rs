//! Admissible lower bound with per-solve memoization.
//!
//! # Bound
//!
//! For a state with machine loads `L` and `level` jobs decided:
//!
//! ```text
//! lb = max( max(L), sum(p[level..]) / m )      if level < n
//! lb = max(L)                                   otherwise
//! ```
//!
//! Both terms are valid on their own: no machine load ever decreases, and
//! the jobs still to be placed need at least their average share of the
//! machines. The averaging term leaves already-assigned load out, which
//! makes it weaker than `(sum(L) + sum(p[level..])) / m`. Node counts and
//! pruning depend on this exact formula.
//!
//! # Cache
//!
//! Results are keyed on the exact load vector and level. Keys compare bit
//! patterns, so no floating-point tolerance is involved.

use std::collections::HashMap;

use super::node::max_load;
use crate::models::Instance;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct StateKey {
    loads: Vec<u64>,
    level: usize,
}

impl StateKey {
    fn new(loads: &[f64], level: usize) -> Self {
        Self {
            // `+ 0.0` folds -0.0 into +0.0 so equal loads share a key.
            loads: loads.iter().map(|&l| (l + 0.0).to_bits()).collect(),
            level,
        }
    }
}

/// Memoization table for bound values.
///
/// Lives for exactly one solve; never evicts.
#[derive(Debug, Default)]
pub struct BoundCache {
    entries: HashMap<StateKey, f64>,
    hits: u64,
}

impl BoundCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&mut self, key: &StateKey) -> Option<f64> {
        let value = self.entries.get(key).copied();
        if value.is_some() {
            self.hits += 1;
        }
        value
    }

    fn insert(&mut self, key: StateKey, value: f64) {
        self.entries.insert(key, value);
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of distinct states stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Computes memoized lower bounds for partial assignments of one instance.
#[derive(Debug)]
pub struct BoundEstimator<'a> {
    instance: &'a Instance,
    cache: BoundCache,
}

impl<'a> BoundEstimator<'a> {
    /// Creates an estimator with an empty cache.
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            cache: BoundCache::new(),
        }
    }

    /// Lower bound for the state `(loads, level)`, served from the cache when possible.
    pub fn lower_bound(&mut self, loads: &[f64], level: usize) -> f64 {
        let key = StateKey::new(loads, level);
        if let Some(cached) = self.cache.get(&key) {
            tracing::trace!(level, bound = cached, "Bound cache hit");
            return cached;
        }
        let bound = compute_lower_bound(self.instance, loads, level);
        self.cache.insert(key, bound);
        bound
    }

    /// The underlying cache.
    pub fn cache(&self) -> &BoundCache {
        &self.cache
    }
}

/// Uncached bound computation.
pub fn compute_lower_bound(instance: &Instance, loads: &[f64], level: usize) -> f64 {
    let current_max = max_load(loads);
    let average = if level < instance.num_jobs() {
        instance.remaining_time(level) / instance.num_machines() as f64
    } else {
        current_max
    };
    current_max.max(average)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance() -> Instance {
        Instance::new(vec![5.0, 10.0, 15.0], 3).unwrap()
    }

    #[test]
    fn test_root_bound_is_average() {
        let inst = instance();
        // max(0, 30/3) = 10
        assert!((compute_lower_bound(&inst, &[0.0, 0.0, 0.0], 0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_bound_current_max_dominates() {
        let inst = instance();
        // remaining = 15 → 5; current max = 10
        assert!((compute_lower_bound(&inst, &[5.0, 10.0, 0.0], 2) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_bound_ignores_assigned_load_in_average() {
        let inst = instance();
        // (assigned 15 + remaining 15) / 3 would give 10; max(7.5, 15 / 3) gives 7.5.
        let lb = compute_lower_bound(&inst, &[7.5, 7.5, 0.0], 2);
        assert!((lb - 7.5).abs() < 1e-10);
    }

    #[test]
    fn test_bound_at_leaf() {
        let inst = instance();
        assert!((compute_lower_bound(&inst, &[5.0, 10.0, 15.0], 3) - 15.0).abs() < 1e-10);
    }

    #[test]
    fn test_cache_stores_and_hits() {
        let inst = instance();
        let mut est = BoundEstimator::new(&inst);
        assert!(est.cache().is_empty());

        let lb1 = est.lower_bound(&[0.0, 0.0, 0.0], 0);
        assert_eq!(est.cache().len(), 1);
        assert_eq!(est.cache().hits(), 0);

        let lb2 = est.lower_bound(&[0.0, 0.0, 0.0], 0);
        assert_eq!(lb1, lb2);
        assert_eq!(est.cache().len(), 1);
        assert_eq!(est.cache().hits(), 1);
    }

    #[test]
    fn test_cache_key_includes_level() {
        let inst = instance();
        let mut est = BoundEstimator::new(&inst);
        est.lower_bound(&[5.0, 0.0, 0.0], 1);
        est.lower_bound(&[5.0, 0.0, 0.0], 2);
        assert_eq!(est.cache().len(), 2);
        assert_eq!(est.cache().hits(), 0);
    }

    #[test]
    fn test_cache_exact_load_equality() {
        let inst = instance();
        let mut est = BoundEstimator::new(&inst);
        est.lower_bound(&[0.1 + 0.2, 0.0, 0.0], 1);
        est.lower_bound(&[0.3, 0.0, 0.0], 1);
        // 0.1 + 0.2 != 0.3 in binary floating point.
        assert_eq!(est.cache().len(), 2);
    }

    #[test]
    fn test_cache_negative_zero() {
        let inst = instance();
        let mut est = BoundEstimator::new(&inst);
        est.lower_bound(&[0.0, 0.0, 0.0], 0);
        est.lower_bound(&[-0.0, 0.0, 0.0], 0);
        assert_eq!(est.cache().hits(), 1);
    }
}
