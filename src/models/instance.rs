//! Problem instance model.
//!
//! An instance is an ordered list of job processing times plus the number
//! of identical parallel machines. It is validated once at construction and
//! immutable afterwards.

use serde::Serialize;

use crate::config::SolverConfig;
use crate::error::Result;
use crate::validation::{validate_instance, validate_table};

/// A parallel-machine makespan instance.
///
/// Jobs are atomic and independent: each goes to exactly one machine, and
/// there is no ordering or precedence between machines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instance {
    processing_times: Vec<f64>,
    num_machines: usize,
}

impl Instance {
    /// Creates a validated instance.
    ///
    /// # Errors
    /// `SolveError::InvalidInput` if any time is negative or non-finite,
    /// or if `num_machines` is zero.
    pub fn new(processing_times: Vec<f64>, num_machines: usize) -> Result<Self> {
        if let Err(errors) = validate_instance(&processing_times, num_machines) {
            tracing::warn!(count = errors.len(), "Instance rejected by validation");
            return Err(errors.into());
        }
        Ok(Self {
            processing_times,
            num_machines,
        })
    }

    /// Creates an instance using the machine count from `config`.
    pub fn with_config(processing_times: Vec<f64>, config: &SolverConfig) -> Result<Self> {
        Self::new(processing_times, config.num_machines)
    }

    /// Derives one job per column, with the column mean as its processing time.
    ///
    /// Rows are observations, columns are jobs.
    pub fn from_column_means(rows: &[Vec<f64>], num_machines: usize) -> Result<Self> {
        if let Err(errors) = validate_table(rows) {
            tracing::warn!(count = errors.len(), "Table rejected by validation");
            return Err(errors.into());
        }
        let width = rows[0].len();
        let n = rows.len() as f64;
        let means = (0..width)
            .map(|col| rows.iter().map(|row| row[col]).sum::<f64>() / n)
            .collect();
        Self::new(means, num_machines)
    }

    /// Processing time of each job, in job order.
    #[inline]
    pub fn processing_times(&self) -> &[f64] {
        &self.processing_times
    }

    /// Number of jobs.
    #[inline]
    pub fn num_jobs(&self) -> usize {
        self.processing_times.len()
    }

    /// Number of machines.
    #[inline]
    pub fn num_machines(&self) -> usize {
        self.num_machines
    }

    /// Sum of all processing times.
    pub fn total_time(&self) -> f64 {
        self.processing_times.iter().sum()
    }

    /// Largest single processing time (0 for an empty instance).
    pub fn max_time(&self) -> f64 {
        self.processing_times.iter().copied().fold(0.0, f64::max)
    }

    /// Sum of processing times of jobs `level..`.
    pub fn remaining_time(&self, level: usize) -> f64 {
        self.processing_times[level..].iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_instance_accessors() {
        let inst = Instance::new(vec![2.0, 4.0, 6.0, 8.0], 3).unwrap();
        assert_eq!(inst.num_jobs(), 4);
        assert_eq!(inst.num_machines(), 3);
        assert!((inst.total_time() - 20.0).abs() < 1e-10);
        assert!((inst.max_time() - 8.0).abs() < 1e-10);
        assert!((inst.remaining_time(2) - 14.0).abs() < 1e-10);
        assert!((inst.remaining_time(4) - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_instance_empty() {
        let inst = Instance::new(vec![], 3).unwrap();
        assert_eq!(inst.num_jobs(), 0);
        assert_eq!(inst.max_time(), 0.0);
        assert_eq!(inst.total_time(), 0.0);
    }

    #[test]
    fn test_instance_rejects_negative() {
        let err = Instance::new(vec![1.0, -1.0], 3).unwrap_err();
        let SolveError::InvalidInput(errors) = err;
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeProcessingTime);
    }

    #[test]
    fn test_instance_rejects_zero_machines() {
        assert!(Instance::new(vec![1.0], 0).is_err());
    }

    #[test]
    fn test_with_config() {
        let config = SolverConfig::new().with_machines(2);
        let inst = Instance::with_config(vec![1.0], &config).unwrap();
        assert_eq!(inst.num_machines(), 2);
    }

    #[test]
    fn test_from_column_means() {
        let rows = vec![vec![1.0, 10.0, 4.0], vec![3.0, 20.0, 4.0]];
        let inst = Instance::from_column_means(&rows, 3).unwrap();
        assert_eq!(inst.processing_times(), &[2.0, 15.0, 4.0]);
    }

    #[test]
    fn test_from_column_means_ragged() {
        let rows = vec![vec![1.0, 10.0], vec![3.0]];
        assert!(Instance::from_column_means(&rows, 3).is_err());
    }
}
