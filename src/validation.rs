//! Input validation for makespan problems.
//!
//! Checks an instance before search starts. Detects:
//! - Negative processing times
//! - Non-finite processing times (NaN, ±∞)
//! - Finite processing times whose total overflows
//! - A machine count of zero
//! - Ragged or empty tables when job times are derived from tabular data
//! - Empty time ranges for randomly generated instances
//!
//! The bound formula assumes every check here has passed, so an instance is
//! rejected up front instead of producing silently wrong bounds.

use serde::{Deserialize, Serialize};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{kind:?}: {message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// A job has a processing time below zero.
    NegativeProcessingTime,
    /// A job has a NaN or infinite processing time.
    NonFiniteProcessingTime,
    /// The machine count is zero.
    NoMachines,
    /// A table row has a different width than the first row, or the table has no columns.
    RaggedTable,
    /// A random processing-time range is empty.
    InvalidTimeRange,
    /// Every time is finite but their sum overflows to infinity.
    TotalTimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates processing times and machine count.
///
/// Checks:
/// 1. `num_machines >= 1`
/// 2. Every processing time is finite
/// 3. Every processing time is non-negative
/// 4. The total processing time is finite
///
/// An empty job list is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_instance(processing_times: &[f64], num_machines: usize) -> ValidationResult {
    let mut errors = Vec::new();

    if num_machines == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoMachines,
            "Machine count must be at least 1",
        ));
    }

    for (job, &time) in processing_times.iter().enumerate() {
        if !time.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonFiniteProcessingTime,
                format!("Job {job} has non-finite processing time {time}"),
            ));
        } else if time < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeProcessingTime,
                format!("Job {job} has negative processing time {time}"),
            ));
        }
    }

    if processing_times.iter().all(|t| t.is_finite()) {
        let total: f64 = processing_times.iter().sum();
        if !total.is_finite() {
            errors.push(ValidationError::new(
                ValidationErrorKind::TotalTimeOverflow,
                format!(
                    "Total processing time of {} jobs overflows",
                    processing_times.len()
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates that a table is rectangular with at least one column.
///
/// A table with no rows is rejected too: its column means are undefined.
pub fn validate_table(rows: &[Vec<f64>]) -> ValidationResult {
    let Some(first) = rows.first() else {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::RaggedTable,
            "Table has no rows",
        )]);
    };

    let width = first.len();
    if width == 0 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::RaggedTable,
            "Table has no columns",
        )]);
    }

    let errors: Vec<ValidationError> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row.len() != width)
        .map(|(i, row)| {
            ValidationError::new(
                ValidationErrorKind::RaggedTable,
                format!("Row {i} has {} columns, expected {width}", row.len()),
            )
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a half-open integer range `[min, max)` for random job times.
pub fn validate_time_range(min: u32, max: u32) -> ValidationResult {
    if min < max {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidTimeRange,
            format!("Time range [{min}, {max}) is empty"),
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_range() {
        assert!(validate_time_range(1, 20).is_ok());
        let errors = validate_time_range(5, 5).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidTimeRange);
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_instance(&[5.0, 10.0, 15.0], 3).is_ok());
    }

    #[test]
    fn test_empty_jobs_valid() {
        assert!(validate_instance(&[], 3).is_ok());
    }

    #[test]
    fn test_zero_time_valid() {
        assert!(validate_instance(&[0.0, 0.0], 1).is_ok());
    }

    #[test]
    fn test_no_machines() {
        let errors = validate_instance(&[1.0], 0).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::NoMachines));
    }

    #[test]
    fn test_negative_time() {
        let errors = validate_instance(&[1.0, -2.0], 3).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeProcessingTime);
        assert!(errors[0].message.contains("Job 1"));
    }

    #[test]
    fn test_non_finite_time() {
        let errors = validate_instance(&[f64::NAN, f64::INFINITY, f64::NEG_INFINITY], 3).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::NonFiniteProcessingTime));
    }

    #[test]
    fn test_total_time_overflow() {
        let errors = validate_instance(&[1e308, 1e308, 1e308], 3).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::TotalTimeOverflow);
        assert!(validate_instance(&[1e308], 3).is_ok());
    }

    #[test]
    fn test_overflow_not_reported_twice_for_infinite_time() {
        let errors = validate_instance(&[f64::INFINITY, 1.0], 3).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NonFiniteProcessingTime);
    }

    #[test]
    fn test_multiple_errors() {
        let errors = validate_instance(&[-1.0, f64::NAN], 0).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_table_rectangular() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        assert!(validate_table(&rows).is_ok());
    }

    #[test]
    fn test_table_ragged() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        let errors = validate_table(&rows).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Row 1"));
    }

    #[test]
    fn test_table_empty() {
        assert!(validate_table(&[]).is_err());
        assert!(validate_table(&[vec![]]).is_err());
    }
}
