//! Crate error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised before a solve starts.
///
/// The search loop itself is total and has no failure mode.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    /// Processing times or machine count violate the solver's preconditions.
    #[error("Invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, SolveError>;

impl From<Vec<ValidationError>> for SolveError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SolveError::InvalidInput(errors)
    }
}
