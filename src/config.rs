//! Solver configuration.

use serde::{Deserialize, Serialize};

/// Default number of parallel machines.
pub const DEFAULT_MACHINES: usize = 3;

/// Configuration for a single solve.
///
/// # Example
/// ```
/// use u_makespan::SolverConfig;
///
/// let config = SolverConfig::default().with_machines(4);
/// assert_eq!(config.num_machines, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Number of identical parallel machines.
    pub num_machines: usize,
}

impl SolverConfig {
    /// Creates a configuration with the default machine count.
    pub fn new() -> Self {
        Self {
            num_machines: DEFAULT_MACHINES,
        }
    }

    /// Sets the machine count.
    pub fn with_machines(mut self, num_machines: usize) -> Self {
        self.num_machines = num_machines;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_three_machines() {
        assert_eq!(SolverConfig::default().num_machines, 3);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = SolverConfig::new().with_machines(5);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"num_machines":5}"#);
        let back: SolverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
