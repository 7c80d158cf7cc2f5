//! Evaluation parameters.

use serde::{Deserialize, Serialize};

use crate::models::Resource;

/// Parameters of a [`CvrpEvaluation`](super::CvrpEvaluation).
///
/// `overload_penalty_factor` defaults to `1.0` when omitted.
///
/// # Examples
///
/// ```
/// use cvrp_concat::evaluation::EvaluationConfig;
///
/// let config = EvaluationConfig::new(100.0).with_overload_penalty_factor(2.5);
/// assert_eq!(config.storage_capacity, 100.0);
/// assert_eq!(config.overload_penalty_factor, 2.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Vehicle capacity.
    pub storage_capacity: Resource,
    /// Cost per unit of load above capacity.
    #[serde(default = "default_overload_penalty_factor")]
    pub overload_penalty_factor: f64,
}

fn default_overload_penalty_factor() -> f64 {
    1.0
}

impl EvaluationConfig {
    /// Creates a configuration with the default penalty factor of `1.0`.
    pub fn new(storage_capacity: Resource) -> Self {
        Self {
            storage_capacity,
            overload_penalty_factor: default_overload_penalty_factor(),
        }
    }

    /// Sets the overload penalty factor.
    pub fn with_overload_penalty_factor(mut self, factor: f64) -> Self {
        self.overload_penalty_factor = factor;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_penalty() {
        let c = EvaluationConfig::new(10.0);
        assert_eq!(c.storage_capacity, 10.0);
        assert_eq!(c.overload_penalty_factor, 1.0);
    }

    #[test]
    fn test_config_from_json_without_penalty() {
        let c: EvaluationConfig =
            serde_json::from_str(r#"{"storage_capacity": 160}"#).expect("valid config");
        assert_eq!(c.storage_capacity, 160.0);
        assert_eq!(c.overload_penalty_factor, 1.0);
    }

    #[test]
    fn test_config_from_json_with_penalty() {
        let c: EvaluationConfig = serde_json::from_str(
            r#"{"storage_capacity": 160, "overload_penalty_factor": 4.5}"#,
        )
        .expect("valid config");
        assert_eq!(c.overload_penalty_factor, 4.5);
    }

    #[test]
    fn test_config_missing_capacity() {
        let parsed: Result<EvaluationConfig, _> =
            serde_json::from_str(r#"{"overload_penalty_factor": 2.0}"#);
        assert!(parsed.is_err());
    }
}
