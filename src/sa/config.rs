//! Annealing configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration for the simulated annealing loop.
///
/// Defaults reproduce the reference tuning for the distribution dataset:
/// T₀ = 50 000, T_min = 1e-5, geometric cooling at 0.99995 per iteration,
/// and a stall cut-off of 10 000 iterations without a new best.
///
/// # Examples
///
/// ```
/// use vrp_anneal::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(1_000.0)
///     .with_cooling_rate(0.999)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Temperature floor. The loop stops once temperature falls to or
    /// below this value.
    pub min_temperature: f64,

    /// Geometric cooling factor in (0, 1), applied every iteration.
    pub cooling_rate: f64,

    /// Stop after this many consecutive iterations without improving the
    /// best-known cost.
    pub max_stall_iterations: usize,

    /// Random seed. `None` draws one from the OS; a fixed seed makes the
    /// whole run reproducible (moves and acceptance share one stream).
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 50_000.0,
            min_temperature: 1e-5,
            cooling_rate: 0.99995,
            max_stall_iterations: 10_000,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_max_stall_iterations(mut self, n: usize) -> Self {
        self.max_stall_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Rejected: non-positive or non-finite temperatures, a floor at or
    /// above the initial temperature, a cooling rate outside (0, 1), and
    /// a zero stall limit.
    pub fn validate(&self) -> Result<()> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "initial_temperature",
                reason: format!("must be positive, got {}", self.initial_temperature),
            });
        }
        if !self.min_temperature.is_finite() || self.min_temperature <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "min_temperature",
                reason: format!("must be positive, got {}", self.min_temperature),
            });
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(Error::InvalidParameter {
                name: "min_temperature",
                reason: format!(
                    "must be below initial_temperature ({} >= {})",
                    self.min_temperature, self.initial_temperature
                ),
            });
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(Error::InvalidParameter {
                name: "cooling_rate",
                reason: format!("must be in (0, 1), got {}", self.cooling_rate),
            });
        }
        if self.max_stall_iterations == 0 {
            return Err(Error::InvalidParameter {
                name: "max_stall_iterations",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SaConfig::default();
        assert!((config.initial_temperature - 50_000.0).abs() < 1e-10);
        assert!((config.min_temperature - 1e-5).abs() < 1e-15);
        assert!((config.cooling_rate - 0.99995).abs() < 1e-12);
        assert_eq!(config.max_stall_iterations, 10_000);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_initial_temperature() {
        let config = SaConfig::default().with_initial_temperature(-5.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_min_temperature() {
        let config = SaConfig::default().with_min_temperature(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_floor_above_initial() {
        let config = SaConfig::default()
            .with_initial_temperature(1.0)
            .with_min_temperature(2.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_cooling_rate_bounds() {
        assert!(SaConfig::default().with_cooling_rate(0.0).validate().is_err());
        assert!(SaConfig::default().with_cooling_rate(1.0).validate().is_err());
        assert!(SaConfig::default().with_cooling_rate(1.5).validate().is_err());
        assert!(SaConfig::default().with_cooling_rate(0.5).validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_stall_limit() {
        let config = SaConfig::default().with_max_stall_iterations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_parameter_is_configuration_error() {
        let err = SaConfig::default()
            .with_cooling_rate(2.0)
            .validate()
            .expect_err("invalid");
        assert!(err.is_configuration());
    }
}
