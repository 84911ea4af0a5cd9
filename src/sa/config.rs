//! SA configuration and cooling schedule.

use crate::error::{QueensError, Result};

/// Configuration for the Simulated Annealing algorithm.
///
/// Cooling is geometric: `T_{k+1} = cooling_rate * T_k`, applied after
/// every step whether or not the move was accepted.
///
/// # Examples
///
/// ```
/// use u_nqueens::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_max_steps(5000)
///     .with_initial_temperature(50.0)
///     .with_cooling_rate(0.99)
///     .with_return_best(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SaConfig {
    /// Step budget. Each step evaluates exactly one neighbor.
    pub max_steps: usize,

    /// Starting temperature. Higher values accept more worsening moves.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Return the best board seen instead of the board the walk ended on.
    ///
    /// Off by default, so a run that exhausts its budget reports its final
    /// state.
    pub return_best: bool,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            max_steps: 1000,
            initial_temperature: 100.0,
            cooling_rate: 0.95,
            return_best: false,
        }
    }
}

impl SaConfig {
    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_return_best(mut self, return_best: bool) -> Self {
        self.return_best = return_best;
        self
    }

    /// Temperature after `step` cooling steps: `initial * rate^step`.
    pub fn temperature_at(&self, step: usize) -> f64 {
        let exponent = i32::try_from(step).unwrap_or(i32::MAX);
        self.initial_temperature * self.cooling_rate.powi(exponent)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_steps == 0 {
            return Err(QueensError::InvalidConfiguration(
                "max_steps must be at least 1".into(),
            ));
        }
        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return Err(QueensError::InvalidConfiguration(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            )));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(QueensError::InvalidConfiguration(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        Ok(())
    }
}
