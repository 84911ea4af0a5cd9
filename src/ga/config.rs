//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{QueensError, Result};

/// Default probability of mutating a freshly bred child.
pub const DEFAULT_MUTATION_RATE: f64 = 0.1;

/// Number of top individuals copied unchanged into the next generation.
pub const ELITE_COUNT: usize = 2;

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_nqueens::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.max_generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_nqueens::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_mutation_rate(0.05)
///     .with_worker_threads(4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GaConfig {
    /// Number of boards in every generation. Must be at least 1.
    pub population_size: usize,

    /// Probability of applying reset mutation to a child (0.0–1.0).
    ///
    /// 0.1 by default; 0.05 is a common, more conservative choice.
    pub mutation_rate: f64,

    /// Number of generations evaluated before giving up.
    pub max_generations: usize,

    /// Whether to evaluate the population on a worker pool.
    pub parallel: bool,

    /// Worker pool size. `None` lets rayon decide.
    pub worker_threads: Option<usize>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            mutation_rate: DEFAULT_MUTATION_RATE,
            max_generations: 500,
            parallel: true,
            worker_threads: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mutation rate.
    ///
    /// Not clamped: out-of-range values are reported by [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets a fixed worker pool size.
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = Some(threads);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(QueensError::InvalidConfiguration(
                "population_size must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(QueensError::InvalidConfiguration(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.max_generations == 0 {
            return Err(QueensError::InvalidConfiguration(
                "max_generations must be at least 1".into(),
            ));
        }
        if self.worker_threads == Some(0) {
            return Err(QueensError::InvalidConfiguration(
                "worker_threads must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 50);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert_eq!(config.max_generations, 500);
        assert!(config.parallel);
        assert!(config.worker_threads.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(80)
            .with_mutation_rate(0.05)
            .with_max_generations(1000)
            .with_parallel(false)
            .with_worker_threads(2);

        assert_eq!(config.population_size, 80);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.max_generations, 1000);
        assert!(!config.parallel);
        assert_eq!(config.worker_threads, Some(2));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
        assert!(GaConfig::default().with_population_size(1).validate().is_ok());
        assert!(GaConfig::default().with_mutation_rate(0.0).validate().is_ok());
        assert!(GaConfig::default().with_mutation_rate(1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_zero_population() {
        let config = GaConfig::default().with_population_size(0);
        assert!(matches!(
            config.validate(),
            Err(QueensError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_validate_mutation_rate_range() {
        for rate in [-0.1, 1.5, f64::NAN] {
            let config = GaConfig::default().with_mutation_rate(rate);
            assert!(config.validate().is_err(), "rate {rate} should be rejected");
        }
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_threads() {
        let config = GaConfig::default().with_worker_threads(0);
        assert!(config.validate().is_err());
    }
}
