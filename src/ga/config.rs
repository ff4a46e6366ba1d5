//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{TspError, TspResult};

/// Configuration for the TSP genetic algorithm.
///
/// # Defaults
///
/// ```
/// use tsp_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 100);
/// assert!((config.mutation_chance - 0.2).abs() < 1e-12);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_max_generations(250)
///     .with_mutation_chance(0.35)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of tours in the population. Kept constant for the whole run.
    ///
    /// Must be at least 2: every generation breeds from the two best tours.
    pub population_size: usize,

    /// Number of generation steps [`GaRunner`](super::GaRunner) executes.
    ///
    /// There is no other stopping criterion. Zero is allowed and returns
    /// the seeded population's best tour.
    pub max_generations: usize,

    /// Swap threshold for mutation (0.0–1.0).
    ///
    /// For every position of a child, a uniform draw in `[0, 1)` that is
    /// GREATER than this value triggers one random swap. A higher value
    /// therefore means fewer swaps: `1.0` disables mutation, `0.0` attempts
    /// a swap at every position.
    pub mutation_chance: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a seed drawn from system entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 100,
            mutation_chance: 0.2,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the mutation threshold, clamped to `[0, 1]`.
    pub fn with_mutation_chance(mut self, chance: f64) -> Self {
        self.mutation_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`TspError::Config`] describing the first invalid parameter.
    pub fn validate(&self) -> TspResult<()> {
        if self.population_size < 2 {
            return Err(TspError::config("population_size must be at least 2"));
        }
        if !(0.0..=1.0).contains(&self.mutation_chance) {
            return Err(TspError::config(format!(
                "mutation_chance must be within [0, 1], got {}",
                self.mutation_chance
            )));
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
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations, 100);
        assert!((config.mutation_chance - 0.2).abs() < 1e-10);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(12)
            .with_max_generations(30)
            .with_mutation_chance(0.5)
            .with_seed(42);

        assert_eq!(config.population_size, 12);
        assert_eq!(config.max_generations, 30);
        assert!((config.mutation_chance - 0.5).abs() < 1e-10);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
        assert!(GaConfig::default().with_max_generations(0).validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        for n in [0, 1] {
            let config = GaConfig::default().with_population_size(n);
            assert!(matches!(config.validate(), Err(TspError::Config { .. })));
        }
    }

    #[test]
    fn test_clamp_mutation_chance() {
        let high = GaConfig::default().with_mutation_chance(1.5);
        let low = GaConfig::default().with_mutation_chance(-0.5);
        assert!((high.mutation_chance - 1.0).abs() < 1e-10);
        assert!((low.mutation_chance - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_rejects_unclamped_chance() {
        let config = GaConfig {
            mutation_chance: f64::NAN,
            ..GaConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GaConfig {
            mutation_chance: 2.0,
            ..GaConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
