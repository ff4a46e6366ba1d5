//! GA evolutionary loop execution.
//!
//! [`GaRunner`] drives a [`GaEngine`] for the configured number of
//! generations and collects the outcome.

use super::config::GaConfig;
use super::engine::GaEngine;
use crate::error::{TspError, TspResult};
use crate::tsp::{City, Tour};
use log::info;
use rand::Rng;

/// Result of a GA optimization run.
#[derive(Debug, Clone, PartialEq)]
pub struct GaResult {
    /// The best tour found during the entire run.
    pub best: Tour,

    /// Best tour length (same as `best.fitness`).
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best length after seeding, then after each generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use tsp_ga::ga::{GaConfig, GaRunner};
/// use tsp_ga::tsp::City;
///
/// let cities: Vec<City> = (0..8).map(|i| City::new(i, (i * 7 % 5) as i32, i as i32)).collect();
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(30)
///     .with_seed(42);
///
/// let result = GaRunner::run(cities, &config).unwrap();
/// assert_eq!(result.generations, 30);
/// assert_eq!(result.fitness_history.len(), 31);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a random source built from `config.seed`.
    ///
    /// # Errors
    /// Propagates configuration errors from engine construction.
    pub fn run(cities: Vec<City>, config: &GaConfig) -> TspResult<GaResult> {
        let engine = GaEngine::new(cities, config.clone())?;
        Self::drive(engine)
    }

    /// Runs the GA drawing randomness from `rng`.
    pub fn run_with_rng<R: Rng>(
        cities: Vec<City>,
        config: &GaConfig,
        rng: R,
    ) -> TspResult<GaResult> {
        let engine = GaEngine::with_rng(cities, config.clone(), rng)?;
        Self::drive(engine)
    }

    fn drive<R: Rng>(mut engine: GaEngine<R>) -> TspResult<GaResult> {
        let max_generations = engine.config().max_generations;

        engine.seed()?;
        let mut fitness_history = Vec::with_capacity(max_generations + 1);
        fitness_history.push(engine.best_fitness());

        for _ in 0..max_generations {
            engine.step()?;
            fitness_history.push(engine.best_fitness());
        }

        let generations = engine.generation();
        let best = engine.into_best().ok_or(TspError::InvalidState {
            expected: "seeded",
            actual: "uninitialized",
        })?;
        info!(
            "finished {} generations, best length {:.3}",
            generations, best.fitness
        );

        Ok(GaResult {
            best_fitness: best.fitness,
            best,
            generations,
            fitness_history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
