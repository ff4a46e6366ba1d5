//! Population management.
//!
//! [`GaEngine`] owns the problem (cities and distance table), the random
//! source, the live population and the best tour found so far, and moves
//! them through one generation at a time:
//! evaluate → select → reproduce → mutate → replace → evaluate.

use super::config::GaConfig;
use super::fitness::FitnessEvaluator;
use super::operators::{half_order_crossover, swap_mutation};
use super::selection::select_elite;
use crate::error::{TspError, TspResult};
use crate::random::rng_from_seed;
use crate::tsp::{City, DistanceTable, Tour};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Lifecycle of a [`GaEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Built, no population yet.
    Uninitialized,
    /// Initial population created and evaluated.
    Seeded,
    /// Recomputing fitness and the best tour.
    Evaluating,
    /// Breeding the next generation.
    Reproducing,
    /// A generation step completed.
    Ready,
}

impl EngineState {
    /// Lowercase name, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            EngineState::Uninitialized => "uninitialized",
            EngineState::Seeded => "seeded",
            EngineState::Evaluating => "evaluating",
            EngineState::Reproducing => "reproducing",
            EngineState::Ready => "ready",
        }
    }
}

/// Generation-by-generation GA driver.
///
/// # Usage
///
/// ```
/// use tsp_ga::ga::{EngineState, GaConfig, GaEngine};
/// use tsp_ga::tsp::City;
///
/// let cities = vec![City::new(0, 0, 0), City::new(1, 3, 0), City::new(2, 0, 4)];
/// let config = GaConfig::default().with_population_size(6).with_seed(42);
///
/// let mut engine = GaEngine::new(cities, config).unwrap();
/// engine.seed().unwrap();
/// for _ in 0..10 {
///     engine.step().unwrap();
/// }
/// assert_eq!(engine.state(), EngineState::Ready);
/// assert_eq!(engine.population().len(), 6);
/// assert!(engine.best().unwrap().fitness <= 8.0);
/// ```
#[derive(Debug)]
pub struct GaEngine<R: Rng = StdRng> {
    cities: Vec<City>,
    table: DistanceTable,
    config: GaConfig,
    rng: R,
    population: Vec<Tour>,
    best: Option<Tour>,
    state: EngineState,
    generation: usize,
}

impl GaEngine<StdRng> {
    /// Creates an engine whose random source comes from `config.seed`, or
    /// from system entropy when no seed is set.
    ///
    /// # Errors
    /// See [`GaEngine::with_rng`].
    pub fn new(cities: Vec<City>, config: GaConfig) -> TspResult<Self> {
        let rng = rng_from_seed(config.seed);
        Self::with_rng(cities, config, rng)
    }
}

impl<R: Rng> GaEngine<R> {
    /// Creates an engine drawing randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    ///
    /// # Errors
    /// Returns [`TspError::Config`] if the configuration is invalid, if
    /// the population cannot be allocated, if there are fewer than two
    /// cities, or if city ids are not `0..n` in
    /// order.
    pub fn with_rng(cities: Vec<City>, config: GaConfig, rng: R) -> TspResult<Self> {
        config.validate()?;
        if cities.len() < 2 {
            return Err(TspError::config(format!(
                "at least 2 cities are required, got {}",
                cities.len()
            )));
        }
        let table = DistanceTable::new(&cities)?;
        let mut population = Vec::new();
        population
            .try_reserve_exact(config.population_size)
            .map_err(|_| {
                TspError::config(format!(
                    "population_size {} does not fit in memory",
                    config.population_size
                ))
            })?;

        Ok(Self {
            cities,
            table,
            population,
            config,
            rng,
            best: None,
            state: EngineState::Uninitialized,
            generation: 0,
        })
    }

    /// Builds and evaluates the initial population.
    ///
    /// The population is the identity tour followed by
    /// `population_size - 1` independent shuffles of it. The best tour
    /// starts as a copy of the identity tour; the first [`step`](Self::step)
    /// folds the rest of the population into it.
    ///
    /// # Errors
    /// Returns [`TspError::InvalidState`] unless the engine is
    /// uninitialized.
    pub fn seed(&mut self) -> TspResult<()> {
        self.expect_state(&[EngineState::Uninitialized], "uninitialized")?;

        let evaluator = FitnessEvaluator::new(&self.table);
        let mut seed_tour = Tour::identity(self.cities.len());
        evaluator.refresh(&mut seed_tour)?;

        let population = &mut self.population;
        population.clear();
        population.push(seed_tour.clone());
        for _ in 1..self.config.population_size {
            let mut tour = seed_tour.clone();
            tour.nodes.shuffle(&mut self.rng);
            evaluator.refresh(&mut tour)?;
            population.push(tour);
        }

        info!(
            "seeded {} tours over {} cities ({} distance entries), identity length {:.3}",
            population.len(),
            self.cities.len(),
            self.table.len(),
            seed_tour.fitness
        );

        self.best = Some(seed_tour);
        self.state = EngineState::Seeded;
        Ok(())
    }

    /// Runs one generation.
    ///
    /// 1. Refresh every tour and update the best tour
    /// 2. Select the two fittest tours
    /// 3. Cross the same elite pair over and over, mutating both children,
    ///    until at least `population_size` children exist
    /// 4. Keep the first `population_size` children in creation order
    /// 5. Replace the population and evaluate it again
    ///
    /// On failure the engine returns to the state it was in before the
    /// call, so the caller may retry.
    ///
    /// # Errors
    /// Returns [`TspError::InvalidState`] if the engine was not seeded, and
    /// [`TspError::Selection`] if fewer than two tours could be ranked.
    pub fn step(&mut self) -> TspResult<()> {
        self.expect_state(&[EngineState::Seeded, EngineState::Ready], "seeded or ready")?;

        let previous = self.state;
        if let Err(e) = self.advance() {
            self.state = previous;
            return Err(e);
        }

        self.generation += 1;
        self.state = EngineState::Ready;
        debug!(
            "generation {}: best length {:.3}",
            self.generation,
            self.best_fitness()
        );
        Ok(())
    }

    fn advance(&mut self) -> TspResult<()> {
        self.state = EngineState::Evaluating;
        self.evaluate()?;

        self.state = EngineState::Reproducing;
        let elite = select_elite(&self.population);
        let (first, second) = elite.pair().ok_or(TspError::Selection {
            population: self.population.len(),
        })?;
        debug!(
            "generation {}: elite {} ({:.3}) and {} ({:.3})",
            self.generation + 1,
            first,
            self.population[first].fitness,
            second,
            self.population[second].fitness
        );

        let size = self.config.population_size;
        let mut next_gen = Vec::with_capacity(size.saturating_add(1));
        {
            let parent1 = &self.population[first];
            let parent2 = &self.population[second];
            while next_gen.len() < size {
                let (mut child1, mut child2) = half_order_crossover(parent1, parent2)?;
                swap_mutation(&mut child1, self.config.mutation_chance, &mut self.rng);
                swap_mutation(&mut child2, self.config.mutation_chance, &mut self.rng);
                next_gen.push(child1);
                next_gen.push(child2);
            }
        }
        next_gen.truncate(size);
        self.population = next_gen;

        self.state = EngineState::Evaluating;
        self.evaluate()?;
        Ok(())
    }

    /// Refreshes the population and folds improvements into the best tour.
    fn evaluate(&mut self) -> TspResult<bool> {
        let evaluator = FitnessEvaluator::new(&self.table);
        match self.best.as_mut() {
            Some(best) => evaluator.update_best(&mut self.population, best),
            None => Err(TspError::InvalidState {
                expected: "seeded",
                actual: self.state.name(),
            }),
        }
    }

    fn expect_state(&self, allowed: &[EngineState], expected: &'static str) -> TspResult<()> {
        if allowed.contains(&self.state) {
            Ok(())
        } else {
            Err(TspError::InvalidState {
                expected,
                actual: self.state.name(),
            })
        }
    }

    /// The live population.
    pub fn population(&self) -> &[Tour] {
        &self.population
    }

    /// Best tour found so far, `None` before seeding.
    pub fn best(&self) -> Option<&Tour> {
        self.best.as_ref()
    }

    /// Length of the best tour, `+inf` before seeding.
    pub fn best_fitness(&self) -> f64 {
        self.best.as_ref().map_or(f64::INFINITY, |t| t.fitness)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Number of completed generation steps.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The problem's cities.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// The distance cache.
    pub fn distances(&self) -> &DistanceTable {
        &self.table
    }

    /// The configuration the engine was built with.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Consumes the engine, returning the best tour if it was seeded.
    pub fn into_best(self) -> Option<Tour> {
        self.best
    }
}
