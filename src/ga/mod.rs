//! Genetic Algorithm for the TSP.
//!
//! An elitist GA over permutation-encoded tours. Every generation breeds
//! only from the two fittest tours, using a deterministic half-copy order
//! crossover followed by threshold-driven swap mutation.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, generations, mutation)
//! - [`FitnessEvaluator`]: Tour length computation and best-tour tracking
//! - [`GaEngine`]: Population manager, one generation per [`GaEngine::step`]
//! - [`GaRunner`]: Runs the engine for a fixed generation budget
//! - [`GaResult`]: Final result with fitness history
//!
//! # Submodules
//!
//! - [`operators`]: Half-copy order crossover and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"

mod config;
mod engine;
mod fitness;
pub mod operators;
mod runner;
mod selection;

pub use config::GaConfig;
pub use engine::{EngineState, GaEngine};
pub use fitness::FitnessEvaluator;
pub use runner::{GaResult, GaRunner};
pub use selection::{select_elite, Elite};
