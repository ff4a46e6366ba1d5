//! Genetic-algorithm approximation of the Traveling Salesman Problem.
//!
//! Evolves a fixed-size population of tours over a set of 2D integer
//! points and keeps the shortest open path found:
//!
//! - **Problem** ([`tsp`]): cities, a pairwise distance cache keyed by
//!   unordered pair, and tours with cached lengths.
//! - **Genetic Algorithm** ([`ga`]): fitness evaluation, two-elite
//!   selection, half-copy order crossover, swap mutation, and the
//!   generation loop.
//! - **Maps** ([`map`]): random city generation, map file loading and
//!   Graphviz export.
//!
//! # Example
//!
//! ```
//! use tsp_ga::ga::{GaConfig, GaRunner};
//! use tsp_ga::map::generate_cities;
//! use tsp_ga::random::create_rng;
//!
//! let cities = generate_cities(12, &mut create_rng(1));
//! let config = GaConfig::default()
//!     .with_population_size(30)
//!     .with_max_generations(50)
//!     .with_seed(42);
//!
//! let result = GaRunner::run(cities, &config).unwrap();
//! assert!(result.best.is_permutation_of(12));
//! ```
//!
//! # Architecture
//!
//! Single-threaded and synchronous. Each run owns its random source,
//! created by [`random::create_rng`] from a fixed seed or from system
//! entropy. File access is confined to [`map`].

pub mod error;
pub mod ga;
pub mod map;
pub mod random;
pub mod tsp;

pub use error::{TspError, TspResult};
