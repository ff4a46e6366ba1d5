//! Error types for the TSP genetic algorithm.
//!
//! Every fallible operation in the crate returns [`TspResult`]. The core
//! (distance table, operators, engine) only produces configuration, lookup,
//! tour, state and selection errors; file access is confined to [`crate::map`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for crate operations.
pub type TspResult<T> = Result<T, TspError>;

/// Unified error type for the crate.
#[derive(Debug, Error)]
pub enum TspError {
    /// A configuration parameter or problem size is unusable.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the invalid parameter.
        message: String,
    },

    /// A distance was requested for a pair that has no table entry.
    ///
    /// Raised for out-of-range ids and for diagonal queries (`a == b`).
    #[error("no distance entry for cities {a} and {b}")]
    Lookup {
        /// First city id as passed by the caller.
        a: usize,
        /// Second city id as passed by the caller.
        b: usize,
    },

    /// A tour is not a permutation compatible with the operation.
    #[error("invalid tour: {message}")]
    InvalidTour {
        /// What was wrong with the tour.
        message: String,
    },

    /// An engine operation was called out of order.
    #[error("engine is {actual}, expected {expected}")]
    InvalidState {
        /// State(s) the operation requires.
        expected: &'static str,
        /// State the engine was actually in.
        actual: &'static str,
    },

    /// Selection could not find two tours with a finite length.
    #[error("selection needs two evaluated tours, population has {population}")]
    Selection {
        /// Number of tours in the population at selection time.
        population: usize,
    },

    /// Map text could not be parsed.
    #[error("malformed map: {message}")]
    MapFormat {
        /// Description of the parse failure.
        message: String,
    },

    /// An external file could not be read or written.
    #[error("cannot access '{}': {source}", path.display())]
    Resource {
        /// The file that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

impl TspError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_tour(message: impl Into<String>) -> Self {
        Self::InvalidTour {
            message: message.into(),
        }
    }

    pub(crate) fn map_format(message: impl Into<String>) -> Self {
        Self::MapFormat {
            message: message.into(),
        }
    }
}
