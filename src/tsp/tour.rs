//! Tour representation.

use crate::error::{TspError, TspResult};

/// An ordered visit of every city, with its cached path length.
///
/// `fitness` is the open-path length computed from a
/// [`DistanceTable`](super::DistanceTable). Lower is better. It is stale
/// until recomputed: new tours start at `f64::INFINITY`, and operators
/// that reorder `nodes` reset it to that value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    /// City ids in visiting order.
    pub nodes: Vec<usize>,
    /// Cached open-path length.
    pub fitness: f64,
}

impl Tour {
    /// Creates an unevaluated tour over `nodes`.
    pub fn new(nodes: Vec<usize>) -> Self {
        Self {
            nodes,
            fitness: f64::INFINITY,
        }
    }

    /// The identity ordering `0, 1, ..., n - 1`.
    pub fn identity(n: usize) -> Self {
        Self::new((0..n).collect())
    }

    /// Number of cities visited.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tour visits no city.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Marks the cached fitness as stale.
    pub fn invalidate(&mut self) {
        self.fitness = f64::INFINITY;
    }

    /// Returns `true` if `nodes` is a permutation of `0..n`.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        self.check_permutation(n).is_ok()
    }

    /// Checks that `nodes` is a permutation of `0..n`.
    ///
    /// # Errors
    /// Returns [`TspError::InvalidTour`] naming the first violation found.
    pub fn check_permutation(&self, n: usize) -> TspResult<()> {
        if self.nodes.len() != n {
            return Err(TspError::invalid_tour(format!(
                "expected {n} nodes, found {}",
                self.nodes.len()
            )));
        }
        let mut seen = vec![false; n];
        for &node in &self.nodes {
            match seen.get_mut(node) {
                None => {
                    return Err(TspError::invalid_tour(format!(
                        "city {node} is out of range for {n} cities"
                    )))
                }
                Some(true) => {
                    return Err(TspError::invalid_tour(format!("city {node} appears twice")))
                }
                Some(flag) => *flag = true,
            }
        }
        Ok(())
    }
}
