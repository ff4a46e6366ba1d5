//! Fitness evaluation and best-tour tracking.

use crate::error::TspResult;
use crate::tsp::{DistanceTable, Tour};

/// Scores tours against a [`DistanceTable`].
///
/// Fitness is the open-path length: the sum of distances between
/// consecutive nodes, without an edge from the last city back to the first.
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator<'a> {
    table: &'a DistanceTable,
}

impl<'a> FitnessEvaluator<'a> {
    /// Creates an evaluator reading from `table`.
    pub fn new(table: &'a DistanceTable) -> Self {
        Self { table }
    }

    /// Computes the length of `tour` without storing it.
    pub fn evaluate(&self, tour: &Tour) -> TspResult<f64> {
        self.table.path_length(&tour.nodes)
    }

    /// Recomputes the length of `tour` and stores it in `tour.fitness`.
    pub fn refresh(&self, tour: &mut Tour) -> TspResult<f64> {
        let fitness = self.evaluate(tour)?;
        tour.fitness = fitness;
        Ok(fitness)
    }

    /// Refreshes every tour and folds improvements into `best`.
    ///
    /// Tours are visited in order. Each one is compared against the running
    /// best, so several improvements found in the same pass compound and the
    /// first tour reaching the final minimum wins. `best` receives a deep
    /// copy; it never aliases a population member.
    ///
    /// Returns `true` if `best` was replaced.
    pub fn update_best(&self, population: &mut [Tour], best: &mut Tour) -> TspResult<bool> {
        let mut improved = false;
        for tour in population.iter_mut() {
            let fitness = self.refresh(tour)?;
            if fitness < best.fitness {
                best.nodes.clone_from(&tour.nodes);
                best.fitness = fitness;
                improved = true;
            }
        }
        Ok(improved)
    }
}
