//! Permutation-preserving genetic operators for tours.
//!
//! # Crossover
//!
//! - [`half_order_crossover`]: copy the first half of one parent, fill the
//!   rest in the other parent's order. Deterministic.
//!
//! # Mutation
//!
//! - [`swap_mutation`]: per-position random swaps under a threshold.
//!
//! Both operators keep `nodes` a permutation of the parents' city ids and
//! leave the resulting tours stale.

use crate::error::{TspError, TspResult};
use crate::tsp::Tour;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Half-copy order crossover.
///
/// # Algorithm
///
/// With `n` cities and `h = n / 2`:
///
/// 1. `child1[..h] = parent1[..h]`, `child2[..h] = parent2[..h]`
/// 2. Fill `child1` by scanning `parent2` from the start, appending every
///    city not yet present
/// 3. Fill `child2` the same way from `parent1`
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Errors
/// Returns [`TspError::InvalidTour`] if the parents have different lengths
/// or are not permutations of `0..n`.
pub fn half_order_crossover(parent1: &Tour, parent2: &Tour) -> TspResult<(Tour, Tour)> {
    let n = parent1.len();
    if parent2.len() != n {
        return Err(TspError::invalid_tour(format!(
            "parents must have equal length, got {n} and {}",
            parent2.len()
        )));
    }
    parent1.check_permutation(n)?;
    parent2.check_permutation(n)?;

    let half = n / 2;
    let child1 = build_child(&parent1.nodes[..half], &parent2.nodes);
    let child2 = build_child(&parent2.nodes[..half], &parent1.nodes);

    Ok((Tour::new(child1), Tour::new(child2)))
}

/// Copy `head`, then append the cities of `donor` missing from it, in
/// donor order.
fn build_child(head: &[usize], donor: &[usize]) -> Vec<usize> {
    let n = donor.len();
    let mut child = Vec::with_capacity(n);
    let mut present = vec![false; n];

    for &city in head {
        child.push(city);
        present[city] = true;
    }
    for &city in donor {
        if !present[city] {
            child.push(city);
            present[city] = true;
        }
    }

    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation with an inverted threshold.
///
/// Runs one trial per position. Each trial draws `u` uniformly from
/// `[0, 1)`; when `u > mutation_chance`, two independent uniform indices
/// are drawn and their cities swapped. Swaps may undo each other or be
/// no-ops (equal indices). A larger `mutation_chance` yields fewer swaps:
/// `1.0` never swaps and `0.0` swaps on every trial.
///
/// The tour is marked stale. Tours with fewer than two cities are left
/// unchanged.
///
/// # Complexity
/// O(n)
pub fn swap_mutation<R: Rng>(tour: &mut Tour, mutation_chance: f64, rng: &mut R) {
    let n = tour.len();
    if n < 2 {
        return;
    }
    for _ in 0..n {
        if rng.random::<f64>() > mutation_chance {
            let a = rng.random_range(0..n);
            let b = rng.random_range(0..n);
            tour.nodes.swap(a, b);
        }
    }
    tour.invalidate();
}

// ============================================================================
// Tests
// ============================================================================
