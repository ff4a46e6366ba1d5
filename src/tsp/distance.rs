//! Pairwise distance cache.
//!
//! [`DistanceTable`] stores the Euclidean distance of every unordered pair
//! of distinct cities exactly once, under the canonical key
//! `(min(a, b), max(a, b))`. The same canonicalization is applied on
//! insertion and lookup, so argument order never matters.
//!
//! # Complexity
//! O(n²) time and space to build, O(log n) per lookup.

use super::City;
use crate::error::{TspError, TspResult};
use log::trace;
use std::collections::BTreeMap;

/// Immutable table of distances between all distinct city pairs.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    city_count: usize,
    entries: BTreeMap<(usize, usize), f64>,
}

/// Canonical key of the unordered pair `{a, b}`.
#[inline]
fn pair_key(a: usize, b: usize) -> (usize, usize) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl DistanceTable {
    /// Builds the table for `cities`.
    ///
    /// # Errors
    /// Returns [`TspError::Config`] if the city ids are not exactly `0..n`
    /// in list order.
    pub fn new(cities: &[City]) -> TspResult<Self> {
        if let Some((index, city)) = cities.iter().enumerate().find(|(i, c)| c.id != *i) {
            return Err(TspError::config(format!(
                "city at position {index} has id {}, ids must be dense and in order",
                city.id
            )));
        }

        let mut entries = BTreeMap::new();
        for (i, a) in cities.iter().enumerate() {
            for b in &cities[i + 1..] {
                let distance = a.distance_to(b);
                trace!("{} to {} = {}", a.id, b.id, distance);
                entries.insert(pair_key(a.id, b.id), distance);
            }
        }

        Ok(Self {
            city_count: cities.len(),
            entries,
        })
    }

    /// Distance between cities `a` and `b`, in either order.
    ///
    /// # Errors
    /// Returns [`TspError::Lookup`] when `a == b` or either id is unknown.
    pub fn distance(&self, a: usize, b: usize) -> TspResult<f64> {
        self.entries
            .get(&pair_key(a, b))
            .copied()
            .ok_or(TspError::Lookup { a, b })
    }

    /// Length of the open path visiting `nodes` in order.
    ///
    /// The last node is not connected back to the first. Paths with fewer
    /// than two nodes have length zero.
    pub fn path_length(&self, nodes: &[usize]) -> TspResult<f64> {
        nodes
            .windows(2)
            .try_fold(0.0, |acc, pair| -> TspResult<f64> {
                Ok(acc + self.distance(pair[0], pair[1])?)
            })
    }

    /// Number of cities the table was built for.
    pub fn city_count(&self) -> usize {
        self.city_count
    }

    /// Number of stored pairs, `n * (n - 1) / 2`.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table holds no pairs (fewer than two cities).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `((low_id, high_id), distance)` in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), f64)> + '_ {
        self.entries.iter().map(|(&k, &v)| (k, v))
    }
}
