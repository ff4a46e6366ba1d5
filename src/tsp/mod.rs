//! Problem representation: cities, cached distances and tours.
//!
//! - [`City`]: an immutable 2D integer point with a dense id
//! - [`DistanceTable`]: pairwise Euclidean distances keyed by unordered pair
//! - [`Tour`]: a permutation of city ids with a cached open-path length

mod city;
mod distance;
mod tour;

pub use city::City;
pub use distance::DistanceTable;
pub use tour::Tour;
