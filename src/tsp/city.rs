//! City representation.

/// A point on the map.
///
/// Ids are dense: a problem with `n` cities uses ids `0..n`, assigned by
/// position when the cities are generated or loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// Dense identifier, equal to the city's index in its list.
    pub id: usize,
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl City {
    /// Creates a city.
    pub fn new(id: usize, x: i32, y: i32) -> Self {
        Self { id, x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_euclidean() {
        let a = City::new(0, 0, 0);
        let b = City::new(1, 3, 4);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = City::new(0, -7, 12);
        assert_eq!(a.distance_to(&a), 0.0);
    }
}
