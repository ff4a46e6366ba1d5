//! Elitist parent selection.
//!
//! Every generation breeds exclusively from the two fittest tours. They are
//! found in a single O(n) pass that keeps two running minima.

use crate::tsp::Tour;

/// Indices of the two fittest tours in a population.
///
/// `second` is `None` when the population holds fewer than two tours;
/// both are `None` for an empty population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elite {
    /// Index of the tour with the lowest fitness.
    pub first: Option<usize>,
    /// Index of the runner-up.
    pub second: Option<usize>,
}

impl Elite {
    /// Both indices, if the population allowed picking two.
    pub fn pair(&self) -> Option<(usize, usize)> {
        self.first.zip(self.second)
    }
}

/// Finds the two fittest tours of `population`.
///
/// Both running values start at `+inf`. A fitness strictly below the
/// running first demotes first into second; otherwise a fitness strictly
/// below the running second replaces it. Only strict `<` counts, so the
/// earliest tour reaching the minimum keeps `first`, while a later tie can
/// still take `second`.
///
/// # Complexity
/// O(n) time, O(1) space
pub fn select_elite(population: &[Tour]) -> Elite {
    let mut first = (f64::INFINITY, None);
    let mut second = (f64::INFINITY, None);

    for (i, tour) in population.iter().enumerate() {
        if tour.fitness < first.0 {
            second = first;
            first = (tour.fitness, Some(i));
        } else if tour.fitness < second.0 {
            second = (tour.fitness, Some(i));
        }
    }

    Elite {
        first: first.1,
        second: second.1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_population(fitnesses: &[f64]) -> Vec<Tour> {
        fitnesses
            .iter()
            .map(|&f| {
                let mut tour = Tour::identity(3);
                tour.fitness = f;
                tour
            })
            .collect()
    }

    #[test]
    fn test_picks_two_lowest() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        assert_eq!(select_elite(&pop).pair(), Some((2, 1)));
    }

    #[test]
    fn test_tie_keeps_earliest_first() {
        // The 2.0 at index 2 does not beat the running first (2.0), but it
        // does beat the running second (5.0, demoted from index 0).
        let pop = make_population(&[5.0, 2.0, 2.0, 8.0]);
        let elite = select_elite(&pop);
        assert_eq!(elite.first, Some(1));
        assert_eq!(elite.second, Some(2));
    }

    #[test]
    fn test_later_values_fill_second() {
        let pop = make_population(&[2.0, 9.0, 3.0, 8.0]);
        assert_eq!(select_elite(&pop).pair(), Some((0, 2)));
    }

    #[test]
    fn test_single_tour_has_no_second() {
        let pop = make_population(&[5.0]);
        let elite = select_elite(&pop);
        assert_eq!(elite.first, Some(0));
        assert_eq!(elite.second, None);
        assert_eq!(elite.pair(), None);
    }

    #[test]
    fn test_empty_population() {
        let elite = select_elite(&[]);
        assert_eq!(elite.first, None);
        assert_eq!(elite.second, None);
    }

    #[test]
    fn test_stale_tours_never_selected() {
        let pop = make_population(&[f64::INFINITY, 4.0, f64::INFINITY]);
        let elite = select_elite(&pop);
        assert_eq!(elite.first, Some(1));
        assert_eq!(elite.second, None);
    }
}
