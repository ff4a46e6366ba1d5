//! Map input and graph output.
//!
//! The only module that touches the filesystem. Failures are returned as
//! [`TspError::Resource`] or [`TspError::MapFormat`]; nothing here exits
//! the process.
//!
//! # Map format
//!
//! Whitespace-separated integers: the city count `n`, then `n` pairs
//! `x y`. City ids are assigned `0..n` in file order.
//!
//! ```text
//! 3
//! 0 0
//! 3 0
//! 0 4
//! ```
//!
//! # Graph format
//!
//! Graphviz `digraph` with one pinned node per city (`pos = "x,y!"`) and a
//! directed edge between each pair of consecutive cities of a tour. The
//! last city is not linked back to the first.

use crate::error::{TspError, TspResult};
use crate::tsp::{City, Tour};
use log::debug;
use rand::Rng;
use std::fs;
use std::path::Path;

/// Largest generated coordinate. Generated points lie in `1..=SCREEN_WIDTH`.
pub const SCREEN_WIDTH: i32 = 100;

/// Upper bound on the capacity reserved from an untrusted city count.
const MAX_PREALLOCATED: usize = 4096;

/// Generates `count` cities at uniform random coordinates in
/// `1..=SCREEN_WIDTH` on both axes.
pub fn generate_cities<R: Rng>(count: usize, rng: &mut R) -> Vec<City> {
    (0..count)
        .map(|id| {
            let x = rng.random_range(1..=SCREEN_WIDTH);
            let y = rng.random_range(1..=SCREEN_WIDTH);
            City::new(id, x, y)
        })
        .collect()
}

/// Parses map text.
///
/// Tokens after the last declared city are ignored.
///
/// # Errors
/// Returns [`TspError::MapFormat`] if the count or a coordinate is missing
/// or not an integer.
pub fn parse_map(text: &str) -> TspResult<Vec<City>> {
    let mut tokens = text.split_whitespace();

    let count_token = tokens
        .next()
        .ok_or_else(|| TspError::map_format("missing city count"))?;
    let count: usize = count_token
        .parse()
        .map_err(|_| TspError::map_format(format!("invalid city count '{count_token}'")))?;

    let mut coordinate = |id: usize, axis: &str| -> TspResult<i32> {
        let token = tokens.next().ok_or_else(|| {
            TspError::map_format(format!(
                "expected {count} cities, missing {axis} of city {id}"
            ))
        })?;
        token.parse().map_err(|_| {
            TspError::map_format(format!("invalid {axis} '{token}' for city {id}"))
        })
    };

    let mut cities = Vec::with_capacity(count.min(MAX_PREALLOCATED));
    for id in 0..count {
        let x = coordinate(id, "x")?;
        let y = coordinate(id, "y")?;
        cities.push(City::new(id, x, y));
    }
    Ok(cities)
}

/// Reads and parses the map file at `path`.
///
/// # Errors
/// Returns [`TspError::Resource`] if the file cannot be read, and
/// [`TspError::MapFormat`] if its content is malformed.
pub fn load_map(path: impl AsRef<Path>) -> TspResult<Vec<City>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| TspError::Resource {
        path: path.to_path_buf(),
        source,
    })?;
    let cities = parse_map(&text)?;
    debug!("loaded {} cities from {}", cities.len(), path.display());
    Ok(cities)
}

/// Renders `cities` and the path of `tour` as a Graphviz digraph.
///
/// # Errors
/// Returns [`TspError::InvalidTour`] if the tour refers to a city id that
/// is not in `cities`.
pub fn render_dot(cities: &[City], tour: &Tour) -> TspResult<String> {
    if let Some(&node) = tour.nodes.iter().find(|&&n| n >= cities.len()) {
        return Err(TspError::invalid_tour(format!(
            "city {node} is out of range for {} cities",
            cities.len()
        )));
    }

    let mut out = String::from("digraph {\n");
    for city in cities {
        out.push_str(&format!(
            "\t{id} [\n\t\tlabel = {id}\n\t\tpos = \"{x},{y}!\"\n\t]\n",
            id = city.id,
            x = city.x,
            y = city.y
        ));
    }
    for pair in tour.nodes.windows(2) {
        out.push_str(&format!("\n\t{} -> {}", pair[0], pair[1]));
    }
    out.push_str("\n}");
    Ok(out)
}

/// Writes [`render_dot`] output to `path`.
///
/// # Errors
/// Returns [`TspError::Resource`] if the file cannot be written.
pub fn save_dot(path: impl AsRef<Path>, cities: &[City], tour: &Tour) -> TspResult<()> {
    let path = path.as_ref();
    let dot = render_dot(cities, tour)?;
    fs::write(path, dot).map_err(|source| TspError::Resource {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("wrote graph for {} cities to {}", cities.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("tsp-ga-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_generate_cities_in_bounds() {
        let mut rng = create_rng(42);
        let cities = generate_cities(200, &mut rng);
        assert_eq!(cities.len(), 200);
        for (i, c) in cities.iter().enumerate() {
            assert_eq!(c.id, i);
            assert!((1..=SCREEN_WIDTH).contains(&c.x));
            assert!((1..=SCREEN_WIDTH).contains(&c.y));
        }
    }

    #[test]
    fn test_parse_map() {
        let cities = parse_map("3\n0 0\n3 0\n0 4\n").unwrap();
        assert_eq!(
            cities,
            vec![City::new(0, 0, 0), City::new(1, 3, 0), City::new(2, 0, 4)]
        );
    }

    #[test]
    fn test_parse_map_any_whitespace() {
        let cities = parse_map("  2 -5\t7 \n\n 8 9 trailing").unwrap();
        assert_eq!(cities, vec![City::new(0, -5, 7), City::new(1, 8, 9)]);
    }

    #[test]
    fn test_parse_map_errors() {
        for text in ["", "x", "-1", "2\n1 1\n2", "2\n1 1\n2 y"] {
            assert!(
                matches!(parse_map(text), Err(TspError::MapFormat { .. })),
                "expected format error for {text:?}"
            );
        }
    }

    #[test]
    fn test_parse_empty_map() {
        assert!(parse_map("0").unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let path = scratch_path("does-not-exist.txt");
        match load_map(&path) {
            Err(TspError::Resource { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected resource error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_map_file() {
        let path = scratch_path("map.txt");
        fs::write(&path, "2\n10 20\n30 40\n").unwrap();
        let cities = load_map(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(cities, vec![City::new(0, 10, 20), City::new(1, 30, 40)]);
    }

    #[test]
    fn test_render_dot() {
        let cities = vec![City::new(0, 0, 0), City::new(1, 3, 0), City::new(2, 0, 4)];
        let dot = render_dot(&cities, &Tour::new(vec![2, 0, 1])).unwrap();
        let expected = "digraph {\n\
            \t0 [\n\t\tlabel = 0\n\t\tpos = \"0,0!\"\n\t]\n\
            \t1 [\n\t\tlabel = 1\n\t\tpos = \"3,0!\"\n\t]\n\
            \t2 [\n\t\tlabel = 2\n\t\tpos = \"0,4!\"\n\t]\n\
            \n\t2 -> 0\n\t0 -> 1\n}";
        assert_eq!(dot, expected);
    }

    #[test]
    fn test_render_dot_single_city_tour_has_no_edges() {
        let cities = vec![City::new(0, -2, 5)];
        let dot = render_dot(&cities, &Tour::new(vec![0])).unwrap();
        assert_eq!(
            dot,
            "digraph {\n\t0 [\n\t\tlabel = 0\n\t\tpos = \"-2,5!\"\n\t]\n\n}"
        );
    }

    #[test]
    fn test_render_dot_rejects_unknown_city() {
        let cities = vec![City::new(0, 0, 0), City::new(1, 3, 0)];
        assert!(matches!(
            render_dot(&cities, &Tour::new(vec![0, 2])),
            Err(TspError::InvalidTour { .. })
        ));
    }

    #[test]
    fn test_save_dot() {
        let path = scratch_path("graph.dot");
        let cities = vec![City::new(0, 1, 2), City::new(1, 3, 4)];
        let tour = Tour::new(vec![1, 0]);
        save_dot(&path, &cities, &tour).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(written, render_dot(&cities, &tour).unwrap());
        assert!(written.ends_with("\n\t1 -> 0\n}"));
    }
}
