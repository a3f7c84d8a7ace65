//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from a chosen city, always visit the
//! nearest unvisited one.
//!
//! # Complexity
//!
//! O(n²) where n = number of cities.
//!
//! # Reference
//!
//! The simplest constructive heuristic for the TSP. Solution quality is
//! typically 15-25% above optimal, which makes it a useful seed for the
//! improvement engines rather than an answer on its own.

use crate::distance::DistanceMatrix;

/// Constructs a tour by repeatedly visiting the nearest unvisited city.
///
/// # Arguments
///
/// * `distances` — Distance matrix over all cities
/// * `start` — Index of the city the tour begins at
///
/// # Panics
///
/// Panics if `start` is out of range.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::constructive::nearest_neighbor_tour;
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(1.0, 0.0),
///     City::new(2.0, 0.0),
///     City::new(3.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// assert_eq!(nearest_neighbor_tour(&dm, 0), vec![0, 1, 2, 3]);
/// ```
pub fn nearest_neighbor_tour(distances: &DistanceMatrix, start: usize) -> Vec<usize> {
    let n = distances.size();
    assert!(start < n, "start city {start} out of range for {n} cities");

    let mut visited = vec![false; n];
    visited[start] = true;
    let mut tour = Vec::with_capacity(n);
    tour.push(start);
    let mut current = start;

    let mut remaining: Vec<usize> = (0..n).filter(|&i| i != start).collect();
    while let Some(next) = distances.nearest_neighbor(current, &remaining) {
        visited[next] = true;
        tour.push(next);
        current = next;
        remaining.retain(|&i| !visited[i]);
    }

    tour
}
