//! Tour construction and validity helpers.
//!
//! A tour is a `Vec<usize>` of city indices visited in order, closed back
//! to its first entry. A *valid* tour is a permutation of `0..n`.

use rand::Rng;

/// Returns the identity tour `[0, 1, ..., n-1]`.
pub fn identity_tour(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Returns a uniformly random tour over `0..n`.
pub fn random_tour<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut tour = identity_tour(n);
    u_numflow::random::shuffle(&mut tour, rng);
    tour
}

/// Returns `true` if `tour` is a permutation of `0..n`.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}
