//! Position-exchange moves.

use rand::Rng;

use super::Acceptance;
use crate::evaluation::TourEvaluator;

/// Exchanges the contents of two distinct random positions in `[1, n)`.
///
/// Position 0 holds the tour's start city by convention and is never
/// touched. Returns the perturbed copy; the input is left as-is.
///
/// # Panics
///
/// Panics if the tour has fewer than 3 entries (no valid position pair).
pub fn random_swap<R: Rng>(tour: &[usize], rng: &mut R) -> Vec<usize> {
    let n = tour.len();
    assert!(n >= 3, "swap needs at least 3 cities, got {n}");

    let a = rng.random_range(1..n);
    let mut b = rng.random_range(1..n);
    while b == a {
        b = rng.random_range(1..n);
    }

    let mut candidate = tour.to_vec();
    candidate.swap(a, b);
    candidate
}

/// Exchanges a random adjacent pair: `r` and `r + 1` for `r ∈ [0, n-1)`.
///
/// The cheap, maximally local kernel the colony engine applies on every
/// employed and onlooker move. Unlike [`random_swap`] the pair may include
/// position 0.
///
/// # Panics
///
/// Panics if the tour has fewer than 2 entries.
pub fn adjacent_swap<R: Rng>(tour: &[usize], rng: &mut R) -> Vec<usize> {
    let n = tour.len();
    assert!(n >= 2, "adjacent swap needs at least 2 cities, got {n}");

    let r = rng.random_range(0..n - 1);
    let mut candidate = tour.to_vec();
    candidate.swap(r, r + 1);
    candidate
}

/// Proposes a [`random_swap`], re-evaluates, and keeps the candidate under
/// the given [`Acceptance`] rule.
///
/// Returns the resulting `(tour, cost)` by value; the input tour is
/// untouched. Under [`Acceptance::Improving`] a non-improving proposal
/// returns a copy of the input pair unchanged.
///
/// # Panics
///
/// Panics if the tour has fewer than 3 entries.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::evaluation::TourEvaluator;
/// use u_tsp::local_search::{swap_move, Acceptance};
/// use u_numflow::random::create_rng;
///
/// let dm = DistanceMatrix::from_cities(&[
///     City::new(0.0, 0.0),
///     City::new(1.0, 0.0),
///     City::new(1.0, 1.0),
///     City::new(0.0, 1.0),
/// ]);
/// let evaluator = TourEvaluator::new(&dm);
/// let mut rng = create_rng(7);
///
/// let tour = vec![0, 1, 2, 3]; // already optimal: perimeter 4.0
/// let (kept, cost) = swap_move(&tour, 4.0, &evaluator, Acceptance::Improving, &mut rng);
/// assert_eq!(kept, tour); // no strictly better swap exists
/// assert_eq!(cost, 4.0);
/// ```
pub fn swap_move<R: Rng>(
    tour: &[usize],
    cost: f64,
    evaluator: &TourEvaluator,
    acceptance: Acceptance,
    rng: &mut R,
) -> (Vec<usize>, f64) {
    let candidate = random_swap(tour, rng);
    let candidate_cost = evaluator.evaluate(&candidate);

    if acceptance.keeps(candidate_cost, cost) {
        (candidate, candidate_cost)
    } else {
        (tour.to_vec(), cost)
    }
}
