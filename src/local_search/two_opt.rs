//! 2-opt segment reversal.
//!
//! # Algorithm
//!
//! Reversing the sub-range `[i..=j]` of a tour replaces the edges entering
//! position `i` and leaving position `j` with their crossing-free
//! counterparts while the inner edges only change direction. On symmetric
//! instances this is the classic uncrossing move.
//!
//! Two granularities are provided: a single stochastic trial
//! ([`two_opt_move`]) for use inside sampling loops, and an exhaustive
//! pass over all O(n²) position pairs ([`two_opt_pass`]).
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use rand::Rng;

use super::Acceptance;
use crate::evaluation::TourEvaluator;

/// Reverses a random sub-range `[a..=b]` with distinct `a, b ∈ [1, n)`.
///
/// Position 0 holds the tour's start city by convention and is never
/// touched. Returns the perturbed copy; the input is left as-is.
///
/// # Panics
///
/// Panics if the tour has fewer than 3 entries (no valid position pair).
pub fn random_reversal<R: Rng>(tour: &[usize], rng: &mut R) -> Vec<usize> {
    let n = tour.len();
    assert!(n >= 3, "segment reversal needs at least 3 cities, got {n}");

    let mut a = rng.random_range(1..n);
    let mut b = rng.random_range(1..n);
    while b == a {
        b = rng.random_range(1..n);
    }
    if a > b {
        std::mem::swap(&mut a, &mut b);
    }

    let mut candidate = tour.to_vec();
    candidate[a..=b].reverse();
    candidate
}

/// Proposes a single [`random_reversal`], re-evaluates, and keeps the
/// candidate under the given [`Acceptance`] rule.
///
/// Returns the resulting `(tour, cost)` by value; the input tour is
/// untouched. Under [`Acceptance::Improving`] a non-improving proposal
/// returns a copy of the input pair unchanged.
///
/// # Panics
///
/// Panics if the tour has fewer than 3 entries.
pub fn two_opt_move<R: Rng>(
    tour: &[usize],
    cost: f64,
    evaluator: &TourEvaluator,
    acceptance: Acceptance,
    rng: &mut R,
) -> (Vec<usize>, f64) {
    let candidate = random_reversal(tour, rng);
    let candidate_cost = evaluator.evaluate(&candidate);

    if acceptance.keeps(candidate_cost, cost) {
        (candidate, candidate_cost)
    } else {
        (tour.to_vec(), cost)
    }
}

/// Tries the reversal of every pair `0 ≤ i < j < n`, each applied to the
/// tour as it was on entry, with the [`Acceptance`] rule deciding trial by
/// trial which result stands.
///
/// Under [`Acceptance::Improving`] the net effect is the best improving
/// reversal across all pairs (first seen wins ties, since later
/// non-improving trials do not overwrite). Under [`Acceptance::Always`]
/// every trial overwrites, so the pass collapses to the reversal of the
/// final pair `(n-2, n-1)` — a degenerate mode that is kept exactly as
/// stated rather than redefined; see `test_pass_always_keeps_last_pair`.
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
/// use u_tsp::local_search::{two_opt_pass, Acceptance};
///
/// // Five cities on a line; the middle of the tour is reversed.
/// let cities: Vec<City> = (0..5).map(|i| City::new(i as f64, 0.0)).collect();
/// let dm = DistanceMatrix::from_cities(&cities);
/// let evaluator = TourEvaluator::new(&dm);
///
/// let tour = vec![0, 3, 2, 1, 4];
/// let cost = evaluator.cost(&tour);
/// let (best, best_cost) = two_opt_pass(&tour, cost, &evaluator, Acceptance::Improving);
/// assert_eq!(best, vec![0, 1, 2, 3, 4]);
/// assert!((best_cost - 8.0).abs() < 1e-10);
/// ```
pub fn two_opt_pass(
    tour: &[usize],
    cost: f64,
    evaluator: &TourEvaluator,
    acceptance: Acceptance,
) -> (Vec<usize>, f64) {
    let n = tour.len();
    assert!(n >= 3, "segment reversal needs at least 3 cities, got {n}");

    let mut best = tour.to_vec();
    let mut best_cost = cost;
    let mut trial = tour.to_vec();

    for i in 0..n {
        for j in (i + 1)..n {
            trial[i..=j].reverse();
            let trial_cost = evaluator.evaluate(&trial);

            if acceptance.keeps(trial_cost, best_cost) {
                best.copy_from_slice(&trial);
                best_cost = trial_cost;
            }

            // Restore the entry tour before the next pair
            trial.copy_from_slice(tour);
        }
    }

    (best, best_cost)
}
