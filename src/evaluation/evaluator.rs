//! Tour evaluator that computes cyclic tour length.

use crate::distance::DistanceMatrix;

/// Finite cost sentinel.
///
/// Stands in for "no cost yet" and anchors the coverage penalty
/// (`COST_INFINITY - raw_length`). Kept finite so the penalty arithmetic
/// stays distinguishable from a genuinely unset value; `f64::INFINITY`
/// would absorb the subtraction.
pub const COST_INFINITY: f64 = 1e16;

/// Evaluates tours by summing edge distances around the closed cycle.
///
/// Two evaluation paths exist:
///
/// - [`cost`](TourEvaluator::cost) sums the cycle without checking that the
///   tour is a permutation. This is the path the colony engine uses: its
///   moves are index swaps and segment reversals, which cannot introduce
///   duplicates or omissions, so the per-move O(n) validity scan would buy
///   nothing.
/// - [`checked_cost`](TourEvaluator::checked_cost) additionally scans city
///   coverage and replaces the cost of a tour that misses any city with
///   `COST_INFINITY - raw_length`. Heuristics that may assemble invalid
///   tours during construction evaluate through this path.
///
/// The [`with_coverage_check`](TourEvaluator::with_coverage_check) builder
/// flag selects which path [`evaluate`](TourEvaluator::evaluate) takes.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::evaluation::TourEvaluator;
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(1.0, 0.0),
///     City::new(1.0, 1.0),
///     City::new(0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// let evaluator = TourEvaluator::new(&dm);
/// // Unit square perimeter
/// assert!((evaluator.cost(&[0, 1, 2, 3]) - 4.0).abs() < 1e-10);
/// ```
pub struct TourEvaluator<'a> {
    distances: &'a DistanceMatrix,
    check_coverage: bool,
}

impl<'a> TourEvaluator<'a> {
    /// Creates an evaluator over the given distance matrix.
    ///
    /// Coverage checking is off; [`evaluate`](TourEvaluator::evaluate) uses
    /// the unchecked path.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self {
            distances,
            check_coverage: false,
        }
    }

    /// Routes [`evaluate`](TourEvaluator::evaluate) through the
    /// coverage-checked path.
    pub fn with_coverage_check(mut self) -> Self {
        self.check_coverage = true;
        self
    }

    /// Total cyclic length of the tour: consecutive edges plus the edge
    /// closing the cycle back to the first entry.
    ///
    /// Does not verify that the tour is a permutation. An empty or
    /// single-city tour has cost 0.
    pub fn cost(&self, tour: &[usize]) -> f64 {
        if tour.len() < 2 {
            return 0.0;
        }
        let mut total = 0.0;
        for i in 0..tour.len() - 1 {
            total += self.distances.get(tour[i], tour[i + 1]);
        }
        total += self.distances.get(tour[tour.len() - 1], tour[0]);
        total
    }

    /// Cyclic length with a coverage scan.
    ///
    /// If every city `0..n` appears in the tour, this equals
    /// [`cost`](TourEvaluator::cost). If any city is absent the returned
    /// value is `COST_INFINITY - raw_length` instead, which is far from any
    /// real tour length and keeps incomplete tours comparable to each other
    /// (the longer the raw cycle, the lower the penalized value).
    pub fn checked_cost(&self, tour: &[usize]) -> f64 {
        let raw = self.cost(tour);
        let n = self.distances.size();
        let mut included = vec![false; n];
        for &city in tour {
            if city < n {
                included[city] = true;
            }
        }
        if included.iter().any(|&present| !present) {
            return COST_INFINITY - raw;
        }
        raw
    }

    /// Evaluates the tour through the path selected at construction.
    pub fn evaluate(&self, tour: &[usize]) -> f64 {
        if self.check_coverage {
            self.checked_cost(tour)
        } else {
            self.cost(tour)
        }
    }

    /// The distance matrix this evaluator reads from.
    pub fn distances(&self) -> &DistanceMatrix {
        self.distances
    }
}
