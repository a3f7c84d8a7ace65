//! Simulated annealing bridge.
//!
//! Implements [`SaProblem`](u_metaheur::sa::SaProblem) over a tour so that
//! `u-metaheur`'s annealing engine can serve as a refinement stage. The
//! annealing mechanics (temperature schedule, Metropolis acceptance) live
//! entirely in `u-metaheur`; this module only supplies the tour moves.

use rand::Rng;
use u_metaheur::sa::{SaConfig, SaProblem, SaRunner};

use super::pipeline::TourStage;
use crate::distance::DistanceMatrix;
use crate::evaluation::TourEvaluator;
use crate::local_search::{random_reversal, random_swap};

/// An annealing problem over a fixed city set, starting from a given tour.
///
/// Neighbors are drawn half from position swaps and half from segment
/// reversals, both leaving position 0 fixed, so every state reachable by
/// the walk is a permutation.
pub struct TourSaProblem<'a> {
    distances: &'a DistanceMatrix,
    start: Vec<usize>,
}

impl<'a> TourSaProblem<'a> {
    /// Creates a problem that anneals away from `start`.
    ///
    /// # Panics
    ///
    /// Panics if there are fewer than 3 cities or the start tour's length
    /// doesn't match the city count.
    pub fn new(distances: &'a DistanceMatrix, start: Vec<usize>) -> Self {
        let n = distances.size();
        assert!(n >= 3, "annealing requires at least 3 cities, got {n}");
        assert_eq!(
            start.len(),
            n,
            "start tour length {} does not match city count {n}",
            start.len()
        );
        Self { distances, start }
    }
}

impl SaProblem for TourSaProblem<'_> {
    type Solution = Vec<usize>;

    fn initial_solution<R: Rng>(&self, _rng: &mut R) -> Vec<usize> {
        self.start.clone()
    }

    fn cost(&self, tour: &Vec<usize>) -> f64 {
        TourEvaluator::new(self.distances).cost(tour)
    }

    fn neighbor<R: Rng>(&self, tour: &Vec<usize>, rng: &mut R) -> Vec<usize> {
        if rng.random_range(0..2u64) == 0 {
            random_swap(tour, rng)
        } else {
            random_reversal(tour, rng)
        }
    }
}

/// Runs `u-metaheur` simulated annealing as a pipeline stage.
pub struct SaStage {
    config: SaConfig,
}

impl SaStage {
    /// Creates the stage with the given annealing configuration.
    pub fn new(config: SaConfig) -> Self {
        Self { config }
    }
}

impl TourStage for SaStage {
    fn name(&self) -> &str {
        "annealing"
    }

    fn improve(&self, distances: &DistanceMatrix, tour: &[usize], _cost: f64) -> (Vec<usize>, f64) {
        let problem = TourSaProblem::new(distances, tour.to_vec());
        let result = SaRunner::run(&problem, &self.config);
        (result.best, result.best_cost)
    }
}
