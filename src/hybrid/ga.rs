//! Genetic algorithm bridge.
//!
//! Implements the [`GaProblem`](u_metaheur::ga::GaProblem) trait over tour
//! permutations so that `u-metaheur`'s GA engine can serve as a pipeline
//! stage. All evolutionary mechanics (selection, elitism, generation loop)
//! live in `u-metaheur`; this module supplies encoding, evaluation, and
//! the permutation-safe operators.
//!
//! # Operators
//!
//! - **Crossover**: Order crossover (OX) — preserves relative city ordering
//! - **Mutation**: Swap + invert (2-opt) with equal probability

use rand::Rng;
use u_metaheur::ga::operators::{invert_mutation, order_crossover, swap_mutation};
use u_metaheur::ga::{GaConfig, GaProblem, GaRunner, Individual};

use super::pipeline::TourStage;
use crate::distance::DistanceMatrix;
use crate::evaluation::TourEvaluator;
use crate::models::random_tour;

/// A tour as a GA individual.
///
/// # Examples
///
/// ```
/// use u_tsp::hybrid::TourIndividual;
/// use u_metaheur::ga::Individual;
///
/// let ind = TourIndividual::new(vec![2, 0, 1]);
/// assert_eq!(ind.tour(), &[2, 0, 1]);
/// assert_eq!(ind.fitness(), f64::INFINITY);
/// ```
#[derive(Debug, Clone)]
pub struct TourIndividual {
    tour: Vec<usize>,
    fitness: f64,
}

impl TourIndividual {
    /// Creates an individual from a tour, with fitness not yet evaluated.
    pub fn new(tour: Vec<usize>) -> Self {
        Self {
            tour,
            fitness: f64::INFINITY,
        }
    }

    /// The tour this individual encodes.
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    /// Consumes the individual, yielding its tour.
    pub fn into_tour(self) -> Vec<usize> {
        self.tour
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.tour.len()
    }

    /// Returns `true` if the tour is empty.
    pub fn is_empty(&self) -> bool {
        self.tour.is_empty()
    }
}

impl Individual for TourIndividual {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

/// GA problem over a fixed city set.
///
/// Individuals are full tour permutations; fitness is the cyclic tour
/// length. The population is seeded randomly — a GA explores broadly
/// rather than refining one incumbent — so a pipeline relates this stage
/// to the incoming tour purely through the keep-if-better rule.
pub struct TourGaProblem<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> TourGaProblem<'a> {
    /// Creates a GA problem over the given distance matrix.
    ///
    /// # Panics
    ///
    /// Panics if there are fewer than 3 cities.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        let n = distances.size();
        assert!(n >= 3, "GA search requires at least 3 cities, got {n}");
        Self { distances }
    }
}

impl GaProblem for TourGaProblem<'_> {
    type Individual = TourIndividual;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> TourIndividual {
        TourIndividual::new(random_tour(self.distances.size(), rng))
    }

    fn evaluate(&self, individual: &TourIndividual) -> f64 {
        TourEvaluator::new(self.distances).cost(individual.tour())
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &TourIndividual,
        parent2: &TourIndividual,
        rng: &mut R,
    ) -> Vec<TourIndividual> {
        let (c1, c2) = order_crossover(parent1.tour(), parent2.tour(), rng);
        vec![TourIndividual::new(c1), TourIndividual::new(c2)]
    }

    fn mutate<R: Rng>(&self, individual: &mut TourIndividual, rng: &mut R) {
        if individual.len() < 2 {
            return;
        }
        // 50% swap, 50% invert (2-opt style)
        if rng.random_range(0..2u64) == 0 {
            swap_mutation(&mut individual.tour, rng);
        } else {
            invert_mutation(&mut individual.tour, rng);
        }
    }
}

/// Runs `u-metaheur`'s genetic algorithm as a pipeline stage.
pub struct GaStage {
    config: GaConfig,
}

impl GaStage {
    /// Creates the stage with the given GA configuration.
    pub fn new(config: GaConfig) -> Self {
        Self { config }
    }
}

impl TourStage for GaStage {
    fn name(&self) -> &str {
        "genetic"
    }

    fn improve(&self, distances: &DistanceMatrix, _tour: &[usize], _cost: f64) -> (Vec<usize>, f64) {
        let problem = TourGaProblem::new(distances);
        let result = GaRunner::run(&problem, &self.config).expect("GA configuration is valid");
        let best_cost = result.best_fitness;
        (result.best.into_tour(), best_cost)
    }
}
