//! Stage interface and chaining orchestrator.

use crate::distance::DistanceMatrix;

/// A tour optimization stage: takes the best `(tour, cost)` so far and
/// returns its own best attempt.
///
/// Implementations decide for themselves how (and whether) to use the
/// incoming tour; a population-seeding stage may only use it as a
/// benchmark. The [`Pipeline`] compares the returned cost against the
/// incoming one, so a stage never has to worry about making things worse.
pub trait TourStage {
    /// Short identifier for reporting.
    fn name(&self) -> &str;

    /// Runs the stage. Returns the stage's best `(tour, cost)`.
    fn improve(&self, distances: &DistanceMatrix, tour: &[usize], cost: f64) -> (Vec<usize>, f64);
}

/// Chains [`TourStage`]s, each refining the tour produced by the previous
/// one. A stage's output replaces the running solution only when its cost
/// is strictly lower.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::evaluation::TourEvaluator;
/// use u_tsp::abc::AbcConfig;
/// use u_tsp::hybrid::{AbcStage, Pipeline};
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(1.0, 0.0),
///     City::new(1.0, 1.0),
///     City::new(0.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// let tour = vec![0, 2, 1, 3];
/// let cost = TourEvaluator::new(&dm).cost(&tour);
///
/// let pipeline = Pipeline::new().with_stage(Box::new(AbcStage::new(
///     AbcConfig::default()
///         .with_cycles(100)
///         .with_colony_size(20)
///         .with_stagnation_limit(5)
///         .with_seed(42),
/// )));
/// let (best, best_cost) = pipeline.run(&dm, tour, cost);
/// assert!(best_cost <= cost);
/// assert_eq!(best.len(), 4);
/// ```
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn TourStage>>,
}

impl Pipeline {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends a stage.
    pub fn with_stage(mut self, stage: Box<dyn TourStage>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if no stages have been added.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs every stage in order and returns the best `(tour, cost)` seen.
    pub fn run(
        &self,
        distances: &DistanceMatrix,
        initial_tour: Vec<usize>,
        initial_cost: f64,
    ) -> (Vec<usize>, f64) {
        let mut tour = initial_tour;
        let mut cost = initial_cost;

        for stage in &self.stages {
            let (candidate, candidate_cost) = stage.improve(distances, &tour, cost);
            if candidate_cost < cost {
                tour = candidate;
                cost = candidate_cost;
            }
        }

        (tour, cost)
    }
}
