//! Pipeline stage for the in-crate ABC engine.

use super::pipeline::TourStage;
use crate::abc::{AbcConfig, AbcRunner};
use crate::distance::DistanceMatrix;

/// Runs the Artificial Bee Colony engine as a pipeline stage.
///
/// The incoming tour seeds the colony, so this stage genuinely refines
/// what the previous stage produced.
pub struct AbcStage {
    config: AbcConfig,
}

impl AbcStage {
    /// Creates the stage with the given engine configuration.
    pub fn new(config: AbcConfig) -> Self {
        Self { config }
    }
}

impl TourStage for AbcStage {
    fn name(&self) -> &str {
        "abc"
    }

    fn improve(&self, distances: &DistanceMatrix, tour: &[usize], cost: f64) -> (Vec<usize>, f64) {
        let result = AbcRunner::run(distances, tour, cost, &self.config);
        (result.best_tour, result.best_cost)
    }
}
