//! ABC execution loop.

use rand::Rng;
use u_numflow::random::create_rng;

use super::colony::{Colony, Role};
use super::config::AbcConfig;
use crate::distance::DistanceMatrix;
use crate::evaluation::TourEvaluator;
use crate::local_search::adjacent_swap;

/// Result of an Artificial Bee Colony run.
#[derive(Debug, Clone)]
pub struct AbcResult {
    /// The best tour found. Always a permutation of the city indices.
    pub best_tour: Vec<usize>,

    /// Cost of the best tour.
    pub best_cost: f64,

    /// Number of cycles executed.
    pub cycles: usize,

    /// Employed-bee moves that improved the bee's own tour.
    pub improving_moves: usize,

    /// Scout demotions triggered by a bee reaching the stagnation limit.
    pub stagnation_scouts: usize,

    /// Scout demotions triggered by the per-cycle worst-performer quota.
    pub quota_scouts: usize,

    /// Scout bees reset to a fresh random tour (and employed again).
    pub scout_resets: usize,

    /// Best cost after seeding and after every cycle. Non-increasing.
    pub cost_history: Vec<f64>,
}

/// The best tour/cost pair found so far. Owned by the run and only ever
/// replaced by strictly cheaper tours.
struct Incumbent {
    tour: Vec<usize>,
    cost: f64,
}

#[derive(Default)]
struct Counters {
    improving_moves: usize,
    stagnation_scouts: usize,
    quota_scouts: usize,
    scout_resets: usize,
}

/// Executes the Artificial Bee Colony algorithm.
///
/// Every cycle runs two phases:
///
/// 1. **Foraging** — each employed bee perturbs its own tour with an
///    adjacent swap, keeping strict improvements. Bees are demoted to
///    scout on two independent paths: individually, when their stagnation
///    counter reaches the configured limit, and collectively, when they
///    rank among the cycle's worst performers within the scout quota.
///    Bees already tagged scout take a fresh random tour and rejoin the
///    employed force instead.
/// 2. **Onlooker** — each onlooker bee perturbs the current incumbent tour
///    directly (not a fitness-weighted pick among employed bees, which is
///    what textbook ABC does; this engine deliberately exploits the
///    incumbent), keeping strict improvements.
///
/// The incumbent never worsens, within a cycle or across cycles.
pub struct AbcRunner;

impl AbcRunner {
    /// Runs ABC from the given initial solution.
    ///
    /// The initial cost is trusted as-is so that a tour handed over from a
    /// previous optimization stage keeps its already-computed cost.
    ///
    /// # Panics
    ///
    /// Panics if the configuration fails validation, if there are fewer
    /// than 3 cities, or if the initial tour's length doesn't match the
    /// city count.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::models::City;
    /// use u_tsp::distance::DistanceMatrix;
    /// use u_tsp::evaluation::TourEvaluator;
    /// use u_tsp::abc::{AbcConfig, AbcRunner};
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
    /// let config = AbcConfig::default()
    ///     .with_cycles(100)
    ///     .with_colony_size(20)
    ///     .with_stagnation_limit(5)
    ///     .with_seed(42);
    /// let result = AbcRunner::run(&dm, &tour, cost, &config);
    /// assert!(result.best_cost <= cost);
    /// ```
    pub fn run(
        distances: &DistanceMatrix,
        initial_tour: &[usize],
        initial_cost: f64,
        config: &AbcConfig,
    ) -> AbcResult {
        config.validate().expect("invalid AbcConfig");
        let n = distances.size();
        assert!(n >= 3, "ABC requires at least 3 cities, got {n}");
        assert_eq!(
            initial_tour.len(),
            n,
            "initial tour length {} does not match city count {n}",
            initial_tour.len()
        );

        let evaluator = TourEvaluator::new(distances);
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let mut incumbent = Incumbent {
            tour: initial_tour.to_vec(),
            cost: initial_cost,
        };
        let mut colony = Colony::seeded(&incumbent.tour, incumbent.cost, config, &mut rng);

        // Constant over the run: colony size and fraction never change.
        let scout_quota = (config.colony_size as f64 * config.scout_fraction) as usize;

        let mut counters = Counters::default();
        let mut cost_history = Vec::with_capacity(config.cycles + 1);
        cost_history.push(incumbent.cost);

        for _ in 0..config.cycles {
            foraging_phase(
                &mut colony,
                &mut incumbent,
                &evaluator,
                config.stagnation_limit,
                scout_quota,
                &mut counters,
                &mut rng,
            );
            onlooker_phase(&mut colony, &mut incumbent, &evaluator, &mut rng);
            cost_history.push(incumbent.cost);
        }

        AbcResult {
            best_tour: incumbent.tour,
            best_cost: incumbent.cost,
            cycles: config.cycles,
            improving_moves: counters.improving_moves,
            stagnation_scouts: counters.stagnation_scouts,
            quota_scouts: counters.quota_scouts,
            scout_resets: counters.scout_resets,
            cost_history,
        }
    }
}

/// One pass over the colony in index order.
///
/// Records `(index, post-move cost)` for every bee that was employed when
/// the phase reached it — including bees demoted by stagnation during
/// their own move — then demotes the worst `min(quota, records)` of them.
fn foraging_phase<R: Rng>(
    colony: &mut Colony,
    incumbent: &mut Incumbent,
    evaluator: &TourEvaluator,
    stagnation_limit: usize,
    scout_quota: usize,
    counters: &mut Counters,
    rng: &mut R,
) {
    let mut records: Vec<(usize, f64)> = Vec::with_capacity(colony.len());

    for (i, bee) in colony.bees_mut().iter_mut().enumerate() {
        match bee.role {
            Role::Employed => {
                let candidate = adjacent_swap(&bee.tour, rng);
                let candidate_cost = evaluator.evaluate(&candidate);

                if candidate_cost < bee.cost {
                    bee.tour = candidate;
                    bee.cost = candidate_cost;
                    bee.stagnation = 0;
                    counters.improving_moves += 1;
                } else {
                    bee.stagnation += 1;
                }

                if bee.stagnation >= stagnation_limit {
                    bee.role = Role::Scout;
                    counters.stagnation_scouts += 1;
                }

                if bee.cost < incumbent.cost {
                    incumbent.tour.clone_from(&bee.tour);
                    incumbent.cost = bee.cost;
                }

                records.push((i, bee.cost));
            }
            Role::Scout => {
                u_numflow::random::shuffle(&mut bee.tour, rng);
                bee.cost = evaluator.evaluate(&bee.tour);
                bee.role = Role::Employed;
                bee.stagnation = 0;
                counters.scout_resets += 1;
            }
            Role::Onlooker => {}
        }
    }

    // Worst cost first
    records.sort_by(|a, b| b.1.partial_cmp(&a.1).expect("tour cost is never NaN"));

    for &(index, _) in records.iter().take(scout_quota) {
        colony.bees_mut()[index].role = Role::Scout;
        counters.quota_scouts += 1;
    }
}

/// Perturbs the incumbent once per onlooker bee, keeping improvements.
/// Onlookers never store a tour of their own beyond the seeded clone.
fn onlooker_phase<R: Rng>(
    colony: &mut Colony,
    incumbent: &mut Incumbent,
    evaluator: &TourEvaluator,
    rng: &mut R,
) {
    for bee in colony.bees() {
        if bee.role != Role::Onlooker {
            continue;
        }
        let candidate = adjacent_swap(&incumbent.tour, rng);
        let candidate_cost = evaluator.evaluate(&candidate);
        if candidate_cost < incumbent.cost {
            incumbent.tour = candidate;
            incumbent.cost = candidate_cost;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{is_permutation, random_tour, City};

    fn unit_square() -> DistanceMatrix {
        DistanceMatrix::from_cities(&[
            City::new(0.0, 0.0),
            City::new(1.0, 0.0),
            City::new(1.0, 1.0),
            City::new(0.0, 1.0),
        ])
    }

    fn ring_cities(n: usize) -> DistanceMatrix {
        let cities: Vec<City> = (0..n)
            .map(|i| {
                let angle = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
                City::new(angle.cos(), angle.sin())
            })
            .collect();
        DistanceMatrix::from_cities(&cities)
    }

    #[test]
    fn test_zero_cycles_returns_initial() {
        let dm = unit_square();
        let tour = vec![0, 2, 1, 3];
        let cost = TourEvaluator::new(&dm).cost(&tour);
        let config = AbcConfig::default().with_cycles(0).with_seed(1);

        let result = AbcRunner::run(&dm, &tour, cost, &config);
        assert_eq!(result.best_tour, tour);
        assert_eq!(result.best_cost, cost);
        assert_eq!(result.cost_history, vec![cost]);
    }

    #[test]
    fn test_best_tour_is_permutation() {
        let dm = ring_cities(8);
        let evaluator = TourEvaluator::new(&dm);
        let mut rng = create_rng(7);
        let tour = random_tour(8, &mut rng);
        let cost = evaluator.cost(&tour);
        let config = AbcConfig::default()
            .with_cycles(50)
            .with_colony_size(15)
            .with_stagnation_limit(4)
            .with_seed(7);

        let result = AbcRunner::run(&dm, &tour, cost, &config);
        assert!(is_permutation(&result.best_tour, 8));
        assert!((evaluator.cost(&result.best_tour) - result.best_cost).abs() < 1e-10);
    }

    #[test]
    fn test_cost_history_monotone_non_increasing() {
        let dm = ring_cities(10);
        let evaluator = TourEvaluator::new(&dm);
        let mut rng = create_rng(3);
        let tour = random_tour(10, &mut rng);
        let cost = evaluator.cost(&tour);
        let config = AbcConfig::default()
            .with_cycles(80)
            .with_colony_size(12)
            .with_stagnation_limit(5)
            .with_seed(3);

        let result = AbcRunner::run(&dm, &tour, cost, &config);
        assert_eq!(result.cost_history.len(), 81);
        for window in result.cost_history.windows(2) {
            assert!(
                window[1] <= window[0] + 1e-10,
                "best cost must never rise: {} -> {}",
                window[0],
                window[1]
            );
        }
        assert_eq!(
            result.cost_history.last().copied(),
            Some(result.best_cost)
        );
    }

    #[test]
    fn test_unit_square_converges_to_perimeter() {
        let dm = unit_square();
        let evaluator = TourEvaluator::new(&dm);
        let mut rng = create_rng(99);
        let tour = random_tour(4, &mut rng);
        let cost = evaluator.cost(&tour);
        let config = AbcConfig::default()
            .with_cycles(100)
            .with_colony_size(20)
            .with_stagnation_limit(5)
            .with_scout_fraction(0.3)
            .with_onlooker_fraction(0.2)
            .with_seed(99);

        let result = AbcRunner::run(&dm, &tour, cost, &config);
        assert!(
            (result.best_cost - 4.0).abs() < 1e-9,
            "expected the square perimeter, got {}",
            result.best_cost
        );
        assert!(is_permutation(&result.best_tour, 4));
    }

    #[test]
    fn test_stagnation_path_demotes_then_resets() {
        // One employed bee seeded with the optimal cost: its shuffled tour
        // can never beat it, so stagnation climbs one per cycle and hits
        // the limit exactly at cycle `limit`.
        let dm = unit_square();
        let tour = vec![0, 1, 2, 3];
        let config = AbcConfig::default()
            .with_colony_size(1)
            .with_onlooker_fraction(0.0)
            .with_scout_fraction(0.0)
            .with_stagnation_limit(3)
            .with_seed(5);

        let at_limit = AbcRunner::run(&dm, &tour, 4.0, &config.clone().with_cycles(3));
        assert_eq!(at_limit.stagnation_scouts, 1);
        assert_eq!(at_limit.scout_resets, 0);
        assert_eq!(at_limit.quota_scouts, 0);

        let one_more = AbcRunner::run(&dm, &tour, 4.0, &config.clone().with_cycles(4));
        assert_eq!(one_more.stagnation_scouts, 1);
        assert_eq!(one_more.scout_resets, 1, "demoted bee reshuffles next cycle");

        let before_limit = AbcRunner::run(&dm, &tour, 4.0, &config.with_cycles(2));
        assert_eq!(before_limit.stagnation_scouts, 0);
    }

    #[test]
    fn test_quota_path_demotes_worst_performers() {
        // Stagnation limit far beyond the cycle count: only the quota can
        // produce scouts. colony 10 * scout 0.3 → 3 demotions per cycle.
        let dm = ring_cities(6);
        let evaluator = TourEvaluator::new(&dm);
        let tour: Vec<usize> = (0..6).collect();
        let cost = evaluator.cost(&tour);
        let config = AbcConfig::default()
            .with_cycles(1)
            .with_colony_size(10)
            .with_onlooker_fraction(0.0)
            .with_scout_fraction(0.3)
            .with_stagnation_limit(100)
            .with_seed(8);

        let result = AbcRunner::run(&dm, &tour, cost, &config);
        assert_eq!(result.quota_scouts, 3);
        assert_eq!(result.stagnation_scouts, 0);
    }

    #[test]
    fn test_zero_scout_fraction_disables_quota() {
        let dm = ring_cities(6);
        let evaluator = TourEvaluator::new(&dm);
        let tour: Vec<usize> = (0..6).collect();
        let cost = evaluator.cost(&tour);
        let config = AbcConfig::default()
            .with_cycles(10)
            .with_colony_size(10)
            .with_scout_fraction(0.0)
            .with_stagnation_limit(100)
            .with_seed(8);

        let result = AbcRunner::run(&dm, &tour, cost, &config);
        assert_eq!(result.quota_scouts, 0);
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let dm = ring_cities(7);
        let evaluator = TourEvaluator::new(&dm);
        let tour: Vec<usize> = vec![3, 0, 5, 1, 6, 2, 4];
        let cost = evaluator.cost(&tour);
        let config = AbcConfig::default()
            .with_cycles(40)
            .with_colony_size(10)
            .with_stagnation_limit(4)
            .with_seed(1234);

        let a = AbcRunner::run(&dm, &tour, cost, &config);
        let b = AbcRunner::run(&dm, &tour, cost, &config);
        assert_eq!(a.best_tour, b.best_tour);
        assert_eq!(a.best_cost, b.best_cost);
        assert_eq!(a.cost_history, b.cost_history);
    }

    #[test]
    fn test_initial_better_than_anything_found_is_kept() {
        // Claiming an artificially low initial cost: nothing can beat it,
        // so it must come back untouched.
        let dm = unit_square();
        let tour = vec![0, 1, 2, 3];
        let config = AbcConfig::default()
            .with_cycles(30)
            .with_colony_size(10)
            .with_stagnation_limit(3)
            .with_seed(2);

        let result = AbcRunner::run(&dm, &tour, 0.5, &config);
        assert_eq!(result.best_tour, tour);
        assert_eq!(result.best_cost, 0.5);
    }

    #[test]
    #[should_panic(expected = "at least 3 cities")]
    fn test_rejects_degenerate_city_count() {
        let dm = DistanceMatrix::from_cities(&[City::new(0.0, 0.0), City::new(1.0, 0.0)]);
        let config = AbcConfig::default().with_seed(1);
        AbcRunner::run(&dm, &[0, 1], 2.0, &config);
    }

    #[test]
    #[should_panic(expected = "invalid AbcConfig")]
    fn test_rejects_invalid_config() {
        let dm = unit_square();
        let config = AbcConfig::default().with_colony_size(0);
        AbcRunner::run(&dm, &[0, 1, 2, 3], 4.0, &config);
    }

    #[test]
    #[should_panic(expected = "does not match city count")]
    fn test_rejects_tour_length_mismatch() {
        let dm = unit_square();
        let config = AbcConfig::default().with_seed(1);
        AbcRunner::run(&dm, &[0, 1, 2], 3.0, &config);
    }
}
