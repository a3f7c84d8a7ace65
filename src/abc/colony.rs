//! Colony data model: bees and their roles.

use rand::Rng;

use super::config::AbcConfig;

/// Role a bee currently plays in the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Refines its own tour with adjacent-swap moves.
    Employed,
    /// Refines the incumbent tour; its own tour never changes.
    Onlooker,
    /// Marked for a fresh random tour at the start of the next foraging
    /// phase, after which it forages again.
    Scout,
}

/// One candidate solution plus its search state.
///
/// Each bee owns its tour outright so that bees (and the incumbent) can
/// diverge independently within a cycle.
#[derive(Debug, Clone)]
pub struct Bee {
    /// The bee's current tour.
    pub tour: Vec<usize>,
    /// Cost associated with the tour.
    pub cost: f64,
    /// Consecutive non-improving moves since the last improvement.
    pub stagnation: usize,
    /// Current role.
    pub role: Role,
}

/// The fixed-size set of bees participating in one run.
///
/// Seeding clones the incumbent tour and cost into every bee. The first
/// `trunc(colony_size * onlooker_fraction)` bees become onlookers and keep
/// the cloned tour; the rest become employed and have their own copy fully
/// reshuffled so foraging starts from diverse tours. The reshuffled bees
/// keep the cloned cost — a shuffled tour's true cost is first computed
/// when the bee passes through a scout reset.
#[derive(Debug)]
pub struct Colony {
    bees: Vec<Bee>,
}

impl Colony {
    /// Builds and role-assigns a colony around the incumbent solution.
    pub fn seeded<R: Rng>(tour: &[usize], cost: f64, config: &AbcConfig, rng: &mut R) -> Self {
        let onlooker_count = (config.colony_size as f64 * config.onlooker_fraction) as usize;
        let mut bees = Vec::with_capacity(config.colony_size);

        for i in 0..config.colony_size {
            let mut bee = Bee {
                tour: tour.to_vec(),
                cost,
                stagnation: 0,
                role: Role::Onlooker,
            };
            if i >= onlooker_count {
                u_numflow::random::shuffle(&mut bee.tour, rng);
                bee.role = Role::Employed;
            }
            bees.push(bee);
        }

        Self { bees }
    }

    /// Number of bees.
    pub fn len(&self) -> usize {
        self.bees.len()
    }

    /// Returns `true` if the colony has no bees.
    pub fn is_empty(&self) -> bool {
        self.bees.is_empty()
    }

    /// The bees, in colony order.
    pub fn bees(&self) -> &[Bee] {
        &self.bees
    }

    /// Mutable access to the bees, in colony order.
    pub fn bees_mut(&mut self) -> &mut [Bee] {
        &mut self.bees
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::is_permutation;
    use u_numflow::random::create_rng;

    fn seeded_colony(colony_size: usize, onlooker_fraction: f64) -> Colony {
        let config = AbcConfig::default()
            .with_colony_size(colony_size)
            .with_onlooker_fraction(onlooker_fraction);
        let mut rng = create_rng(42);
        Colony::seeded(&[0, 1, 2, 3, 4], 10.0, &config, &mut rng)
    }

    #[test]
    fn test_seeded_size_and_roles() {
        let colony = seeded_colony(10, 0.2);
        assert_eq!(colony.len(), 10);
        let onlookers = colony
            .bees()
            .iter()
            .filter(|b| b.role == Role::Onlooker)
            .count();
        assert_eq!(onlookers, 2);
        // The onlooker block is the leading contiguous block
        assert_eq!(colony.bees()[0].role, Role::Onlooker);
        assert_eq!(colony.bees()[1].role, Role::Onlooker);
        assert!(colony.bees()[2..].iter().all(|b| b.role == Role::Employed));
    }

    #[test]
    fn test_seeded_onlookers_keep_incumbent_tour() {
        let colony = seeded_colony(10, 0.3);
        for bee in &colony.bees()[..3] {
            assert_eq!(bee.tour, vec![0, 1, 2, 3, 4]);
            assert_eq!(bee.cost, 10.0);
        }
    }

    #[test]
    fn test_seeded_employed_are_shuffled_permutations() {
        let colony = seeded_colony(20, 0.25);
        let mut any_differs = false;
        for bee in &colony.bees()[5..] {
            assert!(is_permutation(&bee.tour, 5));
            // Seed cost is cloned, not recomputed for the shuffled tour
            assert_eq!(bee.cost, 10.0);
            assert_eq!(bee.stagnation, 0);
            if bee.tour != vec![0, 1, 2, 3, 4] {
                any_differs = true;
            }
        }
        assert!(any_differs, "15 shuffles of 5 cities should move something");
    }

    #[test]
    fn test_seeded_all_employed_when_fraction_zero() {
        let colony = seeded_colony(8, 0.0);
        assert!(colony.bees().iter().all(|b| b.role == Role::Employed));
    }

    #[test]
    fn test_truncating_onlooker_count() {
        // 7 * 0.5 = 3.5 → 3 onlookers
        let colony = seeded_colony(7, 0.5);
        let onlookers = colony
            .bees()
            .iter()
            .filter(|b| b.role == Role::Onlooker)
            .count();
        assert_eq!(onlookers, 3);
    }
}
