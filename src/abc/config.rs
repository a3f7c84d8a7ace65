//! ABC configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the Artificial Bee Colony engine.
///
/// The three fractions partition the colony by role: the onlooker fraction
/// sizes the block of bees that refine the incumbent tour, and the scout
/// fraction sizes the per-cycle demotion quota for the worst performers.
/// The employed fraction is accepted for interface compatibility with
/// external parameter sets; the employed share of the colony is whatever
/// remains after the onlooker block.
///
/// # Examples
///
/// ```
/// use u_tsp::abc::AbcConfig;
///
/// let config = AbcConfig::default()
///     .with_cycles(200)
///     .with_colony_size(30)
///     .with_scout_fraction(0.3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbcConfig {
    /// Number of search cycles to run. Zero is allowed and returns the
    /// initial solution unchanged.
    pub cycles: usize,

    /// Consecutive non-improving moves after which an employed bee is
    /// demoted to scout.
    pub stagnation_limit: usize,

    /// Number of bees in the colony.
    pub colony_size: usize,

    /// Fraction of the colony demoted to scout each cycle, counted from
    /// the worst performers. The quota is `trunc(colony_size * fraction)`;
    /// zero disables quota demotion.
    pub scout_fraction: f64,

    /// Fraction of the colony assigned the onlooker role at seeding.
    pub onlooker_fraction: f64,

    /// Fraction of the colony intended to forage. Stored and validated;
    /// the employed share is structurally `1 - onlooker_fraction`.
    pub employed_fraction: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AbcConfig {
    fn default() -> Self {
        Self {
            cycles: 10_000,
            stagnation_limit: 500,
            colony_size: 200,
            scout_fraction: 0.4,
            onlooker_fraction: 0.2,
            employed_fraction: 0.8,
            seed: None,
        }
    }
}

impl AbcConfig {
    pub fn with_cycles(mut self, n: usize) -> Self {
        self.cycles = n;
        self
    }

    pub fn with_stagnation_limit(mut self, n: usize) -> Self {
        self.stagnation_limit = n;
        self
    }

    pub fn with_colony_size(mut self, n: usize) -> Self {
        self.colony_size = n;
        self
    }

    pub fn with_scout_fraction(mut self, fraction: f64) -> Self {
        self.scout_fraction = fraction;
        self
    }

    pub fn with_onlooker_fraction(mut self, fraction: f64) -> Self {
        self.onlooker_fraction = fraction;
        self
    }

    pub fn with_employed_fraction(mut self, fraction: f64) -> Self {
        self.employed_fraction = fraction;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.colony_size == 0 {
            return Err("colony_size must be positive".into());
        }
        if self.stagnation_limit == 0 {
            return Err("stagnation_limit must be positive".into());
        }
        for (name, value) in [
            ("scout_fraction", self.scout_fraction),
            ("onlooker_fraction", self.onlooker_fraction),
            ("employed_fraction", self.employed_fraction),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(format!("{name} must be in [0, 1], got {value}"));
            }
        }
        Ok(())
    }
}
