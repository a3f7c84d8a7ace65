//! Local search operators for improving tours.
//!
//! Two layers:
//!
//! - Raw proposal kernels that perturb a tour and return the candidate
//!   unconditionally: [`random_swap`], [`adjacent_swap`],
//!   [`random_reversal`].
//! - Accepting operators that propose, re-evaluate, and keep or discard the
//!   candidate under an [`Acceptance`] rule: [`swap_move`],
//!   [`two_opt_move`], [`two_opt_pass`].
//!
//! All operators leave position 0 fixed except [`adjacent_swap`] (whose
//! pair may start at position 0) and the full reshuffle done elsewhere by
//! scouts; callers that rely on a fixed start city should anchor it there.

mod swap;
mod two_opt;

pub use swap::{adjacent_swap, random_swap, swap_move};
pub use two_opt::{random_reversal, two_opt_move, two_opt_pass};

/// Rule deciding whether a proposed tour replaces the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    /// Keep the candidate only when its cost is strictly lower.
    Improving,
    /// Keep the candidate unconditionally (forced diversification).
    Always,
}

impl Acceptance {
    /// Applies the rule: `true` if a candidate of cost `candidate` replaces
    /// a tour of cost `current`.
    pub(crate) fn keeps(self, candidate: f64, current: f64) -> bool {
        match self {
            Acceptance::Improving => candidate < current,
            Acceptance::Always => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_improving_keeps_strictly_lower_only() {
        assert!(Acceptance::Improving.keeps(1.0, 2.0));
        assert!(!Acceptance::Improving.keeps(2.0, 2.0));
        assert!(!Acceptance::Improving.keeps(3.0, 2.0));
    }

    #[test]
    fn test_always_keeps_everything() {
        assert!(Acceptance::Always.keeps(5.0, 2.0));
        assert!(Acceptance::Always.keeps(2.0, 2.0));
    }
}
