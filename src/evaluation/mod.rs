//! Tour cost evaluation.
//!
//! Provides the cyclic tour-length computation shared by every search
//! engine in the crate, in an unchecked fast form and a coverage-checked
//! penalized form.

mod evaluator;

pub use evaluator::{TourEvaluator, COST_INFINITY};
