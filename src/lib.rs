//! # u-tsp
//!
//! Traveling salesman optimization library built around an Artificial Bee
//! Colony (ABC) engine and shared tour-evaluation / local-search primitives.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (City, tour construction helpers)
//! - [`distance`] — Dense Euclidean distance matrix
//! - [`evaluation`] — Cyclic tour cost, with an optional coverage check
//! - [`local_search`] — Perturbation operators (swap, 2-opt reversal)
//! - [`constructive`] — Nearest-neighbor initial tour
//! - [`abc`] — Artificial Bee Colony engine (colony, roles, runner)
//! - [`hybrid`] — Stage chaining plus GA/SA bridges into `u-metaheur`
//!
//! ## Entry point
//!
//! [`abc::AbcRunner::run`] takes a distance matrix, an initial `(tour, cost)`
//! pair and an [`abc::AbcConfig`], and returns the best tour found together
//! with run statistics. Stages from other metaheuristics chain through
//! [`hybrid::Pipeline`], each refining the tour produced by the previous one.

pub mod abc;
pub mod constructive;
pub mod distance;
pub mod evaluation;
pub mod hybrid;
pub mod local_search;
pub mod models;
