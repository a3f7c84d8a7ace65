//! Constructive heuristics for building initial tours.
//!
//! - [`nearest_neighbor_tour`] — Greedy nearest-neighbor chain, O(n²)
//!
//! Purely random and identity starting tours live in
//! [`models`](crate::models) ([`random_tour`](crate::models::random_tour),
//! [`identity_tour`](crate::models::identity_tour)).

mod nearest_neighbor;

pub use nearest_neighbor::nearest_neighbor_tour;
