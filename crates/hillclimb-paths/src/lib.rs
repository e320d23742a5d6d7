//! Shortest-path searches over elevation grids.
//!
//! A grid induces a directed graph: each cell links to its in-bounds
//! cardinal neighbours, and a link is usable only if the [`ClimbRule`]
//! allows the step. This crate provides:
//!
//! - **BFS** single-pair step counts ([`shortest_distance`], generic [`search`])
//! - **Distance maps** from one source ([`distance_map`])
//! - **Multi-source** best start from the lowest ground
//!   ([`best_distance_from_minimum_elevation`], [`best_distance_with`])
//!
//! Every search owns its own frontier; the grid is only ever borrowed
//! immutably, so concurrent searches over one grid need no coordination.
//!
//! # Seams
//!
//! | Item | Role |
//! |---|---|
//! | [`Pather`] | neighbor enumeration consumed by the engine |
//! | [`Walker`] | [`Pather`] over a grid, forward or reverse |
//! | [`Distance`] | step count or `Unreachable` |

mod bfs;
mod distance;
mod multi;
mod rule;
mod traits;

#[cfg(test)]
mod testutil;

pub use bfs::{distance_map, search, shortest_distance};
pub use distance::{Distance, PathNode};
pub use multi::{
    Strategy, UnknownStrategy, best_distance_from_minimum_elevation, best_distance_with,
};
pub use rule::{ClimbRule, Direction, can_step};
pub use traits::{Pather, Walker};
