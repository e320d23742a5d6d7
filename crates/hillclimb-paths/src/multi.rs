//! Multi-source search: the fewest steps from any `a` cell to the target.
//!
//! Two strategies give the same answer:
//!
//! - [`Strategy::Reverse`] runs one backward search from the target and stops
//!   at the first lowest cell it dequeues. Cost is one traversal no matter
//!   how many candidates there are. This is the default.
//! - [`Strategy::Naive`] runs one forward search per candidate and keeps the
//!   minimum, skipping candidates that cannot reach the target.
//!
//! With the `parallel` feature, [`Strategy::Parallel`] runs the naive
//! per-candidate searches on the rayon thread pool.

use std::fmt;
use std::str::FromStr;

use hillclimb_core::{Coord, Elevation, ElevationGrid};
use log::trace;

use crate::bfs::search;
use crate::distance::Distance;
use crate::rule::{ClimbRule, Direction};
use crate::traits::Walker;

/// How [`best_distance_with`] explores the candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum Strategy {
    /// One forward search per candidate.
    Naive,
    /// A single backward search from the target.
    #[default]
    Reverse,
    /// Naive, with the candidate searches run concurrently.
    #[cfg(feature = "parallel")]
    Parallel,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::Reverse => "reverse",
            #[cfg(feature = "parallel")]
            Self::Parallel => "parallel",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An unrecognised strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStrategy(pub String);

impl fmt::Display for UnknownStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown search strategy \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for UnknownStrategy {}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "naive" => Ok(Self::Naive),
            "reverse" => Ok(Self::Reverse),
            #[cfg(feature = "parallel")]
            "parallel" => Ok(Self::Parallel),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

/// Fewest steps from any cell at elevation `a` to the target, using the
/// default strategy and rule.
pub fn best_distance_from_minimum_elevation(grid: &ElevationGrid) -> Distance {
    best_distance_with(grid, Strategy::default(), ClimbRule::default())
}

/// Fewest steps from any cell at elevation `a` to the target.
///
/// The start is always such a cell, so the result is never worse than the
/// distance from the start.
///
/// Returns [`Distance::Unreachable`] only if no candidate reaches the target.
pub fn best_distance_with(grid: &ElevationGrid, strategy: Strategy, rule: ClimbRule) -> Distance {
    match strategy {
        Strategy::Naive => naive(grid, rule),
        Strategy::Reverse => reverse(grid, rule),
        #[cfg(feature = "parallel")]
        Strategy::Parallel => parallel(grid, rule),
    }
}

fn reverse(grid: &ElevationGrid, rule: ClimbRule) -> Distance {
    let walker = Walker::new(grid, rule, Direction::Reverse);
    search(&walker, grid.target(), |c| grid.get(c) == Some(Elevation::LOWEST))
}

fn naive(grid: &ElevationGrid, rule: ClimbRule) -> Distance {
    let walker = Walker::new(grid, rule, Direction::Forward);
    grid.cells_with_elevation(Elevation::LOWEST)
        .map(|c| candidate(&walker, c))
        .min()
        .unwrap_or(Distance::Unreachable)
}

#[cfg(feature = "parallel")]
fn parallel(grid: &ElevationGrid, rule: ClimbRule) -> Distance {
    use rayon::prelude::*;

    let walker = Walker::new(grid, rule, Direction::Forward);
    let candidates: Vec<Coord> = grid.cells_with_elevation(Elevation::LOWEST).collect();
    candidates
        .par_iter()
        .map(|&c| candidate(&walker, c))
        .min()
        .unwrap_or(Distance::Unreachable)
}

fn candidate(walker: &Walker<'_>, from: Coord) -> Distance {
    let target = walker.grid().target();
    let d = search(walker, from, |c| c == target);
    trace!("candidate {from}: {d}");
    d
}
