//! Fixtures shared by the search tests.

use hillclimb_core::{Coord, Elevation, ElevationGrid};
use proptest::prelude::*;

use crate::rule::ClimbRule;

pub(crate) const SAMPLE: &str = "\
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi";

pub(crate) fn sample() -> ElevationGrid {
    SAMPLE.parse().unwrap()
}

/// Random rectangular grids with the start at `a` and the target at `z`.
/// Terrain in between is uniform over every level, so whether the target
/// can be reached depends mostly on the climb limit drawn by [`arb_rule`].
pub(crate) fn arb_grid() -> impl Strategy<Value = ElevationGrid> {
    (1usize..7, 1usize..7)
        .prop_filter("need two cells", |(rows, cols)| rows * cols >= 2)
        .prop_flat_map(|(rows, cols)| {
            let n = rows * cols;
            (
                Just(cols),
                prop::collection::vec(0u8..=25, n),
                0..n,
                0..n - 1,
            )
        })
        .prop_map(|(cols, mut levels, s, t)| {
            // Skip over the start so the two never coincide.
            let t = if t >= s { t + 1 } else { t };
            levels[s] = Elevation::LOWEST.value();
            levels[t] = Elevation::HIGHEST.value();
            let rows: Vec<Vec<Elevation>> = levels
                .chunks(cols)
                .map(|row| row.iter().filter_map(|&v| Elevation::new(v)).collect())
                .collect();
            let at = |i: usize| Coord::new(i / cols, i % cols);
            ElevationGrid::new(rows, at(s), at(t)).unwrap()
        })
}

/// Climb limits from the puzzle's 1 up to "anything goes".
pub(crate) fn arb_rule() -> impl Strategy<Value = ClimbRule> {
    (1u8..=25).prop_map(ClimbRule::new)
}
