use hillclimb_core::{Bounds, Coord, ElevationGrid};

use crate::rule::{ClimbRule, Direction};

/// Minimal search interface — provides bounds and neighbor enumeration.
pub trait Pather {
    /// The rectangle every enumerated coordinate lies in.
    fn bounds(&self) -> Bounds;

    /// Append the legal successors of `c` into `buf`, in a fixed order.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>);
}

/// A [`Pather`] over an [`ElevationGrid`], gated by a [`ClimbRule`].
#[derive(Debug, Clone, Copy)]
pub struct Walker<'g> {
    grid: &'g ElevationGrid,
    rule: ClimbRule,
    direction: Direction,
}

impl<'g> Walker<'g> {
    /// Walk `grid` forward under the default rule.
    pub fn forward(grid: &'g ElevationGrid) -> Self {
        Self::new(grid, ClimbRule::default(), Direction::Forward)
    }

    /// Walk `grid` backwards under the default rule.
    pub fn reverse(grid: &'g ElevationGrid) -> Self {
        Self::new(grid, ClimbRule::default(), Direction::Reverse)
    }

    /// Walk `grid` in `direction` under `rule`.
    pub fn new(grid: &'g ElevationGrid, rule: ClimbRule, direction: Direction) -> Self {
        Self {
            grid,
            rule,
            direction,
        }
    }

    /// The grid being walked.
    #[inline]
    pub fn grid(&self) -> &'g ElevationGrid {
        self.grid
    }

    /// The climb limit applied to every step.
    #[inline]
    pub fn rule(&self) -> ClimbRule {
        self.rule
    }

    /// Forward from a source, or backward from a goal.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

impl Pather for Walker<'_> {
    fn bounds(&self) -> Bounds {
        self.grid.bounds()
    }

    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        let (Some(here), Ok(around)) = (self.grid.get(c), self.grid.neighbors(c)) else {
            return;
        };
        for n in around {
            let Some(there) = self.grid.get(n) else {
                continue;
            };
            if self.rule.allows_in(self.direction, here, there) {
                buf.push(n);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> ElevationGrid {
        // b at the centre, surrounded by a, c, d and z.
        "SaE\ndbc\nzaa".parse().unwrap()
    }

    #[test]
    fn forward_climbs_at_most_one() {
        let g = grid();
        let mut buf = Vec::new();
        Walker::forward(&g).neighbors(Coord::new(1, 1), &mut buf);
        // up a, right c, down a; left d is too high.
        assert_eq!(
            buf,
            vec![Coord::new(0, 1), Coord::new(1, 2), Coord::new(2, 1)]
        );
    }

    #[test]
    fn reverse_descends_at_most_one() {
        let g = grid();
        let mut buf = Vec::new();
        Walker::reverse(&g).neighbors(Coord::new(1, 1), &mut buf);
        // Any higher neighbor can step down onto b; a can climb onto b.
        assert_eq!(
            buf,
            vec![
                Coord::new(0, 1),
                Coord::new(1, 2),
                Coord::new(2, 1),
                Coord::new(1, 0),
            ]
        );
    }

    #[test]
    fn unrestricted_walk_follows_grid_neighbor_order() {
        let g = grid();
        let walker = Walker::new(&g, ClimbRule::new(25), Direction::Forward);
        for c in g.bounds() {
            let mut buf = Vec::new();
            walker.neighbors(c, &mut buf);
            let expected: Vec<Coord> = g.neighbors(c).unwrap().collect();
            assert_eq!(buf, expected, "at {c}");
        }
    }

    #[test]
    fn outside_cell_has_no_neighbors() {
        let g = grid();
        let mut buf = Vec::new();
        Walker::forward(&g).neighbors(Coord::new(7, 7), &mut buf);
        assert!(buf.is_empty());
    }
}
