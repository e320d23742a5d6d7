//! The elevation-gated step rule.

use hillclimb_core::Elevation;

/// Which way a traversal walks relative to the climb rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Walk from source toward goal, climbing at most `max_climb`.
    #[default]
    Forward,
    /// Walk a path backwards: a step `a -> b` is legal iff `b -> a` is.
    Reverse,
}

/// Directed adjacency predicate between two neighbouring cells.
///
/// A step may descend by any amount but climb by at most `max_climb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClimbRule {
    pub max_climb: u8,
}

impl Default for ClimbRule {
    fn default() -> Self {
        Self { max_climb: 1 }
    }
}

impl ClimbRule {
    /// A rule allowing climbs of at most `max_climb`.
    pub const fn new(max_climb: u8) -> Self {
        Self { max_climb }
    }

    /// Whether stepping from `from` onto `to` is legal.
    #[inline]
    pub fn allows(self, from: Elevation, to: Elevation) -> bool {
        from.climb_to(to) <= i16::from(self.max_climb)
    }

    /// Whether the traversal may move from `from` onto `to` when walking
    /// in `direction`.
    #[inline]
    pub fn allows_in(self, direction: Direction, from: Elevation, to: Elevation) -> bool {
        match direction {
            Direction::Forward => self.allows(from, to),
            Direction::Reverse => self.allows(to, from),
        }
    }
}

/// The puzzle rule: climb at most one level, descend freely.
#[inline]
pub fn can_step(from: Elevation, to: Elevation) -> bool {
    ClimbRule::default().allows(from, to)
}
