use std::fmt;

use hillclimb_core::Coord;

/// Outcome of a shortest-path query: a step count, or no path at all.
///
/// Ordered so that every finite distance is less than `Unreachable`, which
/// lets candidate results be reduced with `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Distance {
    Steps(usize),
    Unreachable,
}

impl Distance {
    /// The step count, if reachable.
    #[inline]
    pub fn steps(self) -> Option<usize> {
        match self {
            Self::Steps(n) => Some(n),
            Self::Unreachable => None,
        }
    }

    #[inline]
    pub fn is_reachable(self) -> bool {
        matches!(self, Self::Steps(_))
    }
}

impl From<Option<usize>> for Distance {
    fn from(steps: Option<usize>) -> Self {
        steps.map_or(Self::Unreachable, Self::Steps)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Steps(n) => write!(f, "{n}"),
            Self::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// A position with its BFS distance, returned from distance-map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Coord,
    pub cost: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_sorts_after_every_distance() {
        assert!(Distance::Steps(usize::MAX) < Distance::Unreachable);
        assert!(Distance::Steps(0) < Distance::Steps(1));
        let best = [Distance::Unreachable, Distance::Steps(7), Distance::Steps(3)]
            .into_iter()
            .min();
        assert_eq!(best, Some(Distance::Steps(3)));
    }

    #[test]
    fn unreachable_is_not_zero() {
        assert_ne!(Distance::Unreachable, Distance::Steps(0));
        assert_eq!(Distance::Unreachable.steps(), None);
        assert!(!Distance::Unreachable.is_reachable());
        assert_eq!(Distance::Steps(0).steps(), Some(0));
    }

    #[test]
    fn from_option() {
        assert_eq!(Distance::from(Some(4)), Distance::Steps(4));
        assert_eq!(Distance::from(None), Distance::Unreachable);
    }

    #[test]
    fn display() {
        assert_eq!(Distance::Steps(31).to_string(), "31");
        assert_eq!(Distance::Unreachable.to_string(), "unreachable");
    }
}
