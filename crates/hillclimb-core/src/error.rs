//! Errors raised while building or querying an [`ElevationGrid`](crate::ElevationGrid).

use std::fmt;

use crate::elevation::Elevation;
use crate::geom::{Bounds, Coord};

/// One of the two designated cells of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Start,
    Target,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Target => write!(f, "target"),
        }
    }
}

/// Errors that can occur when building a grid. All of them are fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input has no cells.
    Empty,
    /// A row's width differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is neither a letter `a`-`z` nor a marker.
    InvalidElevation { ch: char, at: Coord },
    /// No cell carries the marker.
    MissingMarker(Marker),
    /// More than one cell carries the marker.
    DuplicateMarker {
        marker: Marker,
        first: Coord,
        second: Coord,
    },
    /// A designated coordinate lies outside the grid.
    MarkerOutOfBounds {
        marker: Marker,
        at: Coord,
        bounds: Bounds,
    },
    /// Start and target designate the same cell.
    CoincidentMarkers(Coord),
    /// A designated cell is not at its marker's elevation: `a` for the
    /// start, `z` for the target.
    MarkerElevation {
        marker: Marker,
        at: Coord,
        found: Elevation,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no cells"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::InvalidElevation { ch, at } => {
                write!(f, "grid: invalid elevation \u{201c}{ch}\u{201d} at {at}")
            }
            Self::MissingMarker(marker) => write!(f, "grid: no {marker} cell"),
            Self::DuplicateMarker {
                marker,
                first,
                second,
            } => write!(f, "grid: {marker} marked twice, at {first} and {second}"),
            Self::MarkerOutOfBounds { marker, at, bounds } => {
                write!(f, "grid: {marker} {at} lies outside {bounds}")
            }
            Self::CoincidentMarkers(at) => {
                write!(f, "grid: start and target are both {at}")
            }
            Self::MarkerElevation { marker, at, found } => {
                write!(f, "grid: {marker} {at} has elevation {found}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A coordinate outside the grid was queried.
///
/// This is a caller bug, never a data problem, and is never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds {
    pub at: Coord,
    pub bounds: Bounds,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "coordinate {} is outside grid {}", self.at, self.bounds)
    }
}

impl std::error::Error for OutOfBounds {}
