//! **hillclimb-core** — elevation grids for hill-climbing path searches.
//!
//! This crate provides the data side of the search: coordinates and bounds,
//! the [`Elevation`] scale, the immutable [`ElevationGrid`] with its start
//! and target cells, and the height-map parser that produces it.

pub mod elevation;
pub mod error;
pub mod geom;
pub mod grid;
pub mod parse;

pub use elevation::{Elevation, ElevationOutOfRange, START_MARKER, TARGET_MARKER};
pub use error::{GridError, Marker, OutOfBounds};
pub use geom::{Bounds, BoundsIter, Coord};
pub use grid::ElevationGrid;
pub use parse::build_grid;
