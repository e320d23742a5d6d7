//! The [`ElevationGrid`] type — an immutable rectangle of [`Elevation`]s with
//! a designated start and target cell.
//!
//! Storage is a flat row-major `Vec`. There are no mutating methods: once
//! built, a grid can be shared by any number of concurrent searches.

use std::fmt;

use crate::elevation::{Elevation, START_MARKER, TARGET_MARKER};
use crate::error::{GridError, Marker, OutOfBounds};
use crate::geom::{Bounds, Coord};

/// A validated height map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElevationGrid {
    cells: Vec<Elevation>,
    bounds: Bounds,
    start: Coord,
    target: Coord,
}

impl ElevationGrid {
    /// Build a grid from rows of elevations.
    ///
    /// Fails if there are no cells, if rows differ in width, if either
    /// designated coordinate is outside the grid, if they coincide, or if
    /// the start is not at `a` or the target not at `z`.
    pub fn new(
        rows: Vec<Vec<Elevation>>,
        start: Coord,
        target: Coord,
    ) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            if line.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: line.len(),
                });
            }
            cells.extend_from_slice(line);
        }
        Self::from_cells(Bounds::new(rows.len(), width), cells, start, target)
    }

    /// Build a grid from row-major cells.
    pub(crate) fn from_cells(
        bounds: Bounds,
        cells: Vec<Elevation>,
        start: Coord,
        target: Coord,
    ) -> Result<Self, GridError> {
        if bounds.is_empty() {
            return Err(GridError::Empty);
        }
        debug_assert_eq!(cells.len(), bounds.len());
        for (marker, at) in [(Marker::Start, start), (Marker::Target, target)] {
            if !bounds.contains(at) {
                return Err(GridError::MarkerOutOfBounds { marker, at, bounds });
            }
        }
        if start == target {
            return Err(GridError::CoincidentMarkers(start));
        }
        for (marker, at, expected) in [
            (Marker::Start, start, Elevation::LOWEST),
            (Marker::Target, target, Elevation::HIGHEST),
        ] {
            let found = bounds.index(at).map_or(expected, |i| cells[i]);
            if found != expected {
                return Err(GridError::MarkerElevation { marker, at, found });
            }
        }
        Ok(Self {
            cells,
            bounds,
            start,
            target,
        })
    }

    /// The grid rectangle.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.bounds.cols
    }

    /// The designated start cell.
    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    /// The designated target cell.
    #[inline]
    pub fn target(&self) -> Coord {
        self.target
    }

    /// Whether `c` is inside the grid.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.bounds.contains(c)
    }

    /// Elevation at `c`, or `None` if outside the grid.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<Elevation> {
        self.bounds.index(c).map(|i| self.cells[i])
    }

    /// Elevation at `c`.
    pub fn elevation_at(&self, c: Coord) -> Result<Elevation, OutOfBounds> {
        self.get(c).ok_or(OutOfBounds {
            at: c,
            bounds: self.bounds,
        })
    }

    /// In-bounds cardinal neighbours of `c`, in the fixed order up, right,
    /// down, left.
    pub fn neighbors(
        &self,
        c: Coord,
    ) -> Result<impl Iterator<Item = Coord> + use<>, OutOfBounds> {
        self.elevation_at(c)?;
        let bounds = self.bounds;
        Ok(c
            .neighbors_4()
            .into_iter()
            .flatten()
            .filter(move |&n| bounds.contains(n)))
    }

    /// Lazily yield every coordinate holding `value`, row-major.
    pub fn cells_with_elevation(&self, value: Elevation) -> impl Iterator<Item = Coord> + '_ {
        self.iter()
            .filter_map(move |(c, e)| if e == value { Some(c) } else { None })
    }

    /// The lowest elevation present in the grid.
    pub fn min_elevation(&self) -> Elevation {
        self.cells.iter().copied().min().unwrap_or_default()
    }

    /// Row-major iterator over `(Coord, Elevation)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Elevation)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

impl fmt::Display for ElevationGrid {
    /// Renders the height map back to letters, with the markers in place.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (c, e) in self.iter() {
            if c.col == 0 && c.row > 0 {
                writeln!(f)?;
            }
            let ch = if c == self.start {
                START_MARKER
            } else if c == self.target {
                TARGET_MARKER
            } else {
                e.to_char()
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
