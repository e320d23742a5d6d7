//! Height-map text to [`ElevationGrid`].
//!
//! Each line is one row of letters `a`-`z`. Exactly one cell is `S` (the
//! start, elevation `a`) and exactly one is `E` (the target, elevation `z`).
//! Leading/trailing whitespace is trimmed from the whole text but not from
//! individual lines.

use std::str::FromStr;

use crate::elevation::{Elevation, START_MARKER, TARGET_MARKER};
use crate::error::{GridError, Marker};
use crate::geom::{Bounds, Coord};
use crate::grid::ElevationGrid;

/// Build a grid from character rows.
pub fn build_grid<I, S>(rows: I) -> Result<ElevationGrid, GridError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cells = Vec::new();
    let mut width: Option<usize> = None;
    let mut height = 0;
    let mut start: Option<Coord> = None;
    let mut target: Option<Coord> = None;

    for (r, line) in rows.into_iter().enumerate() {
        let line = line.as_ref();
        let mut found = 0;
        for (c, ch) in line.chars().enumerate() {
            let at = Coord::new(r, c);
            match ch {
                START_MARKER => note_marker(&mut start, Marker::Start, at)?,
                TARGET_MARKER => note_marker(&mut target, Marker::Target, at)?,
                _ => {}
            }
            let elevation = Elevation::from_char(ch).ok_or(GridError::InvalidElevation { ch, at })?;
            cells.push(elevation);
            found += 1;
        }
        match width {
            None => width = Some(found),
            Some(expected) if expected != found => {
                return Err(GridError::Ragged {
                    row: r,
                    expected,
                    found,
                });
            }
            Some(_) => {}
        }
        height += 1;
    }

    let bounds = Bounds::new(height, width.unwrap_or(0));
    if bounds.is_empty() {
        return Err(GridError::Empty);
    }
    let start = start.ok_or(GridError::MissingMarker(Marker::Start))?;
    let target = target.ok_or(GridError::MissingMarker(Marker::Target))?;
    ElevationGrid::from_cells(bounds, cells, start, target)
}

fn note_marker(slot: &mut Option<Coord>, marker: Marker, at: Coord) -> Result<(), GridError> {
    if let Some(first) = *slot {
        return Err(GridError::DuplicateMarker {
            marker,
            first,
            second: at,
        });
    }
    *slot = Some(at);
    Ok(())
}

impl FromStr for ElevationGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        build_grid(s.trim().lines())
    }
}
