//! Geometry primitives: [`Coord`] and [`Bounds`].
//!
//! Coordinates are `(row, col)` pairs of unsigned indices. Row grows down,
//! column grows right, and every grid is anchored at the origin.

use std::fmt;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid cell position. Ordered row-major.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell above, or `None` on the first row.
    #[inline]
    pub fn up(self) -> Option<Self> {
        Some(Self::new(self.row.checked_sub(1)?, self.col))
    }

    /// The cell to the right. Not bounds-checked against any grid.
    #[inline]
    pub fn right(self) -> Option<Self> {
        Some(Self::new(self.row, self.col.checked_add(1)?))
    }

    /// The cell below. Not bounds-checked against any grid.
    #[inline]
    pub fn down(self) -> Option<Self> {
        Some(Self::new(self.row.checked_add(1)?, self.col))
    }

    /// The cell to the left, or `None` on the first column.
    #[inline]
    pub fn left(self) -> Option<Self> {
        Some(Self::new(self.row, self.col.checked_sub(1)?))
    }

    /// The four cardinal neighbours in fixed order: up, right, down, left.
    ///
    /// Entries that would leave the non-negative quadrant are `None`; callers
    /// still have to check the far edges against their [`Bounds`].
    #[inline]
    pub fn neighbors_4(self) -> [Option<Coord>; 4] {
        [self.up(), self.right(), self.down(), self.left()]
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// A half-open rectangle `[0, rows) x [0, cols)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub rows: usize,
    pub cols: usize,
}

impl Bounds {
    /// Create bounds covering `rows` x `cols` cells.
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        self.rows * self.cols
    }

    /// Whether the bounds cover no cell at all.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `c` lies inside the bounds.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.row < self.rows && c.col < self.cols
    }

    /// Convert a coordinate to a row-major flat index. `None` if outside.
    #[inline]
    pub fn index(self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row * self.cols + c.col)
    }

    /// Convert a flat index back to a coordinate.
    ///
    /// The index is not checked; pass only values produced by
    /// [`index`](Self::index) on the same bounds.
    #[inline]
    pub fn coord(self, idx: usize) -> Coord {
        Coord::new(idx / self.cols, idx % self.cols)
    }

    /// Row-major iterator over every coordinate.
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Coord;
    type IntoIter = BoundsIter;

    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the coordinates of a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
}

impl Iterator for BoundsIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let c = self.bounds.coord(self.next);
        self.next += 1;
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.bounds.len().saturating_sub(self.next);
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_order_is_up_right_down_left() {
        let c = Coord::new(2, 3);
        assert_eq!(
            c.neighbors_4(),
            [
                Some(Coord::new(1, 3)),
                Some(Coord::new(2, 4)),
                Some(Coord::new(3, 3)),
                Some(Coord::new(2, 2)),
            ]
        );
    }

    #[test]
    fn neighbors_at_origin_do_not_underflow() {
        let n = Coord::ZERO.neighbors_4();
        assert_eq!(n[0], None);
        assert_eq!(n[3], None);
        assert_eq!(n[1], Some(Coord::new(0, 1)));
        assert_eq!(n[2], Some(Coord::new(1, 0)));
    }

    #[test]
    fn coord_orders_row_major() {
        assert!(Coord::new(0, 9) < Coord::new(1, 0));
        assert!(Coord::new(1, 0) < Coord::new(1, 1));
    }

    #[test]
    fn bounds_index_round_trips() {
        let b = Bounds::new(3, 4);
        for c in b {
            let i = b.index(c).unwrap();
            assert_eq!(b.coord(i), c);
        }
        assert_eq!(b.index(Coord::new(3, 0)), None);
        assert_eq!(b.index(Coord::new(0, 4)), None);
    }

    #[test]
    fn bounds_iter_is_row_major() {
        let cells: Vec<Coord> = Bounds::new(2, 2).iter().collect();
        assert_eq!(
            cells,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 1),
            ]
        );
        assert_eq!(Bounds::new(2, 5).iter().len(), 10);
    }

    #[test]
    fn empty_bounds() {
        assert!(Bounds::new(0, 5).is_empty());
        assert!(Bounds::new(5, 0).is_empty());
        assert_eq!(Bounds::new(0, 5).iter().count(), 0);
        assert!(!Bounds::new(1, 1).is_empty());
    }

    #[test]
    fn display() {
        assert_eq!(Coord::new(4, 7).to_string(), "(4, 7)");
        assert_eq!(Bounds::new(5, 8).to_string(), "5x8");
    }
}
