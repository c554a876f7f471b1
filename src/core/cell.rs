//! Board coordinates and bounding boxes.
//!
//! ## Cell
//!
//! Integer `(row, col)` pair. Boards are unbounded in every direction, so
//! coordinates may be negative. Cells order row-major, which gives every
//! board query a deterministic iteration order.
//!
//! ## Bounds
//!
//! Inclusive bounding box over occupied cells, used by hosts for camera
//! framing.

use serde::{Deserialize, Serialize};

/// A board cell.
///
/// ```
/// use tileplace::core::Cell;
///
/// let cell = Cell::new(2, -1);
/// assert_eq!(cell.offset(1, 1), Cell::new(3, 0));
/// assert!(Cell::new(0, 5) < Cell::new(1, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// The board origin, where opening cards are anchored.
    pub const ORIGIN: Cell = Cell { row: 0, col: 0 };

    /// Create a new cell.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Cell shifted by `(d_row, d_col)`.
    #[must_use]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// The four axis-aligned neighbours in up, right, down, left order.
    #[must_use]
    pub const fn orthogonal_neighbours(self) -> [Cell; 4] {
        [
            self.offset(-1, 0),
            self.offset(0, 1),
            self.offset(1, 0),
            self.offset(0, -1),
        ]
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Inclusive bounding box in board-cell units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum column.
    pub left: i32,
    /// Maximum column.
    pub right: i32,
    /// Minimum row.
    pub top: i32,
    /// Maximum row.
    pub bottom: i32,
}

impl Bounds {
    /// Bounds covering a single cell.
    #[must_use]
    pub const fn of_cell(cell: Cell) -> Self {
        Self {
            left: cell.col,
            right: cell.col,
            top: cell.row,
            bottom: cell.row,
        }
    }

    /// Smallest bounds covering every cell, or `None` for no cells.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let mut iter = cells.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::of_cell(first), Self::including))
    }

    /// Grow the bounds to include `cell`.
    #[must_use]
    pub fn including(self, cell: Cell) -> Self {
        Self {
            left: self.left.min(cell.col),
            right: self.right.max(cell.col),
            top: self.top.min(cell.row),
            bottom: self.bottom.max(cell.row),
        }
    }

    /// Check whether `other` lies entirely within these bounds.
    #[must_use]
    pub fn contains(&self, other: &Bounds) -> bool {
        self.left <= other.left
            && self.right >= other.right
            && self.top <= other.top
            && self.bottom >= other.bottom
    }

    /// Width in cells.
    #[must_use]
    pub fn width(&self) -> u32 {
        (self.right - self.left + 1) as u32
    }

    /// Height in cells.
    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom - self.top + 1) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_ordering_is_row_major() {
        let mut cells = vec![Cell::new(1, 0), Cell::new(0, 3), Cell::new(0, -2)];
        cells.sort();
        assert_eq!(cells, vec![Cell::new(0, -2), Cell::new(0, 3), Cell::new(1, 0)]);
    }

    #[test]
    fn test_orthogonal_neighbours() {
        let n = Cell::new(0, 0).orthogonal_neighbours();
        assert_eq!(n, [Cell::new(-1, 0), Cell::new(0, 1), Cell::new(1, 0), Cell::new(0, -1)]);
    }

    #[test]
    fn test_bounds_from_cells() {
        assert_eq!(Bounds::from_cells(Vec::new()), None);

        let bounds = Bounds::from_cells(vec![Cell::new(2, -1), Cell::new(-3, 4), Cell::new(0, 0)]).unwrap();
        assert_eq!(bounds, Bounds { left: -1, right: 4, top: -3, bottom: 2 });
        assert_eq!(bounds.width(), 6);
        assert_eq!(bounds.height(), 6);
    }

    #[test]
    fn test_bounds_contains() {
        let outer = Bounds { left: -2, right: 2, top: -2, bottom: 2 };
        let inner = Bounds::of_cell(Cell::new(1, 1));

        assert!(outer.contains(&inner));
        assert!(outer.contains(&outer));
        assert!(!inner.contains(&outer));
    }
}
