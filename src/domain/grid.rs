//! Grid-cell vertex keys.
//!
//! Cells of an `height x width` rectangle are flattened row-major. Coordinates
//! are signed so that neighbor generation (`row - 1`, `col - 1`) can step off
//! the grid and be rejected with [`GridDomain::contains`] instead of wrapping.

use super::VertexDomain;
use serde::{Deserialize, Serialize};

/// A `(row, col)` cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridKey {
    /// Zero-based row.
    pub row: isize,
    /// Zero-based column.
    pub col: isize,
}

impl GridKey {
    /// The invalid cell `(-1, -1)`.
    pub const INVALID: GridKey = GridKey { row: -1, col: -1 };

    /// Creates a key for `(row, col)`.
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// Returns the cell shifted by `(d_row, d_col)`; the result may lie off-grid.
    pub const fn offset(self, d_row: isize, d_col: isize) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

impl From<(isize, isize)> for GridKey {
    fn from((row, col): (isize, isize)) -> Self {
        Self { row, col }
    }
}

const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

/// The cells of an `height x width` rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridDomain {
    height: usize,
    width: usize,
    len: usize,
}

impl GridDomain {
    /// Creates a grid domain of `height` rows and `width` columns.
    ///
    /// # Panics
    /// Panics if `height * width` overflows `usize`.
    pub fn new(height: usize, width: usize) -> Self {
        let len = height
            .checked_mul(width)
            .unwrap_or_else(|| panic!("grid of {height}x{width} cells overflows usize"));
        Self { height, width, len }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns `true` if `key` lies inside the rectangle.
    #[inline]
    pub fn contains(&self, key: GridKey) -> bool {
        key.row >= 0
            && key.col >= 0
            && (key.row as usize) < self.height
            && (key.col as usize) < self.width
    }

    /// The up/right/down/left neighbors of `key` that lie inside the grid.
    pub fn orthogonal_neighbors(&self, key: GridKey) -> impl Iterator<Item = GridKey> + '_ {
        ORTHOGONAL
            .iter()
            .map(move |&(dr, dc)| key.offset(dr, dc))
            .filter(move |next| self.contains(*next))
    }
}

impl VertexDomain for GridDomain {
    type Key = GridKey;

    #[inline(always)]
    fn len(&self) -> usize {
        self.len
    }

    fn invalid(&self) -> GridKey {
        GridKey::INVALID
    }

    #[inline(always)]
    fn index_of(&self, key: &GridKey) -> usize {
        debug_assert!(self.contains(*key), "cell {key:?} outside {}x{}", self.height, self.width);
        key.row as usize * self.width + key.col as usize
    }

    fn key_of(&self, index: usize) -> Option<GridKey> {
        if index >= self.len() {
            return None;
        }
        Some(GridKey::new(
            (index / self.width) as isize,
            (index % self.width) as isize,
        ))
    }
}
