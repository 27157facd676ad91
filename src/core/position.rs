//! Board coordinates.
//!
//! A `Position` is an abstract `(row, col)` pair. Bounds are only meaningful
//! relative to a board size, so every bounds-aware helper takes `size`.
//!
//! ## Usage
//!
//! ```
//! use rust_go::core::Position;
//!
//! let corner = Position::new(0, 0);
//! assert_eq!(corner.neighbors(5).len(), 2);
//!
//! let center = Position::new(2, 2);
//! assert_eq!(center.neighbors(5).len(), 4);
//! assert_eq!(center.to_index(5), 12);
//! assert_eq!(Position::from_index(12, 5), center);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Up to four orthogonal neighbors, stored inline.
pub type Neighbors = SmallVec<[Position; 4]>;

/// An intersection on the board, `0 <= row, col < size`.
///
/// Ordered row-major, so sorted collections of positions iterate the board
/// top-left to bottom-right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Check whether this position lies on a `size`×`size` board.
    #[must_use]
    pub const fn in_bounds(self, size: u8) -> bool {
        self.row < size && self.col < size
    }

    /// Row-major index into a `size`×`size` cell array.
    #[must_use]
    pub const fn to_index(self, size: u8) -> usize {
        self.row as usize * size as usize + self.col as usize
    }

    /// Inverse of [`Position::to_index`].
    #[must_use]
    pub const fn from_index(index: usize, size: u8) -> Self {
        let size = size as usize;
        Self {
            row: (index / size) as u8,
            col: (index % size) as u8,
        }
    }

    /// Orthogonal neighbors that lie on the board, in north, east, south,
    /// west order.
    #[must_use]
    pub fn neighbors(self, size: u8) -> Neighbors {
        let mut out = Neighbors::new();
        if self.row > 0 {
            out.push(Position::new(self.row - 1, self.col));
        }
        if self.col + 1 < size {
            out.push(Position::new(self.row, self.col + 1));
        }
        if self.row + 1 < size {
            out.push(Position::new(self.row + 1, self.col));
        }
        if self.col > 0 {
            out.push(Position::new(self.row, self.col - 1));
        }
        out
    }

    /// Iterate every position of a `size`×`size` board in row-major order.
    pub fn all(size: u8) -> impl Iterator<Item = Position> {
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }
}

impl From<(u8, u8)> for Position {
    fn from((row, col): (u8, u8)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
