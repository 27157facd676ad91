//! The board lattice.
//!
//! A `Grid` is an n×n mapping from [`Position`] to [`Color`]. Its size is
//! fixed at construction. Cells live in an `im::Vector`, so cloning a grid is
//! O(1) and a modified copy shares structure with its parent. Grids are used
//! as values: transitions build a new grid and never touch another
//! grid's cells.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::position::Position;

/// Smallest supported board.
pub const MIN_BOARD_SIZE: u8 = 2;

/// Largest supported board.
pub const MAX_BOARD_SIZE: u8 = 25;

/// Fixed-size square board of intersections.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GridRepr")]
pub struct Grid {
    size: u8,
    cells: Vector<Color>,
}

/// Unchecked wire form of a [`Grid`].
#[derive(Deserialize)]
struct GridRepr {
    size: u8,
    cells: Vector<Color>,
}

impl TryFrom<GridRepr> for Grid {
    type Error = String;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        let GridRepr { size, cells } = repr;
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(format!(
                "board size {size} outside {MIN_BOARD_SIZE}-{MAX_BOARD_SIZE}"
            ));
        }
        let area = size as usize * size as usize;
        if cells.len() != area {
            return Err(format!(
                "{}x{} grid needs {area} cells, got {}",
                size,
                size,
                cells.len()
            ));
        }
        Ok(Self { size, cells })
    }
}

impl Grid {
    /// Create an empty `size`×`size` grid.
    #[must_use]
    pub fn new(size: u8) -> Self {
        assert!(
            (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size),
            "Board size must be {}-{}",
            MIN_BOARD_SIZE,
            MAX_BOARD_SIZE
        );

        let cells = std::iter::repeat(Color::Empty)
            .take(size as usize * size as usize)
            .collect();
        Self { size, cells }
    }

    /// Build a grid from rows of [`Color::symbol`] characters
    /// (`X` black, `O` white, `.` empty). Whitespace inside rows is ignored.
    ///
    /// Returns `None` if the rows are not square or contain other characters.
    ///
    /// ```
    /// use rust_go::core::{Color, Grid, Position};
    ///
    /// let grid = Grid::from_rows(&[
    ///     ". X .",
    ///     "X O X",
    ///     ". X .",
    /// ]).unwrap();
    /// assert_eq!(grid.get(Position::new(1, 1)), Color::White);
    /// ```
    #[must_use]
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let size = u8::try_from(rows.len()).ok()?;
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return None;
        }

        let mut grid = Grid::new(size);
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != size as usize {
                return None;
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                let color = match symbol {
                    'X' => Color::Black,
                    'O' => Color::White,
                    '.' => Color::Empty,
                    _ => return None,
                };
                grid.set(Position::new(row as u8, col as u8), color);
            }
        }
        Some(grid)
    }

    /// Side length of the board.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Number of intersections.
    #[must_use]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Get the color at a position.
    ///
    /// Panics if `pos` is off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Color {
        assert!(pos.in_bounds(self.size), "Position {} is off a {}x{} board", pos, self.size, self.size);
        self.cells[pos.to_index(self.size)]
    }

    /// Set the color at a position on this (owned) grid.
    pub fn set(&mut self, pos: Position, color: Color) {
        assert!(pos.in_bounds(self.size), "Position {} is off a {}x{} board", pos, self.size, self.size);
        self.cells.set(pos.to_index(self.size), color);
    }

    /// Return a copy with `pos` set to `color`.
    #[must_use]
    pub fn with(&self, pos: Position, color: Color) -> Self {
        let mut next = self.clone();
        next.set(pos, color);
        next
    }

    /// Count intersections holding `color`.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }

    /// Iterate `(Position, Color)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Color)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (Position::from_index(i, size), c))
    }

    /// Positions currently holding `color`, row-major.
    pub fn positions_of(&self, color: Color) -> impl Iterator<Item = Position> + '_ {
        self.iter().filter(move |&(_, c)| c == color).map(|(p, _)| p)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", self.get(Position::new(row, col)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
