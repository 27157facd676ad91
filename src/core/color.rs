//! Intersection colors and per-player data storage.
//!
//! ## Color
//!
//! Tri-state intersection value: `Empty`, `Black` or `White`. Black and White
//! are the two players; `Empty` is only ever a cell value, never a turn.
//!
//! ## ColorMap
//!
//! Fixed two-slot storage indexed by player color, used for scores,
//! capture counters and the per-color last board.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// State of a single intersection, or a player identity.
///
/// The numeric encoding (`Black = 1`, `White = -1`, `Empty = 0`) is the
/// negation-style mapping used by board encoders; the semantic type is the
/// three-state enumeration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    /// No stone.
    #[default]
    Empty,
    /// Black player (moves first).
    Black,
    /// White player.
    White,
}

impl Color {
    /// Both player colors, Black first.
    pub const PLAYERS: [Color; 2] = [Color::Black, Color::White];

    /// The opposing color. `Empty` maps to itself.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
            Color::Empty => Color::Empty,
        }
    }

    /// True for `Black` and `White`.
    #[must_use]
    pub const fn is_stone(self) -> bool {
        !matches!(self, Color::Empty)
    }

    /// Negation-style encoding: Black = 1, White = -1, Empty = 0.
    #[must_use]
    pub const fn value(self) -> i8 {
        match self {
            Color::Black => 1,
            Color::White => -1,
            Color::Empty => 0,
        }
    }

    /// Inverse of [`Color::value`].
    #[must_use]
    pub const fn from_value(value: i8) -> Option<Self> {
        match value {
            1 => Some(Color::Black),
            -1 => Some(Color::White),
            0 => Some(Color::Empty),
            _ => None,
        }
    }

    /// Single-character rendering used by the grid `Display` impl.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Color::Black => 'X',
            Color::White => 'O',
            Color::Empty => '.',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Black => "Black",
            Color::White => "White",
            Color::Empty => "Empty",
        };
        f.write_str(name)
    }
}

/// Per-player data storage with O(1) access.
///
/// Holds exactly one value for Black and one for White. Indexing with
/// `Color::Empty` is a programming error and panics.
///
/// ## Example
///
/// ```
/// use rust_go::core::{Color, ColorMap};
///
/// let mut captures: ColorMap<u32> = ColorMap::with_value(0);
/// captures[Color::White] += 2;
///
/// assert_eq!(captures[Color::Black], 0);
/// assert_eq!(captures[Color::White], 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    black: T,
    white: T,
}

impl<T> ColorMap<T> {
    /// Create a new ColorMap with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            black: factory(Color::Black),
            white: factory(Color::White),
        }
    }

    /// Create a new ColorMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            black: value.clone(),
            white: value,
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, color: Color) -> &T {
        match color {
            Color::Black => &self.black,
            Color::White => &self.white,
            Color::Empty => panic!("ColorMap has no entry for Empty"),
        }
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, color: Color) -> &mut T {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
            Color::Empty => panic!("ColorMap has no entry for Empty"),
        }
    }

    /// Iterate over (Color, &T) pairs, Black first.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        [(Color::Black, &self.black), (Color::White, &self.white)].into_iter()
    }

    /// Apply `f` to both entries.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> ColorMap<U> {
        ColorMap {
            black: f(&self.black),
            white: f(&self.white),
        }
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        self.get(color)
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        self.get_mut(color)
    }
}
