//! Move representation and move history.
//!
//! A move is either a stone placement at a [`Position`] or a pass. Each
//! committed transition is recorded as a [`MoveRecord`] so a game can be
//! replayed from its initial state.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::position::Position;

/// A player's move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Place a stone of the side to move.
    Place(Position),
    /// Give up the turn.
    Pass,
}

impl Move {
    /// Create a placement move.
    #[must_use]
    pub const fn place(row: u8, col: u8) -> Self {
        Move::Place(Position::new(row, col))
    }

    /// The placement position, if any.
    #[must_use]
    pub const fn position(self) -> Option<Position> {
        match self {
            Move::Place(pos) => Some(pos),
            Move::Pass => None,
        }
    }

    /// Check if this move is a pass.
    #[must_use]
    pub const fn is_pass(self) -> bool {
        matches!(self, Move::Pass)
    }
}

/// A committed move with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The color that moved.
    pub color: Color,

    /// The move played.
    pub mv: Move,

    /// `move_index` of the state the move was applied to.
    pub index: u32,

    /// Opponent stones removed by this move.
    pub captured: Vec<Position>,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(color: Color, mv: Move, index: u32, captured: Vec<Position>) -> Self {
        Self {
            color,
            mv,
            index,
            captured,
        }
    }
}
