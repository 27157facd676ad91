//! Engine error types.
//!
//! Illegal moves are ordinary, recoverable outcomes: the caller keeps its
//! current state and may try again. `GameOver` signals a sequencing bug in
//! the caller (a transition requested on a finished game).

use thiserror::Error;

use super::position::Position;

/// Why a placement was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// The position is off the board.
    #[error("position {0} is off the board")]
    OutOfBounds(Position),

    /// The position already holds a stone.
    #[error("position {0} is occupied")]
    Occupied(Position),

    /// The placed stone's group would have no liberties.
    #[error("placing at {0} would be suicide")]
    Suicide(Position),

    /// The resulting board equals the mover's own previous board.
    #[error("placing at {0} repeats the mover's previous board (ko)")]
    Ko(Position),

    /// The resulting board equals a board seen earlier in the game.
    #[error("placing at {0} repeats an earlier board (superko)")]
    Superko(Position),
}

impl IllegalMove {
    /// The rejected position.
    #[must_use]
    pub fn position(&self) -> Position {
        match *self {
            IllegalMove::OutOfBounds(p)
            | IllegalMove::Occupied(p)
            | IllegalMove::Suicide(p)
            | IllegalMove::Ko(p)
            | IllegalMove::Superko(p) => p,
        }
    }
}

/// Errors returned by state transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The move violates a rule; the state is unchanged.
    #[error("illegal move: {0}")]
    Illegal(#[from] IllegalMove),

    /// A transition was requested on a finished game.
    #[error("game is already over")]
    GameOver,

    /// A snapshot could not be encoded or decoded.
    #[error("snapshot error: {0}")]
    Snapshot(String),
}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        EngineError::Snapshot(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = IllegalMove::Suicide(Position::new(1, 2));
        assert_eq!(err.to_string(), "placing at (1, 2) would be suicide");
        assert_eq!(err.position(), Position::new(1, 2));

        let engine: EngineError = err.into();
        assert_eq!(engine.to_string(), "illegal move: placing at (1, 2) would be suicide");
        assert_eq!(EngineError::GameOver.to_string(), "game is already over");
    }
}
