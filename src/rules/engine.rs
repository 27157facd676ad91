//! Game results and the engine's function-style interface.
//!
//! The relay layer drives a game through a handful of pure functions:
//! - `initial_state`, `legal_moves`, `is_legal`
//! - `play`, `pass_turn` (each returns a new state)
//! - `is_finished`, `finalize`
//!
//! They are thin wrappers over the `GameState` methods of the same names.

use serde::{Deserialize, Serialize};

use crate::core::{Color, ColorMap, EngineError, GameConfig, GameState, Position};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Color),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Check if a color won.
    #[must_use]
    pub fn is_winner(&self, color: Color) -> bool {
        matches!(self, GameResult::Winner(c) if *c == color)
    }

    /// The winning color, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::Winner(c) => Some(*c),
            GameResult::Draw => None,
        }
    }
}

/// Final score breakdown of a finished game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinalScore {
    /// Winner or draw.
    pub result: GameResult,

    /// Total score per color: stones + territory + komi.
    pub scores: ColorMap<f32>,

    /// Stones on the board per color.
    pub stones: ColorMap<u32>,

    /// Owned empty intersections per color.
    pub territory: ColorMap<u32>,

    /// Opponent stones each color captured during play (informational).
    pub captures: ColorMap<u32>,
}

/// New game on an `n`×`n` board with default rules, Black to move.
#[must_use]
pub fn initial_state(n: u8) -> GameState {
    GameState::new(GameConfig::new(n))
}

/// Every legal placement for the side to move.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Position> {
    state.legal_moves()
}

/// Check whether the side to move may place at `position`.
#[must_use]
pub fn is_legal(state: &GameState, position: Position) -> bool {
    state.is_legal(position)
}

/// Place a stone for the side to move.
pub fn play(state: &GameState, position: Position) -> Result<GameState, EngineError> {
    state.play(position)
}

/// Pass for the side to move.
pub fn pass_turn(state: &GameState) -> Result<GameState, EngineError> {
    state.pass_turn()
}

/// Check whether the game has reached a termination condition.
#[must_use]
pub fn is_finished(state: &GameState) -> bool {
    state.is_finished()
}

/// Score the position, returning the winner and both scores.
#[must_use]
pub fn finalize(state: &GameState) -> (GameResult, ColorMap<f32>) {
    let report = state.score();
    (report.result, report.scores)
}
