//! Core engine types: colors, positions, grid, moves, configuration, state.
//!
//! These are the values every other module passes around. Everything here
//! is plain data with value semantics; rule logic lives in `rules`.

pub mod action;
pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod position;
pub mod rng;
pub mod state;

pub use action::{Move, MoveRecord};
pub use color::{Color, ColorMap};
pub use config::{GameConfig, KoRule, DEFAULT_KOMI, DEFAULT_MOVE_LIMIT_FACTOR};
pub use error::{EngineError, IllegalMove};
pub use grid::{Grid, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use position::{Neighbors, Position};
pub use rng::{GameRng, GameRngState};
pub use state::GameState;
