//! # rust-go
//!
//! A deterministic Go rules engine: legality, captures, ko and area scoring,
//! plus the relay plumbing that sequences two agents through a game.
//!
//! ## Design Principles
//!
//! 1. **Value Semantics**: A `GameState` is never mutated. `play`,
//!    `pass_turn` and `finalize` return a new snapshot and leave the old
//!    one valid.
//!
//! 2. **Cheap Snapshots**: Board cells, empty-point sets and histories are
//!    `im` persistent structures, so keeping every state of a game costs
//!    little more than keeping the last one.
//!
//! 3. **Errors Are Values**: Illegal moves come back as `IllegalMove`; the
//!    caller keeps its state and decides what to do.
//!
//! ## Modules
//!
//! - `core`: Colors, positions, grid, moves, configuration, state, RNG
//! - `rules`: Capture resolution, legality checks, territory and scoring
//! - `protocol`: Text messages exchanged with remote agents
//! - `controller`: Turn sequencing, illegal-move policy, agents
//! - `nn`: Board planes and action indexing for policy networks
//! - `python`: PyO3 bindings (feature `python`)
//!
//! ## Example
//!
//! ```
//! use rust_go::{finalize, initial_state, pass_turn, play, Color, GameResult, Position};
//!
//! let state = initial_state(5);
//! let state = play(&state, Position::new(2, 2)).unwrap();
//! let state = pass_turn(&state).unwrap();
//! let state = pass_turn(&state).unwrap();
//!
//! let (result, scores) = finalize(&state);
//! assert_eq!(scores[Color::Black], 25.0);
//! assert_eq!(scores[Color::White], 6.5);
//! assert_eq!(result, GameResult::Winner(Color::Black));
//! ```

pub mod controller;
pub mod core;
pub mod nn;
pub mod protocol;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Color, ColorMap, EngineError, GameConfig, GameRng, GameState, Grid, IllegalMove, KoRule,
    Move, MoveRecord, Position,
};

pub use crate::rules::{
    finalize, initial_state, is_finished, is_legal, legal_moves, pass_turn, play, FinalScore,
    GameResult,
};

pub use crate::protocol::{Command, EndOfGame, Greeting, Message, ProtocolError};

pub use crate::controller::{
    Agent, ControllerConfig, Dispatch, FirstLegalAgent, GameController, PolicyAgent, RandomAgent,
    SharedGame, Verdict,
};

pub use crate::nn::{EncodedState, GoEncoder, StateEncoder};
