//! Go rules: captures, legality and scoring.
//!
//! - `capture`: group/liberty analysis and removal of dead opponent groups
//! - `legality`: occupancy, suicide and ko checks on a scratch board
//! - `territory`: region partitioning and area scoring
//! - `engine`: results and the function-style interface used by the relay
//!
//! Every function here is pure: inputs are read, new values are returned.

pub mod capture;
pub mod engine;
pub mod legality;
pub mod territory;

pub use capture::{group_at, has_liberty, resolve_captures, Group};
pub use engine::{
    finalize, initial_state, is_finished, is_legal, legal_moves, pass_turn, play, FinalScore,
    GameResult,
};
pub use legality::{check_move, Placement};
pub use territory::{ownership, regions, score, territory, Region};
