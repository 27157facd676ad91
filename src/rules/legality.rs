//! Move legality: occupancy, suicide and repetition.
//!
//! Checks run in order against a scratch copy of the board:
//! 1. the target must be on the board and empty
//! 2. after removing captured opponent stones, the placed stone's group
//!    must have a liberty
//! 3. the resulting board must not repeat a forbidden earlier board
//!    (see [`KoRule`])
//!
//! A successful check yields the simulated [`Placement`], which
//! `GameState::play` commits without recomputing it.

use tracing::debug;

use super::capture::{has_liberty, resolve_captures};
use crate::core::{GameState, Grid, IllegalMove, KoRule, Position};

/// The outcome of simulating a legal placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Where the stone goes.
    pub position: Position,

    /// The board after the stone is placed and captures are removed.
    pub grid: Grid,

    /// Opponent stones removed by the placement, row-major.
    pub captured: Vec<Position>,
}

/// Run every legality rule for the side to move placing at `position`.
///
/// Does not consider whether the game is over; see [`is_legal`].
pub fn check_move(state: &GameState, position: Position) -> Result<Placement, IllegalMove> {
    let size = state.config().board_size;
    if !position.in_bounds(size) {
        return Err(IllegalMove::OutOfBounds(position));
    }
    if !state.empty_positions().contains(&position) {
        return Err(IllegalMove::Occupied(position));
    }

    let mover = state.turn();
    let placed = state.grid().with(position, mover);
    let (grid, captured) = resolve_captures(&placed, mover);

    if !has_liberty(&grid, position) {
        debug!(%position, %mover, "rejected suicide");
        return Err(IllegalMove::Suicide(position));
    }

    if state.last_board(mover) == Some(&grid) {
        debug!(%position, %mover, "rejected ko");
        return Err(IllegalMove::Ko(position));
    }

    if state.config().ko_rule == KoRule::PositionalSuperko
        && state.board_history().iter().any(|seen| *seen == grid)
    {
        debug!(%position, %mover, "rejected superko");
        return Err(IllegalMove::Superko(position));
    }

    Ok(Placement {
        position,
        grid,
        captured,
    })
}

/// Check whether the side to move may place at `position`.
///
/// Always false once the game has been finalized.
#[must_use]
pub fn is_legal(state: &GameState, position: Position) -> bool {
    !state.is_terminal() && check_move(state, position).is_ok()
}

/// Every legal placement for the side to move, in row-major order.
///
/// Only currently empty positions are candidates. Passing is always
/// available and is not listed.
#[must_use]
pub fn legal_moves(state: &GameState) -> Vec<Position> {
    if state.is_terminal() {
        return Vec::new();
    }
    state
        .empty_positions()
        .iter()
        .copied()
        .filter(|&pos| check_move(state, pos).is_ok())
        .collect()
}
