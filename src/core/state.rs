//! Immutable game snapshots.
//!
//! ## GameState
//!
//! A snapshot holds:
//! - The grid and whose turn it is
//! - Move index and pass streak
//! - Each color's last posted board (for the ko check)
//! - The set of empty positions, always equal to the grid's empty cells
//! - Capture counters, move history and every board seen so far
//! - The final score once the game has been finalized
//!
//! Transitions (`play`, `pass_turn`, `finalize`) take `&self` and return a new
//! snapshot. The previous snapshot stays valid, so callers can keep any
//! number of them for history inspection or search. All collections are
//! `im` persistent structures, so a transition shares most of its memory
//! with its parent.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::action::{Move, MoveRecord};
use super::color::{Color, ColorMap};
use super::config::GameConfig;
use super::error::EngineError;
use super::grid::Grid;
use super::position::Position;
use crate::rules::engine::FinalScore;
use crate::rules::legality::{self, Placement};
use crate::rules::territory;

/// Complete, immutable state of one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GameStateRepr")]
pub struct GameState {
    config: GameConfig,

    grid: Grid,

    /// Side to move (never `Empty`).
    turn: Color,

    /// Number of moves and passes played.
    move_index: u32,

    /// Consecutive passes, capped at 2.
    pass_streak: u8,

    /// Board each color produced with its most recent move or pass.
    last_boards: ColorMap<Option<Grid>>,

    empty_positions: OrdSet<Position>,

    /// Opponent stones captured by each color.
    captures: ColorMap<u32>,

    /// Every board seen so far, starting with the empty board.
    board_history: Vector<Grid>,

    history: Vector<MoveRecord>,

    /// Filled in by `finalize`; its presence marks the state terminal.
    final_score: Option<FinalScore>,
}

/// Unchecked wire form of a [`GameState`].
#[derive(Deserialize)]
struct GameStateRepr {
    config: GameConfig,
    grid: Grid,
    turn: Color,
    move_index: u32,
    pass_streak: u8,
    last_boards: ColorMap<Option<Grid>>,
    empty_positions: OrdSet<Position>,
    captures: ColorMap<u32>,
    board_history: Vector<Grid>,
    history: Vector<MoveRecord>,
    final_score: Option<FinalScore>,
}

impl TryFrom<GameStateRepr> for GameState {
    type Error = EngineError;

    fn try_from(repr: GameStateRepr) -> Result<Self, Self::Error> {
        let state = Self {
            config: repr.config,
            grid: repr.grid,
            turn: repr.turn,
            move_index: repr.move_index,
            pass_streak: repr.pass_streak,
            last_boards: repr.last_boards,
            empty_positions: repr.empty_positions,
            captures: repr.captures,
            board_history: repr.board_history,
            history: repr.history,
            final_score: repr.final_score,
        };
        state.validate()?;
        Ok(state)
    }
}

impl GameState {
    /// Create the initial state: empty board, Black to move, move index 0.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let grid = Grid::new(config.board_size);
        let empty_positions = Position::all(config.board_size).collect();

        Self {
            config,
            board_history: Vector::unit(grid.clone()),
            grid,
            turn: Color::Black,
            move_index: 0,
            pass_streak: 0,
            last_boards: ColorMap::with_value(None),
            empty_positions,
            captures: ColorMap::with_value(0),
            history: Vector::new(),
            final_score: None,
        }
    }

    /// Replay a move sequence from the initial state.
    ///
    /// Stops at the first illegal move and returns its error.
    pub fn replay(config: GameConfig, moves: &[Move]) -> Result<Self, EngineError> {
        moves
            .iter()
            .try_fold(Self::new(config), |state, &mv| state.apply(mv))
    }

    // === Accessors ===

    /// Game configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Side to move.
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Number of moves and passes played so far.
    #[must_use]
    pub fn move_index(&self) -> u32 {
        self.move_index
    }

    /// Consecutive passes (0, 1 or 2).
    #[must_use]
    pub fn pass_streak(&self) -> u8 {
        self.pass_streak
    }

    /// The board `color` produced on its most recent turn, if it has moved.
    #[must_use]
    pub fn last_board(&self, color: Color) -> Option<&Grid> {
        self.last_boards[color].as_ref()
    }

    /// Empty intersections, in row-major order.
    #[must_use]
    pub fn empty_positions(&self) -> &OrdSet<Position> {
        &self.empty_positions
    }

    /// Opponent stones captured so far by `color`.
    #[must_use]
    pub fn captures(&self, color: Color) -> u32 {
        self.captures[color]
    }

    /// Every board seen so far, oldest first.
    #[must_use]
    pub fn board_history(&self) -> &Vector<Grid> {
        &self.board_history
    }

    /// Moves played so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Final score, present only on a finalized state.
    #[must_use]
    pub fn final_score(&self) -> Option<&FinalScore> {
        self.final_score.as_ref()
    }

    /// Check if the state has been finalized.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.final_score.is_some()
    }

    // === Rules ===

    /// Every legal placement for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Position> {
        legality::legal_moves(self)
    }

    /// Check whether the side to move may place at `position`.
    #[must_use]
    pub fn is_legal(&self, position: Position) -> bool {
        legality::is_legal(self, position)
    }

    /// Check whether the game has ended: two passes in a row, or the move cap
    /// reached.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.pass_streak >= 2 || self.move_index >= self.config.move_limit()
    }

    // === Transitions ===

    /// Place a stone for the side to move and resolve captures.
    ///
    /// The placement is validated first; an illegal move returns
    /// `EngineError::Illegal` and no new state.
    pub fn play(&self, position: Position) -> Result<Self, EngineError> {
        self.ensure_live()?;
        let placement = legality::check_move(self, position)?;
        Ok(self.commit(placement))
    }

    /// Pass the turn.
    ///
    /// Records the unchanged board as the passer's last board.
    pub fn pass_turn(&self) -> Result<Self, EngineError> {
        self.ensure_live()?;

        let mover = self.turn;
        let mut next = self.clone();
        next.last_boards[mover] = Some(self.grid.clone());
        next.pass_streak = (self.pass_streak + 1).min(2);
        next.history
            .push_back(MoveRecord::new(mover, Move::Pass, self.move_index, Vec::new()));
        next.move_index += 1;
        next.turn = mover.opponent();

        debug!(%mover, pass_streak = next.pass_streak, "pass");
        Ok(next)
    }

    /// Apply either kind of move.
    pub fn apply(&self, mv: Move) -> Result<Self, EngineError> {
        match mv {
            Move::Place(position) => self.play(position),
            Move::Pass => self.pass_turn(),
        }
    }

    /// Score the current board without ending the game.
    #[must_use]
    pub fn score(&self) -> FinalScore {
        territory::score(&self.grid, &self.config, &self.captures)
    }

    /// Produce the terminal snapshot carrying the final score.
    ///
    /// Finalizing an already terminal state returns an identical copy.
    #[must_use]
    pub fn finalize(&self) -> Self {
        if self.is_terminal() {
            return self.clone();
        }
        let mut next = self.clone();
        next.final_score = Some(self.score());
        next
    }

    /// Check the invariants a decoded snapshot must satisfy before any rule
    /// runs on it.
    fn validate(&self) -> Result<(), EngineError> {
        let size = self.grid.size();
        let broken = |what: String| Err(EngineError::Snapshot(what));

        if self.config.board_size != size {
            return broken(format!(
                "config board size {} but grid is {size}x{size}",
                self.config.board_size
            ));
        }
        if !self.turn.is_stone() {
            return broken("side to move is not a stone color".to_string());
        }
        if self.pass_streak > 2 {
            return broken(format!("pass streak {} exceeds 2", self.pass_streak));
        }
        let empties: OrdSet<Position> = self.grid.positions_of(Color::Empty).collect();
        if empties != self.empty_positions {
            return broken("empty positions disagree with the grid".to_string());
        }
        if self.board_history.is_empty() {
            return broken("board history is empty".to_string());
        }
        let boards = self
            .last_boards
            .iter()
            .filter_map(|(_, board)| board.as_ref())
            .chain(self.board_history.iter());
        for board in boards {
            if board.size() != size {
                return broken(format!(
                    "{0}x{0} board in a {size}x{size} game",
                    board.size()
                ));
            }
        }
        Ok(())
    }

    fn ensure_live(&self) -> Result<(), EngineError> {
        if self.is_terminal() {
            return Err(EngineError::GameOver);
        }
        Ok(())
    }

    fn commit(&self, placement: Placement) -> Self {
        let Placement {
            position,
            grid,
            captured,
        } = placement;
        let mover = self.turn;

        let mut next = self.clone();
        next.empty_positions.remove(&position);
        for &pos in &captured {
            next.empty_positions.insert(pos);
        }
        next.captures[mover] += captured.len() as u32;
        next.last_boards[mover] = Some(grid.clone());
        next.board_history.push_back(grid.clone());
        next.history.push_back(MoveRecord::new(
            mover,
            Move::Place(position),
            self.move_index,
            captured,
        ));
        next.grid = grid;
        next.pass_streak = 0;
        next.move_index += 1;
        next.turn = mover.opponent();
        next
    }

    // === Snapshots ===

    /// Encode the snapshot with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot produced by [`GameState::to_bytes`].
    ///
    /// Snapshots whose fields contradict each other are rejected with
    /// `EngineError::Snapshot`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
