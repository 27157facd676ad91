//! Turn sequencing between two agents.
//!
//! The controller owns the one authoritative `GameState` of a game. Each
//! submission is checked and committed against that state; the reference is
//! replaced only once a transition has returned, and the game is finalized as
//! soon as it is finished.
//!
//! Repeated illegal attempts are a controller policy: after
//! `ControllerConfig::max_illegal_attempts` consecutive rejects the side to
//! move loses its turn and a pass is played on its behalf.

pub mod agent;
pub mod shared;

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::core::{Color, EngineError, GameConfig, GameState, IllegalMove, Move};
use crate::protocol::{Command, EndOfGame, Greeting, Message};
use crate::rules::FinalScore;

pub use agent::{Agent, FirstLegalAgent, PolicyAgent, RandomAgent};
pub use shared::SharedGame;

/// Default number of consecutive rejects before a turn is forfeited.
pub const DEFAULT_MAX_ILLEGAL_ATTEMPTS: u32 = 3;

/// Controller policy settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Consecutive rejected submissions after which the mover passes.
    pub max_illegal_attempts: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            max_illegal_attempts: DEFAULT_MAX_ILLEGAL_ATTEMPTS,
        }
    }
}

impl ControllerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reject limit.
    ///
    /// # Panics
    ///
    /// Panics if `attempts` is zero.
    #[must_use]
    pub fn with_max_illegal_attempts(mut self, attempts: u32) -> Self {
        assert!(attempts > 0, "Illegal attempt limit must be positive");
        self.max_illegal_attempts = attempts;
        self
    }
}

/// What happened to one submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The move was committed.
    Accepted(Move),

    /// The move was refused; the same side is still to move.
    ///
    /// `reason` is `None` when the input could not be parsed at all.
    Rejected {
        attempts: u32,
        reason: Option<IllegalMove>,
    },

    /// The reject limit was reached and a pass was committed for the mover.
    Forfeited,
}

/// Messages produced by one incoming line.
#[derive(Clone, Debug, PartialEq)]
pub struct Dispatch {
    /// Color of the agent that sent the line.
    pub mover: Color,
    pub verdict: Verdict,
    /// Messages for the sender, in order.
    pub to_mover: Vec<Message>,
    /// Messages for the other agent, in order.
    pub to_opponent: Vec<Message>,
}

impl Dispatch {
    fn new(mover: Color, verdict: Verdict) -> Self {
        let mut to_mover = Vec::with_capacity(3);
        let mut to_opponent = Vec::with_capacity(2);
        match verdict {
            Verdict::Accepted(mv) => {
                to_mover.push(Message::Valid);
                to_opponent.push(Message::Relay(Command::from(mv)));
            }
            Verdict::Rejected { .. } => to_mover.push(Message::Invalid),
            Verdict::Forfeited => {
                to_mover.push(Message::Invalid);
                to_mover.push(Message::TurnLoss);
                to_opponent.push(Message::Relay(Command::Pass));
            }
        }
        Self {
            mover,
            verdict,
            to_mover,
            to_opponent,
        }
    }

    fn broadcast(&mut self, message: Message) {
        self.to_mover.push(message);
        self.to_opponent.push(message);
    }

    /// Messages addressed to `color`.
    #[must_use]
    pub fn messages_for(&self, color: Color) -> &[Message] {
        if color == self.mover {
            &self.to_mover
        } else {
            &self.to_opponent
        }
    }

    /// The `END` payload, if this line ended the game.
    #[must_use]
    pub fn end(&self) -> Option<EndOfGame> {
        self.to_mover.iter().find_map(|message| match message {
            Message::End(end) => Some(*end),
            _ => None,
        })
    }
}

/// Sequences turns for a single game.
#[derive(Clone, Debug)]
pub struct GameController {
    state: Arc<GameState>,
    config: ControllerConfig,
    illegal_attempts: u32,
}

impl GameController {
    /// Start a new game.
    #[must_use]
    pub fn new(game: GameConfig, config: ControllerConfig) -> Self {
        Self::from_state(GameState::new(game), config)
    }

    /// Resume from an existing state. A finished state is finalized at once.
    #[must_use]
    pub fn from_state(state: GameState, config: ControllerConfig) -> Self {
        let state = if state.is_finished() {
            state.finalize()
        } else {
            state
        };
        Self {
            state: Arc::new(state),
            config,
            illegal_attempts: 0,
        }
    }

    /// The current committed state.
    #[must_use]
    pub fn state(&self) -> &Arc<GameState> {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Side to move.
    #[must_use]
    pub fn turn(&self) -> Color {
        self.state.turn()
    }

    /// Consecutive rejects of the side to move.
    #[must_use]
    pub fn illegal_attempts(&self) -> u32 {
        self.illegal_attempts
    }

    /// Whether the game has been finalized.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    #[must_use]
    pub fn final_score(&self) -> Option<&FinalScore> {
        self.state.final_score()
    }

    /// Greetings for the two agents, Black first.
    #[must_use]
    pub fn greetings(&self) -> [Greeting; 2] {
        Greeting::pair(self.state.config())
    }

    /// Submit a move for the side to move.
    ///
    /// Illegal moves are counted and reported as `Rejected` (or `Forfeited`
    /// once the limit is hit). Submitting after the game is over returns
    /// `EngineError::GameOver`.
    pub fn submit(&mut self, mv: Move) -> Result<Verdict, EngineError> {
        match self.state.apply(mv) {
            Ok(next) => {
                self.commit(next);
                Ok(Verdict::Accepted(mv))
            }
            Err(EngineError::Illegal(reason)) => {
                debug!(%reason, "rejected move");
                self.reject(Some(reason))
            }
            Err(err) => Err(err),
        }
    }

    /// Parse and submit one line from the side to move.
    ///
    /// Lines that do not parse are treated like illegal moves.
    #[instrument(skip(self), fields(turn = %self.state.turn()))]
    pub fn handle_line(&mut self, line: &str) -> Result<Dispatch, EngineError> {
        let mover = self.state.turn();
        let verdict = match line.parse::<Command>() {
            Ok(command) => self.submit(command.into())?,
            Err(err) => {
                if self.is_over() {
                    return Err(EngineError::GameOver);
                }
                debug!(%err, "malformed command");
                self.reject(None)?
            }
        };

        let mut dispatch = Dispatch::new(mover, verdict);
        if let Some(score) = self.state.final_score() {
            dispatch.broadcast(Message::End(EndOfGame::from_score(score)));
        }
        Ok(dispatch)
    }

    /// Play a whole game between two agents and return its score.
    pub fn run<B, W>(&mut self, black: &mut B, white: &mut W) -> Result<FinalScore, EngineError>
    where
        B: Agent + ?Sized,
        W: Agent + ?Sized,
    {
        while !self.is_over() {
            let mv = match self.state.turn() {
                Color::White => white.select(&self.state),
                _ => black.select(&self.state),
            };
            self.submit(mv)?;
        }
        Ok(self
            .state
            .final_score()
            .cloned()
            .unwrap_or_else(|| self.state.score()))
    }

    fn reject(&mut self, reason: Option<IllegalMove>) -> Result<Verdict, EngineError> {
        self.illegal_attempts += 1;
        if self.illegal_attempts < self.config.max_illegal_attempts {
            return Ok(Verdict::Rejected {
                attempts: self.illegal_attempts,
                reason,
            });
        }

        warn!(
            mover = %self.state.turn(),
            attempts = self.illegal_attempts,
            "turn forfeited after repeated illegal moves"
        );
        let next = self.state.pass_turn()?;
        self.commit(next);
        Ok(Verdict::Forfeited)
    }

    fn commit(&mut self, next: GameState) {
        self.illegal_attempts = 0;
        let next = if next.is_finished() {
            let done = next.finalize();
            if let Some(score) = done.final_score() {
                info!(
                    result = ?score.result,
                    black = score.scores[Color::Black],
                    white = score.scores[Color::White],
                    moves = done.move_index(),
                    "game finished"
                );
            }
            done
        } else {
            next
        };
        self.state = Arc::new(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;
    use crate::rules::GameResult;

    fn controller(size: u8) -> GameController {
        GameController::new(GameConfig::new(size), ControllerConfig::default())
    }

    #[test]
    fn test_accept_and_relay() {
        let mut ctl = controller(5);
        let dispatch = ctl.handle_line("MOVE 2,2").unwrap();

        assert_eq!(dispatch.mover, Color::Black);
        assert_eq!(dispatch.to_mover, vec![Message::Valid]);
        assert_eq!(
            dispatch.to_opponent,
            vec![Message::Relay(Command::Move(Position::new(2, 2)))]
        );
        assert_eq!(ctl.turn(), Color::White);
    }

    #[test]
    fn test_reject_keeps_turn() {
        let mut ctl = controller(5);
        ctl.handle_line("MOVE 2,2").unwrap();

        let dispatch = ctl.handle_line("MOVE 2,2").unwrap();
        assert_eq!(dispatch.to_mover, vec![Message::Invalid]);
        assert!(dispatch.to_opponent.is_empty());
        assert_eq!(
            dispatch.verdict,
            Verdict::Rejected {
                attempts: 1,
                reason: Some(IllegalMove::Occupied(Position::new(2, 2))),
            }
        );
        assert_eq!(ctl.turn(), Color::White);
        assert_eq!(ctl.state().move_index(), 1);
    }

    #[test]
    fn test_forfeit_after_three_rejects() {
        let mut ctl = controller(5);
        ctl.handle_line("MOVE 9,9").unwrap();
        ctl.handle_line("garbage").unwrap();
        let dispatch = ctl.handle_line("MOVE 7,0").unwrap();

        assert_eq!(dispatch.verdict, Verdict::Forfeited);
        assert_eq!(dispatch.to_mover, vec![Message::Invalid, Message::TurnLoss]);
        assert_eq!(dispatch.to_opponent, vec![Message::Relay(Command::Pass)]);
        assert_eq!(ctl.turn(), Color::White);
        assert_eq!(ctl.state().pass_streak(), 1);
        assert_eq!(ctl.illegal_attempts(), 0);
    }

    #[test]
    fn test_accept_resets_attempts() {
        let mut ctl = controller(5);
        ctl.handle_line("MOVE 9,9").unwrap();
        ctl.handle_line("MOVE 9,9").unwrap();
        assert_eq!(ctl.illegal_attempts(), 2);

        ctl.handle_line("MOVE 0,0").unwrap();
        assert_eq!(ctl.illegal_attempts(), 0);
    }

    #[test]
    fn test_two_passes_end_game() {
        let mut ctl = controller(5);
        ctl.handle_line("PASS").unwrap();
        let dispatch = ctl.handle_line("PASS").unwrap();

        let end = dispatch.end().unwrap();
        assert_eq!(end.winner, crate::protocol::WIRE_WHITE);
        assert_eq!(end.black, 0.0);
        assert_eq!(end.white, 6.5);
        assert_eq!(dispatch.to_mover.last(), dispatch.to_opponent.last());
        assert!(ctl.is_over());
        assert_eq!(
            ctl.final_score().unwrap().result,
            GameResult::Winner(Color::White)
        );
    }

    #[test]
    fn test_submit_after_end_fails() {
        let mut ctl = controller(3);
        ctl.submit(Move::Pass).unwrap();
        ctl.submit(Move::Pass).unwrap();

        assert_eq!(ctl.submit(Move::Pass), Err(EngineError::GameOver));
        assert_eq!(ctl.handle_line("PASS"), Err(EngineError::GameOver));
        assert_eq!(ctl.handle_line("nonsense"), Err(EngineError::GameOver));
    }

    #[test]
    fn test_custom_attempt_limit() {
        let config = ControllerConfig::new().with_max_illegal_attempts(1);
        let mut ctl = GameController::new(GameConfig::new(5), config);
        let verdict = ctl.submit(Move::place(5, 5)).unwrap();
        assert_eq!(verdict, Verdict::Forfeited);
    }

    #[test]
    fn test_resume_finished_state() {
        let state = GameState::replay(GameConfig::new(3), &[Move::Pass, Move::Pass]).unwrap();
        let ctl = GameController::from_state(state, ControllerConfig::default());
        assert!(ctl.is_over());
    }
}
