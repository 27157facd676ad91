//! Text messages exchanged with agents during a game.
//!
//! Agent to relay:
//! - `MOVE r,c` place a stone at row `r`, column `c`
//! - `PASS`
//!
//! Relay to agent:
//! - `VALID` / `INVALID` verdict on the agent's own command
//! - `TURN LOSS` the agent's turn was forfeited after repeated rejects
//! - `MOVE r,c` / `PASS` the opponent's accepted command, relayed
//! - `END w b s` game over: winner id, Black's score, White's score

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ProtocolError;
use crate::core::{Color, Move, Position};
use crate::rules::FinalScore;

/// Wire id for a drawn game in `END`.
pub const WIRE_DRAW: u8 = 0;

/// Wire id of Black (first connected agent).
pub const WIRE_BLACK: u8 = 1;

/// Wire id of White (second connected agent).
pub const WIRE_WHITE: u8 = 2;

/// Translate a player color to its wire id.
#[must_use]
pub fn color_to_wire(color: Color) -> u8 {
    match color {
        Color::Black => WIRE_BLACK,
        Color::White => WIRE_WHITE,
        Color::Empty => WIRE_DRAW,
    }
}

/// Translate a wire id to a player color (`0` maps to `Empty`, a draw).
pub fn wire_to_color(id: u8) -> Result<Color, ProtocolError> {
    match id {
        WIRE_BLACK => Ok(Color::Black),
        WIRE_WHITE => Ok(Color::White),
        WIRE_DRAW => Ok(Color::Empty),
        other => Err(ProtocolError::UnknownPlayer(other)),
    }
}

/// A command sent by an agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// `MOVE r,c`
    Move(Position),
    /// `PASS`
    Pass,
}

impl From<Command> for Move {
    fn from(command: Command) -> Self {
        match command {
            Command::Move(pos) => Move::Place(pos),
            Command::Pass => Move::Pass,
        }
    }
}

impl From<Move> for Command {
    fn from(mv: Move) -> Self {
        match mv {
            Move::Place(pos) => Command::Move(pos),
            Move::Pass => Command::Pass,
        }
    }
}

impl FromStr for Command {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        if line.is_empty() {
            return Err(ProtocolError::Empty);
        }
        if line == "PASS" {
            return Ok(Command::Pass);
        }

        let (verb, args) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        if verb != "MOVE" {
            return Err(ProtocolError::UnknownCommand(line.to_string()));
        }
        let (row, col) = args
            .split_once(',')
            .ok_or_else(|| ProtocolError::BadCoordinates(line.to_string()))?;
        let parse = |field: &str| {
            field
                .trim()
                .parse::<u8>()
                .map_err(|_| ProtocolError::BadCoordinates(line.to_string()))
        };

        Ok(Command::Move(Position::new(parse(row)?, parse(col)?)))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Move(pos) => write!(f, "MOVE {},{}", pos.row, pos.col),
            Command::Pass => f.write_str("PASS"),
        }
    }
}

/// Final result as carried by `END`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EndOfGame {
    /// `WIRE_BLACK`, `WIRE_WHITE` or `WIRE_DRAW`.
    pub winner: u8,
    /// Black's final score.
    pub black: f32,
    /// White's final score.
    pub white: f32,
}

impl EndOfGame {
    /// Build the `END` payload from a final score.
    #[must_use]
    pub fn from_score(score: &FinalScore) -> Self {
        Self {
            winner: score.result.winner().map_or(WIRE_DRAW, color_to_wire),
            black: score.scores[Color::Black],
            white: score.scores[Color::White],
        }
    }

    /// The winning color, or `None` for a draw.
    #[must_use]
    pub fn winner_color(&self) -> Option<Color> {
        match self.winner {
            WIRE_BLACK => Some(Color::Black),
            WIRE_WHITE => Some(Color::White),
            _ => None,
        }
    }
}

/// A message sent by the relay to an agent.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Message {
    /// The agent's command was accepted.
    Valid,
    /// The agent's command was rejected; it should try again.
    Invalid,
    /// The agent's turn was forfeited (a pass was played for it).
    TurnLoss,
    /// The opponent's accepted command.
    Relay(Command),
    /// The game is over.
    End(EndOfGame),
}

impl FromStr for Message {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        match line {
            "VALID" => return Ok(Message::Valid),
            "INVALID" => return Ok(Message::Invalid),
            "TURN LOSS" => return Ok(Message::TurnLoss),
            _ => {}
        }

        if let Some(rest) = line.strip_prefix("END ") {
            let fields: Vec<&str> = rest.split_whitespace().collect();
            let [winner, black, white] = fields.as_slice() else {
                return Err(ProtocolError::BadEnd(line.to_string()));
            };
            let bad = || ProtocolError::BadEnd(line.to_string());
            let winner: u8 = winner.parse().map_err(|_| bad())?;
            wire_to_color(winner)?;
            return Ok(Message::End(EndOfGame {
                winner,
                black: black.parse().map_err(|_| bad())?,
                white: white.parse().map_err(|_| bad())?,
            }));
        }

        line.parse().map(Message::Relay)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Valid => f.write_str("VALID"),
            Message::Invalid => f.write_str("INVALID"),
            Message::TurnLoss => f.write_str("TURN LOSS"),
            Message::Relay(command) => command.fmt(f),
            Message::End(end) => write!(f, "END {} {} {}", end.winner, end.black, end.white),
        }
    }
}
