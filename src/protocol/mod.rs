//! Line-oriented text protocol spoken between the relay and its agents.
//!
//! A session starts with a `Greeting` per agent, then alternates agent
//! `Command`s with relay `Message`s until an `END` message closes the game.
//! Transport (sockets, timeouts) is left to the caller; this module only
//! converts between lines and typed values.

pub mod greeting;
pub mod message;

use thiserror::Error;

pub use greeting::Greeting;
pub use message::{
    color_to_wire, wire_to_color, Command, EndOfGame, Message, WIRE_BLACK, WIRE_DRAW, WIRE_WHITE,
};

/// Failure to parse a protocol line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("empty line")]
    Empty,

    #[error("unknown command: {0:?}")]
    UnknownCommand(String),

    #[error("malformed coordinates in {0:?}")]
    BadCoordinates(String),

    #[error("malformed END message: {0:?}")]
    BadEnd(String),

    #[error("malformed greeting: {0:?}")]
    BadGreeting(String),

    #[error("unsupported game tag: {0:?}")]
    UnsupportedGame(String),

    #[error("unsupported board dimensions: {0:?}")]
    BadBoardSize(String),

    #[error("unknown player id {0}")]
    UnknownPlayer(u8),
}
