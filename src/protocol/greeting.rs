//! Connection greeting: `AG<slot> G<n>x<n>`.
//!
//! Sent once to each agent when it connects. The slot tells the agent which
//! color it plays (`1` Black, `2` White) and the game tag tells it the board.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::message::{color_to_wire, wire_to_color};
use super::ProtocolError;
use crate::core::{Color, GameConfig, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Greeting telling an agent its color and the board size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Greeting {
    /// The color this agent plays.
    pub color: Color,
    /// Side length of the board.
    pub board_size: u8,
}

impl Greeting {
    /// Greeting for `color` on a board of the configured size.
    ///
    /// # Panics
    ///
    /// Panics if `color` is `Empty`.
    #[must_use]
    pub fn new(color: Color, config: &GameConfig) -> Self {
        assert!(color.is_stone(), "Greeting needs a player color");
        Self {
            color,
            board_size: config.board_size,
        }
    }

    /// The greeting pair sent to Black and White, in connection order.
    #[must_use]
    pub fn pair(config: &GameConfig) -> [Self; 2] {
        [Self::new(Color::Black, config), Self::new(Color::White, config)]
    }
}

impl FromStr for Greeting {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let bad = || ProtocolError::BadGreeting(line.to_string());

        let (agent, game) = line.split_once(' ').ok_or_else(bad)?;
        let slot: u8 = agent
            .strip_prefix("AG")
            .and_then(|n| n.parse().ok())
            .ok_or_else(bad)?;
        let color = wire_to_color(slot)?;
        if !color.is_stone() {
            return Err(ProtocolError::UnknownPlayer(slot));
        }

        let dims = game
            .trim()
            .strip_prefix('G')
            .ok_or_else(|| ProtocolError::UnsupportedGame(game.trim().to_string()))?;
        let (rows, cols) = dims.split_once('x').ok_or_else(bad)?;
        let rows: u8 = rows.parse().map_err(|_| bad())?;
        let cols: u8 = cols.parse().map_err(|_| bad())?;
        if rows != cols || !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&rows) {
            return Err(ProtocolError::BadBoardSize(dims.to_string()));
        }

        Ok(Self {
            color,
            board_size: rows,
        })
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AG{} G{}x{}",
            color_to_wire(self.color),
            self.board_size,
            self.board_size
        )
    }
}
