//! Game configuration types.
//!
//! A game is configured once at startup:
//! - `board_size`: side length of the square board
//! - `komi`: fixed score bonus and the color that receives it
//! - `ko_rule`: which repetition check the legality checker applies
//! - `move_limit_factor`: safety cap on game length, in multiples of n²
//!
//! Configuration is plain data and travels with every `GameState`.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::grid::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Default komi, added to White's score.
pub const DEFAULT_KOMI: f32 = 6.5;

/// Default game-length cap factor: a game ends after `2·n²` transitions.
pub const DEFAULT_MOVE_LIMIT_FACTOR: u32 = 2;

/// Positional-repetition rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KoRule {
    /// Reject a placement whose resulting board equals the board the mover
    /// produced on their own previous turn. This is a single-ply restriction
    /// and does not catch longer cycles.
    #[default]
    OwnLastBoard,
    /// Reject a placement whose resulting board equals any board seen
    /// earlier in the game (positional superko).
    PositionalSuperko,
}

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the board.
    pub board_size: u8,

    /// Bonus added to `komi_color`'s final score.
    pub komi: f32,

    /// Color receiving the komi (never `Empty`).
    pub komi_color: Color,

    /// Repetition rule used by the legality checker.
    pub ko_rule: KoRule,

    /// The game ends once `move_index >= move_limit_factor · n²`.
    pub move_limit_factor: u32,
}

impl GameConfig {
    /// Create a configuration for a `board_size`×`board_size` game with
    /// default komi, ko rule and move limit.
    pub fn new(board_size: u8) -> Self {
        assert!(
            (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size),
            "Board size must be {}-{}",
            MIN_BOARD_SIZE,
            MAX_BOARD_SIZE
        );

        Self {
            board_size,
            komi: DEFAULT_KOMI,
            komi_color: Color::White,
            ko_rule: KoRule::default(),
            move_limit_factor: DEFAULT_MOVE_LIMIT_FACTOR,
        }
    }

    /// Set the komi value.
    #[must_use]
    pub fn with_komi(mut self, komi: f32) -> Self {
        self.komi = komi;
        self
    }

    /// Set which color receives the komi.
    #[must_use]
    pub fn with_komi_color(mut self, color: Color) -> Self {
        assert!(color.is_stone(), "Komi must go to Black or White");
        self.komi_color = color;
        self
    }

    /// Set the repetition rule.
    #[must_use]
    pub fn with_ko_rule(mut self, rule: KoRule) -> Self {
        self.ko_rule = rule;
        self
    }

    /// Set the game-length cap factor.
    #[must_use]
    pub fn with_move_limit_factor(mut self, factor: u32) -> Self {
        assert!(factor > 0, "Move limit factor must be positive");
        self.move_limit_factor = factor;
        self
    }

    /// Maximum number of transitions before the game is forced to end.
    #[must_use]
    pub fn move_limit(&self) -> u32 {
        let n = self.board_size as u32;
        self.move_limit_factor.saturating_mul(n * n)
    }

    /// Number of intersections.
    #[must_use]
    pub fn area(&self) -> usize {
        self.board_size as usize * self.board_size as usize
    }

    /// Komi owed to `color` (zero for the other side).
    #[must_use]
    pub fn komi_for(&self, color: Color) -> f32 {
        if color == self.komi_color {
            self.komi
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new(9);

        assert_eq!(config.board_size, 9);
        assert_eq!(config.komi, DEFAULT_KOMI);
        assert_eq!(config.komi_color, Color::White);
        assert_eq!(config.ko_rule, KoRule::OwnLastBoard);
        assert_eq!(config.move_limit(), 162);
        assert_eq!(config.area(), 81);
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(5)
            .with_komi(0.5)
            .with_komi_color(Color::Black)
            .with_ko_rule(KoRule::PositionalSuperko)
            .with_move_limit_factor(3);

        assert_eq!(config.komi_for(Color::Black), 0.5);
        assert_eq!(config.komi_for(Color::White), 0.0);
        assert_eq!(config.ko_rule, KoRule::PositionalSuperko);
        assert_eq!(config.move_limit(), 75);
    }

    #[test]
    fn test_move_limit_saturates() {
        let config = GameConfig::new(19).with_move_limit_factor(u32::MAX);
        assert_eq!(config.move_limit(), u32::MAX);
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new(7).with_komi(2.5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    #[should_panic(expected = "Board size must be")]
    fn test_board_too_small() {
        GameConfig::new(1);
    }

    #[test]
    #[should_panic(expected = "Komi must go to Black or White")]
    fn test_komi_to_empty() {
        let _ = GameConfig::new(5).with_komi_color(Color::Empty);
    }
}
