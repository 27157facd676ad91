//! Seeded randomness for agents.
//!
//! The rules never draw random numbers; only move-picking agents do. A match
//! is reproducible from one seed: each seat gets its own stream derived from
//! the match seed and its color, so Black's draws never shift White's.
//!
//! ```
//! use rust_go::core::{Color, GameRng};
//!
//! let game = GameRng::new(7);
//! let mut black = game.for_color(Color::Black);
//! let mut again = GameRng::new(7).for_color(Color::Black);
//! assert_eq!(black.pick(&[1, 2, 3, 4]), again.pick(&[1, 2, 3, 4]));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::color::Color;

/// Golden-ratio increment used to spread derived seeds.
const SEED_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 stream with a recorded seed, so it can be checkpointed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Independent stream for one seat.
    ///
    /// Depends only on this stream's seed and `color`, not on how much has
    /// been drawn from it.
    ///
    /// # Panics
    ///
    /// Panics if `color` is `Empty`.
    #[must_use]
    pub fn for_color(&self, color: Color) -> Self {
        assert!(color.is_stone(), "Seat streams exist only for Black and White");
        let lane = match color {
            Color::White => 2,
            _ => 1,
        };
        Self::new(self.seed.wrapping_add(SEED_STEP.wrapping_mul(lane)))
    }

    /// True with the given probability.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// A uniformly chosen element, or `None` for an empty slice.
    pub fn pick<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        items.choose(&mut self.inner).copied()
    }

    /// Snapshot of the stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume a stream from a snapshot.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable stream position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(rng: &mut GameRng) -> Vec<u32> {
        let items: Vec<u32> = (0..1000).collect();
        (0..20).map(|_| rng.pick(&items).unwrap()).collect()
    }

    #[test]
    fn test_same_seed_same_draws() {
        assert_eq!(draws(&mut GameRng::new(42)), draws(&mut GameRng::new(42)));
        assert_ne!(draws(&mut GameRng::new(42)), draws(&mut GameRng::new(43)));
    }

    #[test]
    fn test_seat_streams() {
        let mut game = GameRng::new(42);
        let mut black = game.for_color(Color::Black);
        let mut white = game.for_color(Color::White);
        assert_ne!(draws(&mut black), draws(&mut white));

        // Drawing from the parent does not move the seat streams.
        draws(&mut game);
        let mut black_again = game.for_color(Color::Black);
        let mut fresh = GameRng::new(42).for_color(Color::Black);
        assert_eq!(draws(&mut black_again), draws(&mut fresh));
    }

    #[test]
    #[should_panic(expected = "Seat streams")]
    fn test_empty_seat_panics() {
        let _ = GameRng::new(1).for_color(Color::Empty);
    }

    #[test]
    fn test_pick_empty() {
        let mut rng = GameRng::new(42);
        let empty: [u8; 0] = [];
        assert_eq!(rng.pick(&empty), None);
        assert_eq!(rng.pick(&[9]), Some(9));
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = GameRng::new(5);
        assert!((0..50).all(|_| rng.chance(1.0)));
        assert!((0..50).all(|_| !rng.chance(0.0)));
    }

    #[test]
    fn test_state_round_trip() {
        let mut rng = GameRng::new(42);
        draws(&mut rng);

        let state = rng.state();
        let expected = draws(&mut rng);
        let mut restored = GameRng::from_state(&state);
        assert_eq!(draws(&mut restored), expected);
        assert_eq!(restored.seed(), 42);
    }
}
