//! Move-picking agents for driving games locally.
//!
//! - `RandomAgent`: uniform over legal placements, with an optional pass rate
//! - `FirstLegalAgent`: the first legal placement in row-major order
//! - `PolicyAgent`: the most probable legal action under a `PolicyNetwork`
//!
//! All of them pass when no placement is legal.

use crate::core::{GameRng, GameRngState, GameState, Move};
use crate::nn::{
    action_to_move, best_legal_action, legal_action_mask, GoEncoder, PolicyNetwork, StateEncoder,
};

/// Something that chooses moves for one side.
pub trait Agent {
    /// Pick a move for the side to move in `state`.
    fn select(&mut self, state: &GameState) -> Move;

    /// Short label used in logs.
    fn name(&self) -> &str {
        "agent"
    }
}

/// Plays uniformly random legal moves from a seeded RNG.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    rng: GameRng,
    pass_probability: f64,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    /// Build from an existing stream, e.g. a seat stream of a match RNG.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self {
            rng,
            pass_probability: 0.0,
        }
    }

    /// Pass voluntarily with the given probability on each turn.
    ///
    /// # Panics
    ///
    /// Panics if `probability` is outside `0.0..=1.0`.
    #[must_use]
    pub fn with_pass_probability(mut self, probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "Pass probability must be in [0, 1]"
        );
        self.pass_probability = probability;
        self
    }

    /// Current RNG position, for checkpointing the agent.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl Agent for RandomAgent {
    fn select(&mut self, state: &GameState) -> Move {
        if self.pass_probability > 0.0 && self.rng.chance(self.pass_probability) {
            return Move::Pass;
        }
        self.rng
            .pick(&state.legal_moves())
            .map_or(Move::Pass, Move::Place)
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Plays the first legal placement in row-major order.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstLegalAgent;

impl Agent for FirstLegalAgent {
    fn select(&mut self, state: &GameState) -> Move {
        state
            .legal_moves()
            .first()
            .map_or(Move::Pass, |&pos| Move::Place(pos))
    }

    fn name(&self) -> &str {
        "first-legal"
    }
}

/// Plays the legal action with the highest policy probability.
///
/// Ties go to the lowest action index.
#[derive(Clone, Debug)]
pub struct PolicyAgent<P> {
    policy: P,
}

impl<P: PolicyNetwork> PolicyAgent<P> {
    #[must_use]
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }
}

impl<P: PolicyNetwork> Agent for PolicyAgent<P> {
    fn select(&mut self, state: &GameState) -> Move {
        let size = state.config().board_size;
        let encoded = GoEncoder::new(size).encode(state, state.turn());
        let probs = self.policy.predict(&encoded);
        best_legal_action(&probs, &legal_action_mask(state))
            .and_then(|action| action_to_move(action, size))
            .unwrap_or(Move::Pass)
    }

    fn name(&self) -> &str {
        "policy"
    }
}
