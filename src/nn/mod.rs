//! Network-facing encodings of Go positions.
//!
//! - **Encoding**: `StateEncoder` trait and the three-plane `GoEncoder`
//! - **Actions**: `action_index`, `action_to_move`, `legal_action_mask`
//! - **Policies**: `PolicyNetwork` trait, `UniformPolicy` baseline, `best_legal_action`
//!
//! ```
//! use rust_go::core::{Color, GameConfig, GameState};
//! use rust_go::nn::{GoEncoder, StateEncoder};
//!
//! let state = GameState::new(GameConfig::new(7));
//! let encoded = GoEncoder::new(7).encode(&state, Color::Black);
//! assert_eq!(encoded.shape, vec![3, 7, 7]);
//! ```

pub mod encoder;
pub mod traits;

pub use encoder::{
    action_index, action_to_move, checked_action_index, legal_action_mask, pass_action, GoEncoder,
    StateEncoder, PLANES,
};
pub use traits::{best_legal_action, EncodedState, PolicyNetwork, UniformPolicy};
