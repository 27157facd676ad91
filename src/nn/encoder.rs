//! Board encoding and action indexing for policy networks.
//!
//! `GoEncoder` turns a state into three binary planes over the board:
//! opponent stones, empty points, own stones. From Black's perspective that
//! is `[White, Empty, Black]`.
//!
//! Actions are numbered `row * n + col` for placements, with `n * n` for the
//! pass, so the action space has `n * n + 1` entries.

use crate::core::{Color, GameState, Move, Position};
use crate::nn::traits::EncodedState;

/// Number of planes produced by [`GoEncoder`].
pub const PLANES: usize = 3;

/// Encodes game state into tensors for neural network input.
pub trait StateEncoder: Send + Sync {
    /// Encode the state as seen by `perspective`.
    fn encode(&self, state: &GameState, perspective: Color) -> EncodedState;

    /// Shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Size of the policy output vector.
    fn action_space_size(&self) -> usize;
}

/// Three-plane board encoder for a fixed board size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GoEncoder {
    board_size: u8,
}

impl GoEncoder {
    #[must_use]
    pub fn new(board_size: u8) -> Self {
        Self { board_size }
    }

    #[must_use]
    pub fn board_size(&self) -> u8 {
        self.board_size
    }

    /// Action index of the pass.
    #[must_use]
    pub fn pass_action(&self) -> usize {
        pass_action(self.board_size)
    }
}

impl StateEncoder for GoEncoder {
    /// # Panics
    ///
    /// Panics if the state's board size differs from the encoder's, or if
    /// `perspective` is `Empty`.
    fn encode(&self, state: &GameState, perspective: Color) -> EncodedState {
        let grid = state.grid();
        assert_eq!(grid.size(), self.board_size, "Encoder board size mismatch");
        assert!(perspective.is_stone(), "Perspective must be Black or White");

        let area = grid.area();
        let plane_of = |color: Color| -> usize {
            if color == Color::Empty {
                1
            } else if color == perspective {
                2
            } else {
                0
            }
        };

        let mut tensor = vec![0.0f32; PLANES * area];
        for (pos, color) in grid.iter() {
            tensor[plane_of(color) * area + pos.to_index(self.board_size)] = 1.0;
        }

        EncodedState::new(tensor, self.output_shape())
    }

    fn output_shape(&self) -> Vec<usize> {
        let n = self.board_size as usize;
        vec![PLANES, n, n]
    }

    fn action_space_size(&self) -> usize {
        self.pass_action() + 1
    }
}

/// Action index of the pass on an `n`×`n` board.
#[must_use]
pub fn pass_action(board_size: u8) -> usize {
    let n = board_size as usize;
    n * n
}

/// Action index of a move.
#[must_use]
pub fn action_index(mv: Move, board_size: u8) -> usize {
    match mv {
        Move::Place(pos) => pos.to_index(board_size),
        Move::Pass => pass_action(board_size),
    }
}

/// Action index of a move, or `None` for a placement off the board.
#[must_use]
pub fn checked_action_index(mv: Move, board_size: u8) -> Option<usize> {
    match mv {
        Move::Place(pos) if !pos.in_bounds(board_size) => None,
        _ => Some(action_index(mv, board_size)),
    }
}

/// Move for an action index, or `None` if the index is out of range.
#[must_use]
pub fn action_to_move(action: usize, board_size: u8) -> Option<Move> {
    let pass = pass_action(board_size);
    match action.cmp(&pass) {
        std::cmp::Ordering::Less => Some(Move::Place(Position::from_index(action, board_size))),
        std::cmp::Ordering::Equal => Some(Move::Pass),
        std::cmp::Ordering::Greater => None,
    }
}

/// Legal-action mask over the full action space.
///
/// Placements are marked with `1` when legal; the pass slot is `1` unless the
/// state is terminal.
#[must_use]
pub fn legal_action_mask(state: &GameState) -> Vec<u8> {
    let size = state.config().board_size;
    let mut mask = vec![0u8; pass_action(size) + 1];
    for pos in state.legal_moves() {
        mask[pos.to_index(size)] = 1;
    }
    if !state.is_terminal() {
        mask[pass_action(size)] = 1;
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    fn sample() -> GameState {
        GameState::replay(
            GameConfig::new(3),
            &[Move::place(0, 0), Move::place(1, 1)],
        )
        .unwrap()
    }

    #[test]
    fn test_shape_and_action_space() {
        let encoder = GoEncoder::new(7);
        assert_eq!(encoder.output_shape(), vec![3, 7, 7]);
        assert_eq!(encoder.action_space_size(), 50);
        assert_eq!(encoder.pass_action(), 49);
    }

    #[test]
    fn test_black_perspective_planes() {
        let encoded = GoEncoder::new(3).encode(&sample(), Color::Black);

        let white = encoded.plane(0).unwrap();
        let empty = encoded.plane(1).unwrap();
        let black = encoded.plane(2).unwrap();
        assert_eq!(black[0], 1.0);
        assert_eq!(white[4], 1.0);
        assert_eq!(empty.iter().sum::<f32>(), 7.0);
        assert_eq!(black.iter().sum::<f32>() + white.iter().sum::<f32>(), 2.0);
    }

    #[test]
    fn test_white_perspective_swaps_stone_planes() {
        let encoder = GoEncoder::new(3);
        let state = sample();
        let from_black = encoder.encode(&state, Color::Black);
        let from_white = encoder.encode(&state, Color::White);

        assert_eq!(from_black.plane(0), from_white.plane(2));
        assert_eq!(from_black.plane(1), from_white.plane(1));
        assert_eq!(from_black.plane(2), from_white.plane(0));
    }

    #[test]
    fn test_action_indexing() {
        assert_eq!(action_index(Move::place(1, 2), 5), 7);
        assert_eq!(action_index(Move::Pass, 5), 25);
        assert_eq!(action_to_move(7, 5), Some(Move::place(1, 2)));
        assert_eq!(action_to_move(25, 5), Some(Move::Pass));
        assert_eq!(action_to_move(26, 5), None);
    }

    #[test]
    fn test_checked_action_index_rejects_off_board() {
        assert_eq!(checked_action_index(Move::place(8, 8), 9), Some(80));
        assert_eq!(checked_action_index(Move::Pass, 9), Some(81));
        assert_eq!(checked_action_index(Move::place(0, 9), 9), None);
        assert_eq!(checked_action_index(Move::place(9, 0), 9), None);
    }

    #[test]
    fn test_legal_action_mask() {
        let state = sample();
        let mask = legal_action_mask(&state);
        assert_eq!(mask.len(), 10);
        assert_eq!(mask[0], 0);
        assert_eq!(mask[4], 0);
        assert_eq!(mask.iter().map(|&m| m as usize).sum::<usize>(), 8);
        assert_eq!(mask[9], 1);

        let done = state.finalize();
        assert!(legal_action_mask(&done).iter().all(|&m| m == 0));
    }

    #[test]
    #[should_panic(expected = "Encoder board size mismatch")]
    fn test_size_mismatch_panics() {
        let _ = GoEncoder::new(5).encode(&sample(), Color::Black);
    }
}
