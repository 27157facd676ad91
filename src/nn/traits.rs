//! Tensor container and policy interface for network-driven agents.
//!
//! Networks themselves live outside this crate (typically in Python); these
//! types describe what goes in and what comes out.

use serde::{Deserialize, Serialize};

/// Board planes flattened plane-major, then row-major.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    pub tensor: Vec<f32>,
    /// `[planes, rows, cols]`
    pub shape: Vec<usize>,
}

impl EncodedState {
    #[must_use]
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length does not fit shape {shape:?}"
        );
        Self { tensor, shape }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    fn dims(&self) -> Option<(usize, usize, usize)> {
        match self.shape[..] {
            [planes, rows, cols] => Some((planes, rows, cols)),
            _ => None,
        }
    }

    /// Number of planes, or `None` if the shape is not three-dimensional.
    #[must_use]
    pub fn planes(&self) -> Option<usize> {
        self.dims().map(|(planes, _, _)| planes)
    }

    /// One plane as a row-major slice.
    #[must_use]
    pub fn plane(&self, index: usize) -> Option<&[f32]> {
        let (planes, rows, cols) = self.dims()?;
        if index >= planes {
            return None;
        }
        let area = rows * cols;
        self.tensor.get(index * area..(index + 1) * area)
    }

    /// Value of one cell of one plane.
    #[must_use]
    pub fn at(&self, plane: usize, row: usize, col: usize) -> Option<f32> {
        let (_, rows, cols) = self.dims()?;
        if row >= rows || col >= cols {
            return None;
        }
        self.plane(plane)?.get(row * cols + col).copied()
    }
}

/// Policy network: action probabilities for an encoded state.
///
/// The output length must equal the encoder's action space size.
pub trait PolicyNetwork: Send + Sync {
    fn predict(&self, encoded: &EncodedState) -> Vec<f32>;

    fn predict_batch(&self, encoded: &[EncodedState]) -> Vec<Vec<f32>> {
        encoded.iter().map(|e| self.predict(e)).collect()
    }
}

/// Index of the highest probability among actions whose mask entry is 1.
///
/// Ties go to the lowest index. `None` if nothing is marked legal.
#[must_use]
pub fn best_legal_action(probs: &[f32], mask: &[u8]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (action, (&p, &legal)) in probs.iter().zip(mask).enumerate() {
        if legal == 1 && best.map_or(true, |(_, q)| p > q) {
            best = Some((action, p));
        }
    }
    best.map(|(action, _)| action)
}

/// Same probability for every action of an `n`×`n` board plus the pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniformPolicy {
    actions: usize,
}

impl UniformPolicy {
    #[must_use]
    pub fn for_board(board_size: u8) -> Self {
        let n = board_size as usize;
        Self { actions: n * n + 1 }
    }

    #[must_use]
    pub fn actions(&self) -> usize {
        self.actions
    }
}

impl PolicyNetwork for UniformPolicy {
    fn predict(&self, _encoded: &EncodedState) -> Vec<f32> {
        vec![1.0 / self.actions as f32; self.actions]
    }
}
