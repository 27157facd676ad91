//! Encoded planes and action indexing for Python.

use numpy::{PyArray1, PyArrayDyn, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Move, Position};
use crate::nn::{action_to_move, best_legal_action, checked_action_index, EncodedState};

/// Planes produced by `GoGame.encode`.
#[pyclass(name = "EncodedState")]
#[derive(Clone, Debug)]
pub struct PyEncodedState(pub EncodedState);

#[pymethods]
impl PyEncodedState {
    #[getter]
    fn shape(&self) -> Vec<usize> {
        self.0.shape.clone()
    }

    #[getter]
    fn planes(&self) -> Option<usize> {
        self.0.planes()
    }

    /// One plane as a flat row-major list, or None past the last plane.
    fn plane(&self, index: usize) -> Option<Vec<f32>> {
        self.0.plane(index).map(<[f32]>::to_vec)
    }

    /// The tensor as a numpy array in its own shape.
    fn to_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArrayDyn<f32>>> {
        PyArray1::from_slice_bound(py, &self.0.tensor)
            .reshape(self.0.shape.clone())
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __repr__(&self) -> String {
        format!("EncodedState(shape={:?})", self.0.shape)
    }
}

/// Action index for a placement, or for the pass when `row` and `col` are
/// both None.
#[pyfunction]
#[pyo3(signature = (board_size, row = None, col = None))]
pub fn encode_action(board_size: u8, row: Option<u8>, col: Option<u8>) -> PyResult<usize> {
    let mv = match (row, col) {
        (Some(row), Some(col)) => Move::Place(Position::new(row, col)),
        (None, None) => Move::Pass,
        _ => return Err(PyValueError::new_err("row and col must be given together")),
    };
    checked_action_index(mv, board_size).ok_or_else(|| {
        PyValueError::new_err(format!(
            "({}, {}) is off a {board_size}x{board_size} board",
            row.unwrap_or_default(),
            col.unwrap_or_default()
        ))
    })
}

/// Inverse of `encode_action`: (row, col) for a placement, None for the pass.
#[pyfunction]
pub fn decode_action(board_size: u8, action: usize) -> PyResult<Option<(u8, u8)>> {
    action_to_move(action, board_size)
        .map(|mv| mv.position().map(|pos| (pos.row, pos.col)))
        .ok_or_else(|| {
            PyValueError::new_err(format!(
                "action {action} out of range for board size {board_size}"
            ))
        })
}

/// Most probable action whose mask entry is 1; ties go to the lowest index.
#[pyfunction]
pub fn best_action(probs: Vec<f32>, mask: Vec<u8>) -> Option<usize> {
    best_legal_action(&probs, &mask)
}
