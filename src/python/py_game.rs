//! Game bindings for Python.

use numpy::{PyArray1, PyArray3, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::core::{
    Color, EngineError, GameConfig, GameState, KoRule, Position, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};
use crate::nn::{legal_action_mask, GoEncoder, StateEncoder, PLANES};
use crate::protocol::{color_to_wire, wire_to_color, EndOfGame};

use super::py_nn::PyEncodedState;

fn to_py_err(err: EngineError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Python wrapper for a Go game.
///
/// Holds the current state; `play` and `pass_turn` replace it with the next
/// snapshot.
#[pyclass(name = "GoGame")]
#[derive(Clone)]
pub struct PyGoGame {
    state: GameState,
}

#[pymethods]
impl PyGoGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - board_size: Side length (2-25)
    /// - komi: Bonus added to White's score
    /// - superko: Reject any repeated board, not just the mover's previous one
    #[new]
    #[pyo3(signature = (board_size = 7, komi = 6.5, superko = false))]
    fn new(board_size: u8, komi: f32, superko: bool) -> PyResult<Self> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&board_size) {
            return Err(PyErr::new::<PyValueError, _>(format!(
                "board_size must be {MIN_BOARD_SIZE}-{MAX_BOARD_SIZE}, got {board_size}"
            )));
        }
        let ko_rule = if superko {
            KoRule::PositionalSuperko
        } else {
            KoRule::OwnLastBoard
        };
        let config = GameConfig::new(board_size)
            .with_komi(komi)
            .with_ko_rule(ko_rule);
        Ok(Self {
            state: GameState::new(config),
        })
    }

    #[getter]
    fn board_size(&self) -> u8 {
        self.state.config().board_size
    }

    /// Side to move as a wire id (1 Black, 2 White).
    #[getter]
    fn turn(&self) -> u8 {
        color_to_wire(self.state.turn())
    }

    #[getter]
    fn move_index(&self) -> u32 {
        self.state.move_index()
    }

    #[getter]
    fn pass_streak(&self) -> u8 {
        self.state.pass_streak()
    }

    /// Board as rows of 1 (Black), -1 (White) and 0 (empty).
    fn board(&self) -> Vec<Vec<i8>> {
        let n = self.state.config().board_size;
        (0..n)
            .map(|row| {
                (0..n)
                    .map(|col| self.state.grid().get(Position::new(row, col)).value())
                    .collect()
            })
            .collect()
    }

    /// Legal placements as (row, col) pairs in row-major order.
    fn legal_moves(&self) -> Vec<(u8, u8)> {
        self.state
            .legal_moves()
            .into_iter()
            .map(|pos| (pos.row, pos.col))
            .collect()
    }

    fn is_legal(&self, row: u8, col: u8) -> bool {
        self.state.is_legal(Position::new(row, col))
    }

    /// Place a stone for the side to move. Raises ValueError if illegal.
    fn play(&mut self, row: u8, col: u8) -> PyResult<()> {
        self.state = self.state.play(Position::new(row, col)).map_err(to_py_err)?;
        Ok(())
    }

    fn pass_turn(&mut self) -> PyResult<()> {
        self.state = self.state.pass_turn().map_err(to_py_err)?;
        Ok(())
    }

    fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// End the game and return (winner id, black score, white score).
    ///
    /// The winner id is 1 for Black, 2 for White and 0 for a draw.
    fn finalize(&mut self) -> (u8, f32, f32) {
        self.state = self.state.finalize();
        let score = self
            .state
            .final_score()
            .cloned()
            .unwrap_or_else(|| self.state.score());
        let end = EndOfGame::from_score(&score);
        (end.winner, end.black, end.white)
    }

    /// Three-plane encoding as an EncodedState.
    ///
    /// Planes are opponent, empty, own stones; the perspective defaults to
    /// the side to move.
    #[pyo3(signature = (perspective = None))]
    fn encode(&self, perspective: Option<u8>) -> PyResult<PyEncodedState> {
        let color = self.perspective(perspective)?;
        let encoder = GoEncoder::new(self.state.config().board_size);
        Ok(PyEncodedState(encoder.encode(&self.state, color)))
    }

    /// Three-plane encoding as a numpy array of shape (3, n, n).
    #[pyo3(signature = (perspective = None))]
    fn encoded_state<'py>(
        &self,
        py: Python<'py>,
        perspective: Option<u8>,
    ) -> PyResult<Bound<'py, PyArray3<f32>>> {
        let n = self.state.config().board_size as usize;
        let encoded = self.encode(perspective)?.0;
        PyArray1::from_vec_bound(py, encoded.tensor)
            .reshape([PLANES, n, n])
            .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))
    }

    /// Legal-action mask of length n*n + 1 (last slot is the pass).
    fn legal_action_mask<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u8>> {
        PyArray1::from_vec_bound(py, legal_action_mask(&self.state))
    }

    /// Serialize the state with bincode.
    fn to_bytes<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = self.state.to_bytes().map_err(to_py_err)?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    #[staticmethod]
    fn from_bytes(bytes: &[u8]) -> PyResult<Self> {
        Ok(Self {
            state: GameState::from_bytes(bytes).map_err(to_py_err)?,
        })
    }

    /// Copy the game for simulation.
    fn copy(&self) -> Self {
        self.clone()
    }

    fn __str__(&self) -> String {
        self.state.grid().to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "GoGame(board_size={}, move_index={}, turn={})",
            self.state.config().board_size,
            self.state.move_index(),
            self.state.turn()
        )
    }
}

impl PyGoGame {
    fn perspective(&self, id: Option<u8>) -> PyResult<Color> {
        let Some(id) = id else {
            return Ok(self.state.turn());
        };
        wire_to_color(id)
            .ok()
            .filter(|color| color.is_stone())
            .ok_or_else(|| PyErr::new::<PyValueError, _>(format!("unknown player id {id}")))
    }
}
