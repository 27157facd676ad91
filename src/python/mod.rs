//! Python bindings for the Go engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_go
//!
//! game = rust_go.GoGame(board_size=7)
//! game.play(3, 3)
//! game.pass_turn()
//!
//! planes = game.encoded_state()      # numpy (3, 7, 7)
//! mask = game.legal_action_mask()    # numpy (50,), last slot is pass
//!
//! winner, black, white = game.finalize()
//! ```

use pyo3::prelude::*;

mod py_game;
mod py_nn;

pub use py_game::*;
pub use py_nn::*;

/// rust_go: Go rules engine with numpy-ready encodings.
#[pymodule]
fn rust_go(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGoGame>()?;
    m.add_class::<PyEncodedState>()?;

    m.add_function(wrap_pyfunction!(encode_action, m)?)?;
    m.add_function(wrap_pyfunction!(decode_action, m)?)?;
    m.add_function(wrap_pyfunction!(best_action, m)?)?;

    Ok(())
}
