//! A controller that can be shared across threads.
//!
//! Submissions go through a `Mutex`, so only one move is evaluated at a time.
//! The committed state is published as an `Arc<GameState>`; readers (a
//! display, a logger) clone the `Arc` and never wait on move evaluation.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use super::{Dispatch, GameController, Verdict};
use crate::core::{EngineError, GameState, Move};

/// Thread-safe wrapper around a `GameController`.
#[derive(Debug)]
pub struct SharedGame {
    controller: Mutex<GameController>,
    current: RwLock<Arc<GameState>>,
}

impl SharedGame {
    #[must_use]
    pub fn new(controller: GameController) -> Self {
        let current = RwLock::new(Arc::clone(controller.state()));
        Self {
            controller: Mutex::new(controller),
            current,
        }
    }

    /// The latest committed state.
    #[must_use]
    pub fn snapshot(&self) -> Arc<GameState> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Submit a move; see [`GameController::submit`].
    pub fn submit(&self, mv: Move) -> Result<Verdict, EngineError> {
        let mut controller = self.lock();
        let verdict = controller.submit(mv)?;
        self.publish(&controller);
        Ok(verdict)
    }

    /// Handle a protocol line; see [`GameController::handle_line`].
    pub fn handle_line(&self, line: &str) -> Result<Dispatch, EngineError> {
        let mut controller = self.lock();
        let dispatch = controller.handle_line(line)?;
        self.publish(&controller);
        Ok(dispatch)
    }

    /// Consume the wrapper and return the controller.
    #[must_use]
    pub fn into_inner(self) -> GameController {
        self.controller
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, GameController> {
        self.controller.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, controller: &GameController) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) =
            Arc::clone(controller.state());
    }
}
