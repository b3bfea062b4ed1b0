//! Engine controller for managing search and game state.
//!
//! Searches run on a worker thread with a cancellation flag so a caller can
//! stay responsive while the engine thinks.

mod controller;
mod worker;

pub use controller::EngineController;
pub use worker::SearchWorker;
