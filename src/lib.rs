//! Chess rules engine with a minimax/alpha-beta move search.
//!
//! [`board`] holds the rules core and search, [`engine`] runs searches on a
//! worker thread, and [`console`] is the text front end used by the binary.

pub mod board;
pub mod console;
pub mod engine;

pub use board::{
    find_best_move, Board, Color, GameStatus, Move, MoveError, Piece, SearchParams, Square,
};
pub use engine::EngineController;
