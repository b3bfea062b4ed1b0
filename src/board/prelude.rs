//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use minimax_chess::board::prelude::*;
//!
//! let board = Board::new();
//! assert_eq!(board.status(Color::White), GameStatus::Ongoing);
//! ```

pub use super::{
    find_best_move, Board, BoardBuilder, CastlingRights, Color, GameStatus, Move, MoveError,
    MoveList, MoveParseError, Piece, SearchParams, Square,
};
