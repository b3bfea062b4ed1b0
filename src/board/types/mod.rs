//! Core chess types.
//!
//! This module contains the fundamental types used throughout the chess engine:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - (row, col) board coordinate, row 0 being rank 8
//! - `Move`, `MoveKind` and `MoveList` - move representation
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveKind, MoveList, MoveListIntoIter};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use moves::ScoredMoveList;
