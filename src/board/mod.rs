//! Chess board representation and game logic.
//!
//! An 8x8 mailbox indexed by `Square(row, col)`, row 0 being rank 8. The
//! board is a plain value: searching and move validation work on clones, so
//! a rejected move never disturbs the position it was tried on.
//!
//! # Example
//! ```
//! use minimax_chess::board::{Board, Color, Move, Square};
//!
//! let mut board = Board::new();
//! assert_eq!(board.legal_moves(Color::White).len(), 20);
//! board.apply_move(Move::normal(Square(6, 4), Square(4, 4))).unwrap();
//! assert_eq!(board.legal_moves(Color::Black).len(), 20);
//! ```

mod attacks;
mod builder;
mod error;
mod eval;
mod fen;
mod make_move;
mod movegen;
mod notation;
pub mod prelude;
mod search;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, MoveParseError, SquareError};
pub use notation::{parse_move_line, parse_move_tokens};
pub use state::Board;
pub use status::GameStatus;
pub use types::{CastlingRights, Color, Move, MoveKind, MoveList, MoveListIntoIter, Piece, Square};

// Public API - search functions and configuration
pub use search::{
    find_best_move, SearchParams, SearchResult, SearchStats, Searcher, DEFAULT_DEPTH, MATE_SCORE,
};

pub(crate) use types::ScoredMoveList;
