use std::fmt;

use super::{CastlingRights, Color, Piece, Square};

/// Back rank piece order from file a to file h.
const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// The 8x8 position plus castling bookkeeping.
///
/// `Board` is a plain value: cloning it yields a fully independent copy, so
/// speculative lines in the search can never touch the game board.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    pub(crate) squares: [[Option<(Color, Piece)>; 8]; 8],
    pub(crate) castling_rights: CastlingRights,
    pub(crate) king_moved: [bool; 2],
}

impl Board {
    /// Standard starting position with full castling rights.
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.reset();
        board
    }

    /// A board with no pieces, no castling rights and both kings marked as
    /// unmoved. Used as a base for FEN parsing and the builder.
    pub(crate) fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            castling_rights: CastlingRights::none(),
            king_moved: [false; 2],
        }
    }

    /// Put every piece back on its starting square and restore all rights.
    pub fn reset(&mut self) {
        self.squares = [[None; 8]; 8];
        for (col, piece) in BACK_RANK.iter().enumerate() {
            self.squares[0][col] = Some((Color::Black, *piece));
            self.squares[1][col] = Some((Color::Black, Piece::Pawn));
            self.squares[6][col] = Some((Color::White, Piece::Pawn));
            self.squares[7][col] = Some((Color::White, *piece));
        }
        self.castling_rights = CastlingRights::all();
        self.king_moved = [false; 2];
    }

    /// Piece and its color on `sq`, or `None` for an empty or off-board square.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        if !sq.is_valid() {
            return None;
        }
        self.squares[sq.0][sq.1]
    }

    #[inline]
    pub fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.0][sq.1] = Some((color, piece));
    }

    #[inline]
    pub fn clear_square(&mut self, sq: Square) {
        self.squares[sq.0][sq.1] = None;
    }

    /// True for an on-board square holding no piece.
    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        sq.is_valid() && self.squares[sq.0][sq.1].is_none()
    }

    #[inline]
    #[must_use]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub fn is_ally(&self, sq: Square, color: Color) -> bool {
        self.color_at(sq) == Some(color)
    }

    #[inline]
    #[must_use]
    pub fn is_enemy(&self, sq: Square, color: Color) -> bool {
        self.color_at(sq) == Some(color.opponent())
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn has_king_moved(&self, color: Color) -> bool {
        self.king_moved[color.index()]
    }

    /// Square of `color`'s king. Positions produced by this crate always have
    /// exactly one king per side.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some((color, Piece::King)))
    }

    /// Iterate over occupied squares in rank-major order from a8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|(color, piece)| (sq, color, piece)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Text diagram with rank numbers on both sides and files along top and bottom.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                let c = match self.squares[row][col] {
                    Some((color, piece)) => piece.to_fen_char(color),
                    None => '.',
                };
                write!(f, "{c} ")?;
            }
            writeln!(f, "{}", 8 - row)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}
