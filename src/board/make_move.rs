//! Validated move application.
//!
//! Every move is first played on a scratch copy of the board. The copy only
//! replaces `self` once all checks pass, so a rejected move leaves the board
//! exactly as it was.

use log::trace;

use super::error::MoveError;
use super::{Board, Color, Move, MoveKind, Piece, Square};

impl Board {
    /// Which side a move castles to, if it is a castle.
    ///
    /// A castle tag decides it; an untagged king move of two files from its
    /// home square is read as the matching castle.
    fn castle_side(&self, mv: Move) -> Option<bool> {
        match mv.kind() {
            MoveKind::CastleKingside => Some(true),
            MoveKind::CastleQueenside => Some(false),
            MoveKind::Promotion => None,
            MoveKind::Normal => {
                let (color, piece) = self.piece_at(mv.from())?;
                let from = mv.from();
                let to = mv.to();
                let home = Square(color.back_row(), 4);
                if piece == Piece::King && from == home && to.row() == from.row() && from.col().abs_diff(to.col()) == 2 {
                    Some(to.col() > from.col())
                } else {
                    None
                }
            }
        }
    }

    /// Relocate the moving piece with no legality checks.
    ///
    /// Castles also move the matching rook and a pawn reaching its last row
    /// becomes a queen. Castling rights and king-moved flags are untouched.
    pub(crate) fn play_unchecked(&mut self, mv: Move) {
        let castle = self.castle_side(mv);
        self.relocate(mv, castle);
    }

    /// Play a move already known to be legal, keeping castling bookkeeping.
    pub(crate) fn play_legal(&mut self, mv: Move) {
        let Some((color, piece)) = self.piece_at(mv.from()) else {
            return;
        };
        self.play_unchecked(mv);
        self.update_castling_state(mv, color, piece);
    }

    fn relocate(&mut self, mv: Move, castle: Option<bool>) {
        let (from, to) = (mv.from(), mv.to());
        let Some((color, piece)) = self.piece_at(from) else {
            return;
        };

        self.clear_square(from);
        let placed = if piece == Piece::Pawn && to.row() == color.promotion_row() {
            Piece::Queen
        } else {
            piece
        };
        self.set_piece(to, color, placed);

        if let Some(kingside) = castle {
            let row = from.row();
            let (rook_from, rook_to) = if kingside { (7, 5) } else { (0, 3) };
            if let Some((rook_color, rook)) = self.piece_at(Square(row, rook_from)) {
                self.clear_square(Square(row, rook_from));
                self.set_piece(Square(row, rook_to), rook_color, rook);
            }
        }
    }

    /// Clear rights and set flags after `piece` of `color` played `mv`.
    fn update_castling_state(&mut self, mv: Move, color: Color, piece: Piece) {
        match piece {
            Piece::King => {
                self.king_moved[color.index()] = true;
                self.castling_rights.remove_color(color);
            }
            Piece::Rook if mv.from().row() == color.back_row() => match mv.from().col() {
                0 => self.castling_rights.remove(color, false),
                7 => self.castling_rights.remove(color, true),
                _ => {}
            },
            _ => {}
        }

        // capturing a rook on its home corner takes the right with it
        let enemy = color.opponent();
        if mv.to().row() == enemy.back_row() {
            match mv.to().col() {
                0 => self.castling_rights.remove(enemy, false),
                7 => self.castling_rights.remove(enemy, true),
                _ => {}
            }
        }
    }

    /// Apply `mv` for whichever side owns the piece on its source square.
    ///
    /// Fails if a square is off the board, the source is empty, a castle is
    /// not allowed, or the mover's king would be left attacked. On failure
    /// the board is unchanged.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        if !mv.is_on_board() {
            return Err(MoveError::OutOfBounds);
        }
        let Some((color, piece)) = self.piece_at(mv.from()) else {
            return Err(MoveError::EmptySquare { square: mv.from() });
        };

        let castle = self.castle_side(mv);
        if let Some(kingside) = castle {
            let row = color.back_row();
            let expected_to = Square(row, if kingside { 6 } else { 2 });
            if piece != Piece::King
                || mv.from() != Square(row, 4)
                || mv.to() != expected_to
                || !self.can_castle(color, kingside)
            {
                trace!("rejected castle {mv:?} for {color}");
                return Err(MoveError::IllegalCastle { kingside });
            }
        }

        let mut trial = self.clone();
        trial.relocate(mv, castle);
        if trial.is_in_check(color) {
            trace!("rejected {mv:?}: {color} king left in check");
            return Err(MoveError::LeavesKingInCheck);
        }

        trial.update_castling_state(mv, color, piece);
        *self = trial;
        Ok(())
    }

    /// Shell-level move: `from`-`to` must be one of `color`'s legal moves.
    ///
    /// Returns the matched move (with its special tag) after applying it.
    pub fn try_move(&mut self, color: Color, from: Square, to: Square) -> Result<Move, MoveError> {
        match self.piece_at(from) {
            None => return Err(MoveError::EmptySquare { square: from }),
            Some((owner, _)) if owner != color => {
                return Err(MoveError::WrongSide {
                    square: from,
                    expected: color,
                })
            }
            Some(_) => {}
        }
        let mv = self
            .find_legal_move(color, from, to)
            .ok_or(MoveError::NotLegal { from, to })?;
        self.apply_move(mv)?;
        Ok(mv)
    }
}
