use super::super::attacks::KING_TARGETS;
use super::super::{Board, Color, Move, MoveList, Piece, Square};

const KING_HOME_COL: usize = 4;

impl Board {
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &to in &KING_TARGETS[from.as_index()] {
            if !self.is_ally(to, color) {
                moves.push(Move::normal(from, to));
            }
        }

        if self.has_king_moved(color) {
            return;
        }
        let row = color.back_row();
        if self.can_castle(color, true) {
            moves.push(Move::castle_kingside(from, Square(row, 6)));
        }
        if self.can_castle(color, false) {
            moves.push(Move::castle_queenside(from, Square(row, 2)));
        }
    }

    /// Castling eligibility: the right is still held, king and rook stand on
    /// their home squares, the squares between them are empty, the king is
    /// not in check and does not cross or land on an attacked square.
    #[must_use]
    pub fn can_castle(&self, color: Color, kingside: bool) -> bool {
        if self.has_king_moved(color) || !self.castling_rights.has(color, kingside) {
            return false;
        }

        let row = color.back_row();
        let rook_col = if kingside { 7 } else { 0 };
        if self.piece_at(Square(row, KING_HOME_COL)) != Some((color, Piece::King))
            || self.piece_at(Square(row, rook_col)) != Some((color, Piece::Rook))
        {
            return false;
        }

        let (between, king_path): (&[usize], &[usize]) = if kingside {
            (&[5, 6], &[5, 6])
        } else {
            (&[1, 2, 3], &[3, 2])
        };
        if between.iter().any(|&col| !self.is_empty(Square(row, col))) {
            return false;
        }

        let enemy = color.opponent();
        if self.is_square_attacked(Square(row, KING_HOME_COL), enemy) {
            return false;
        }
        !king_path
            .iter()
            .any(|&col| self.is_square_attacked(Square(row, col), enemy))
    }
}
