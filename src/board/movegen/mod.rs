//! Move generation.
//!
//! Pseudo-legal moves are produced square by square in rank-major order
//! starting at a8, so two calls on the same board always yield the same
//! sequence. `legal_moves` then drops every move that would leave the
//! mover's king attacked.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attacks::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    /// All pseudo-legal moves for `color`. Own-king exposure is ignored.
    pub(crate) fn generate_pseudo_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (from, piece_color, piece) in self.pieces() {
            if piece_color == color {
                self.generate_piece_moves(from, color, piece, &mut moves);
            }
        }
        moves
    }

    fn generate_piece_moves(&self, from: Square, color: Color, piece: Piece, moves: &mut MoveList) {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, moves),
            Piece::Knight => self.generate_knight_moves(from, color, moves),
            Piece::Bishop => self.generate_sliding_moves(from, color, &BISHOP_DIRECTIONS, moves),
            Piece::Rook => self.generate_sliding_moves(from, color, &ROOK_DIRECTIONS, moves),
            Piece::Queen => {
                self.generate_sliding_moves(from, color, &ROOK_DIRECTIONS, moves);
                self.generate_sliding_moves(from, color, &BISHOP_DIRECTIONS, moves);
            }
            Piece::King => self.generate_king_moves(from, color, moves),
        }
    }

    /// Whether playing `mv` would leave `color`'s king attacked.
    fn exposes_king(&self, mv: Move, color: Color) -> bool {
        let mut trial = self.clone();
        trial.play_unchecked(mv);
        trial.is_in_check(color)
    }

    /// Legal moves for `color` in deterministic generation order.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> MoveList {
        let mut moves = self.generate_pseudo_moves(color);
        moves.retain(|mv| !self.exposes_king(*mv, color));
        moves
    }

    /// True if `color` has at least one legal move. Stops at the first one.
    #[must_use]
    pub fn has_legal_moves(&self, color: Color) -> bool {
        self.generate_pseudo_moves(color)
            .iter()
            .any(|mv| !self.exposes_king(*mv, color))
    }

    /// The legal move of `color` going from `from` to `to`, if there is one.
    #[must_use]
    pub fn find_legal_move(&self, color: Color, from: Square, to: Square) -> Option<Move> {
        self.legal_moves(color)
            .into_iter()
            .find(|mv| mv.from() == from && mv.to() == to)
    }

    /// Count leaf nodes of the legal move tree, sides alternating from `color`.
    #[must_use]
    pub fn perft(&self, color: Color, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves(color);
        if depth == 1 {
            return moves.len() as u64;
        }
        moves
            .iter()
            .map(|mv| {
                let mut child = self.clone();
                child.play_legal(*mv);
                child.perft(color.opponent(), depth - 1)
            })
            .sum()
    }
}
