//! Static evaluation. Positive scores favor White.

use super::search::constants::{
    EVAL_BLACK_MATED, EVAL_WHITE_MATED, KING_SAFETY_PENALTY, MATERIAL_DIVISOR,
};
use super::{Board, Color};

/// Center-control weights by (row, col); zero on the edges and back ranks.
const CENTER_CONTROL: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 2, 3, 3, 2, 1, 0],
    [0, 2, 4, 6, 6, 4, 2, 0],
    [0, 3, 6, 9, 9, 6, 3, 0],
    [0, 3, 6, 9, 9, 6, 3, 0],
    [0, 2, 4, 6, 6, 4, 2, 0],
    [0, 1, 2, 3, 3, 2, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

impl Board {
    /// Material and center control, summed over occupied squares.
    pub(crate) fn material_and_position(&self) -> i32 {
        self.pieces()
            .map(|(sq, color, piece)| {
                color.sign() * (piece.value() / MATERIAL_DIVISOR + CENTER_CONTROL[sq.row()][sq.col()])
            })
            .sum()
    }

    /// Leaf score of the position.
    ///
    /// Mates map to near-extreme sentinels and any stalemate to exactly 0.
    /// Otherwise: material/10, center control, a flat penalty for the side in
    /// check, and the difference in legal move counts.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        let white_moves = self.legal_moves(Color::White).len() as i32;
        let black_moves = self.legal_moves(Color::Black).len() as i32;
        let white_in_check = self.is_in_check(Color::White);
        let black_in_check = self.is_in_check(Color::Black);

        if white_in_check && white_moves == 0 {
            return EVAL_WHITE_MATED;
        }
        if black_in_check && black_moves == 0 {
            return EVAL_BLACK_MATED;
        }
        if white_moves == 0 || black_moves == 0 {
            return 0;
        }

        let mut score = self.material_and_position();
        if white_in_check {
            score -= KING_SAFETY_PENALTY;
        }
        if black_in_check {
            score += KING_SAFETY_PENALTY;
        }
        score + (white_moves - black_moves)
    }
}
