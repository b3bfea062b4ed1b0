use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    /// Pushes through empty squares (two from the start row) and diagonal
    /// captures onto enemy pieces. Moves onto the last row carry the
    /// promotion tag.
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();
        let tagged = |to: Square| {
            if to.row() == color.promotion_row() {
                Move::promotion(from, to)
            } else {
                Move::normal(from, to)
            }
        };

        if let Some(one) = from.offset(dir, 0).filter(|&sq| self.is_empty(sq)) {
            moves.push(tagged(one));
            if from.row() == color.pawn_start_row() {
                if let Some(two) = one.offset(dir, 0).filter(|&sq| self.is_empty(sq)) {
                    moves.push(tagged(two));
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(target) = from.offset(dir, dc) {
                if self.is_enemy(target, color) {
                    moves.push(tagged(target));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{BoardBuilder, Color, MoveKind, MoveList, Piece, Square};

    #[test]
    fn test_start_row_double_push() {
        let board = BoardBuilder::new()
            .piece(Square(6, 4), Color::White, Piece::Pawn)
            .build();
        let mut moves = MoveList::new();
        board.generate_pawn_moves(Square(6, 4), Color::White, &mut moves);
        let targets: Vec<Square> = moves.iter().map(|mv| mv.to()).collect();
        assert_eq!(targets, vec![Square(5, 4), Square(4, 4)]);
    }

    #[test]
    fn test_blocked_pawn_has_no_push() {
        let board = BoardBuilder::new()
            .piece(Square(1, 3), Color::Black, Piece::Pawn)
            .piece(Square(2, 3), Color::White, Piece::Knight)
            .piece(Square(2, 4), Color::White, Piece::Knight)
            .build();
        let mut moves = MoveList::new();
        board.generate_pawn_moves(Square(1, 3), Color::Black, &mut moves);
        let targets: Vec<Square> = moves.iter().map(|mv| mv.to()).collect();
        assert_eq!(targets, vec![Square(2, 4)]);
    }

    #[test]
    fn test_double_push_needs_both_squares_empty() {
        let board = BoardBuilder::new()
            .piece(Square(6, 0), Color::White, Piece::Pawn)
            .piece(Square(4, 0), Color::Black, Piece::Rook)
            .build();
        let mut moves = MoveList::new();
        board.generate_pawn_moves(Square(6, 0), Color::White, &mut moves);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to(), Square(5, 0));
    }

    #[test]
    fn test_last_row_tagged_as_promotion() {
        let board = BoardBuilder::new()
            .piece(Square(1, 0), Color::White, Piece::Pawn)
            .piece(Square(0, 1), Color::Black, Piece::Rook)
            .build();
        let mut moves = MoveList::new();
        board.generate_pawn_moves(Square(1, 0), Color::White, &mut moves);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|mv| mv.kind() == MoveKind::Promotion));
    }

    #[test]
    fn test_no_capture_of_own_piece() {
        let board = BoardBuilder::new()
            .piece(Square(6, 4), Color::White, Piece::Pawn)
            .piece(Square(5, 3), Color::White, Piece::Knight)
            .piece(Square(5, 5), Color::Black, Piece::Knight)
            .build();
        let mut moves = MoveList::new();
        board.generate_pawn_moves(Square(6, 4), Color::White, &mut moves);
        assert!(moves.iter().all(|mv| mv.to() != Square(5, 3)));
        assert!(moves.iter().any(|mv| mv.to() == Square(5, 5)));
    }
}
