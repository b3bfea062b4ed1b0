use super::super::attacks::KNIGHT_TARGETS;
use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &to in &KNIGHT_TARGETS[from.as_index()] {
            if !self.is_ally(to, color) {
                moves.push(Move::normal(from, to));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Color, MoveList, Square};

    #[test]
    fn test_start_knight_jumps() {
        let board = Board::new();
        let mut moves = MoveList::new();
        board.generate_knight_moves(Square(7, 1), Color::White, &mut moves);
        let targets: Vec<Square> = moves.iter().map(|mv| mv.to()).collect();
        assert_eq!(targets, vec![Square(5, 2), Square(5, 0)]);
    }
}
