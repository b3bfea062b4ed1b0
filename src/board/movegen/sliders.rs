use super::super::{Board, Color, Move, MoveList, Square};

impl Board {
    /// Walk each ray outward: empty squares are added and passed through, an
    /// enemy piece is added and ends the ray, an own piece ends it unadded.
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(dr, dc) in directions {
            let mut current = from;
            while let Some(to) = current.offset(dr, dc) {
                match self.color_at(to) {
                    None => moves.push(Move::normal(from, to)),
                    Some(occupant) if occupant == color => break,
                    Some(_) => {
                        moves.push(Move::normal(from, to));
                        break;
                    }
                }
                current = to;
            }
        }
    }
}
