//! Attack detection.
//!
//! `is_square_attacked` is the one query behind check detection and the
//! castling-transit safety test. Knight and king target lists are computed
//! once per process; sliding rays are walked on the fly.

use once_cell::sync::Lazy;

use super::{Board, Color, Piece, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];

pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (-1, -1), (-1, 1), (1, -1)];

fn leaper_targets(offsets: &[(isize, isize); 8]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        offsets
            .iter()
            .filter_map(|&(dr, dc)| from.offset(dr, dc))
            .collect()
    })
}

/// On-board knight destinations per square, in `KNIGHT_OFFSETS` order.
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| leaper_targets(&KNIGHT_OFFSETS));

/// On-board king destinations per square, in `KING_OFFSETS` order.
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| leaper_targets(&KING_OFFSETS));

impl Board {
    /// First piece met walking from `from` (exclusive) along `(dr, dc)`.
    fn first_piece_on_ray(&self, from: Square, dr: isize, dc: isize) -> Option<(Color, Piece)> {
        let mut sq = from;
        while let Some(next) = sq.offset(dr, dc) {
            if let Some(occupant) = self.piece_at(next) {
                return Some(occupant);
            }
            sq = next;
        }
        None
    }

    /// Whether any piece of `by` attacks `square`. Pure query.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        // Pawns of `by` capture toward `pawn_direction`, so an attacker sits
        // one row behind the target.
        let behind = -by.pawn_direction();
        for dc in [-1, 1] {
            if let Some(sq) = square.offset(behind, dc) {
                if self.piece_at(sq) == Some((by, Piece::Pawn)) {
                    return true;
                }
            }
        }

        if KNIGHT_TARGETS[square.as_index()]
            .iter()
            .any(|&sq| self.piece_at(sq) == Some((by, Piece::Knight)))
        {
            return true;
        }

        for &(dr, dc) in &ROOK_DIRECTIONS {
            if let Some((color, piece)) = self.first_piece_on_ray(square, dr, dc) {
                if color == by && matches!(piece, Piece::Rook | Piece::Queen) {
                    return true;
                }
            }
        }

        for &(dr, dc) in &BISHOP_DIRECTIONS {
            if let Some((color, piece)) = self.first_piece_on_ray(square, dr, dc) {
                if color == by && matches!(piece, Piece::Bishop | Piece::Queen) {
                    return true;
                }
            }
        }

        KING_TARGETS[square.as_index()]
            .iter()
            .any(|&sq| self.piece_at(sq) == Some((by, Piece::King)))
    }
}
