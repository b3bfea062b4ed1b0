//! Check, checkmate and stalemate classification.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, Color};

/// State of the game from the point of view of the side to move.
///
/// For any position exactly one of these holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// The side to move has at least one legal move
    Ongoing,
    /// The side to move is in check with no legal move
    Checkmate { loser: Color },
    /// The side to move is not in check but has no legal move
    Stalemate,
}

impl Board {
    /// Whether `color`'s king is attacked. A board without that king is
    /// never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king_sq| self.is_square_attacked(king_sq, color.opponent()))
    }

    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_moves(color)
    }

    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_moves(color)
    }

    /// Classify the position for `color` to move.
    #[must_use]
    pub fn status(&self, color: Color) -> GameStatus {
        if self.has_legal_moves(color) {
            GameStatus::Ongoing
        } else if self.is_in_check(color) {
            GameStatus::Checkmate { loser: color }
        } else {
            GameStatus::Stalemate
        }
    }
}
