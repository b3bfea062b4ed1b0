//! Move types and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// Special-move tag carried by every `Move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    #[default]
    Normal,
    CastleKingside,
    CastleQueenside,
    /// Pawn reaching the last rank; always becomes a queen.
    Promotion,
}

/// A move from one square to another plus its special tag.
///
/// Moves are plain values: they hold no reference to the board they were
/// generated from and are never mutated after construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    from: Square,
    to: Square,
    kind: MoveKind,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Move { from, to, kind }
    }

    /// Create a plain move with no special tag
    #[inline]
    #[must_use]
    pub const fn normal(from: Square, to: Square) -> Self {
        Move::new(from, to, MoveKind::Normal)
    }

    /// Create a kingside castle move (king's from/to squares)
    #[inline]
    #[must_use]
    pub const fn castle_kingside(from: Square, to: Square) -> Self {
        Move::new(from, to, MoveKind::CastleKingside)
    }

    /// Create a queenside castle move (king's from/to squares)
    #[inline]
    #[must_use]
    pub const fn castle_queenside(from: Square, to: Square) -> Self {
        Move::new(from, to, MoveKind::CastleQueenside)
    }

    /// Create a pawn move onto the last rank
    #[inline]
    #[must_use]
    pub const fn promotion(from: Square, to: Square) -> Self {
        Move::new(from, to, MoveKind::Promotion)
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        self.to
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    /// Returns true if this move is castling (kingside or queenside)
    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        matches!(
            self.kind,
            MoveKind::CastleKingside | MoveKind::CastleQueenside
        )
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        matches!(self.kind, MoveKind::Promotion)
    }

    /// Returns true if both squares lie on the board
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.from.is_valid() && self.to.is_valid()
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        match self.kind {
            MoveKind::Normal => {}
            MoveKind::CastleKingside => write!(f, " O-O")?,
            MoveKind::CastleQueenside => write!(f, " O-O-O")?,
            MoveKind::Promotion => write!(f, "=Q")?,
        }
        write!(f, ")")
    }
}

/// Renders the move the way the console expects it: two square tokens
/// separated by a space, e.g. `e2 e4`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

pub(crate) const MAX_MOVES: usize = 256;
pub(crate) const EMPTY_MOVE: Move = Move::normal(Square(0, 0), Square(0, 0));

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        if idx < self.len {
            Some(self.moves[idx])
        } else {
            None
        }
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.as_slice().contains(mv)
    }

    /// Keep only the moves for which `keep` returns true, preserving order
    pub(crate) fn retain(&mut self, mut keep: impl FnMut(&Move) -> bool) {
        let mut write = 0;
        for read in 0..self.len {
            let mv = self.moves[read];
            if keep(&mv) {
                self.moves[write] = mv;
                write += 1;
            }
        }
        self.len = write;
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl PartialEq for MoveList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

/// A scored move for move ordering.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

/// Fixed-size list of scored moves to avoid heap allocation.
#[derive(Clone, Debug)]
pub(crate) struct ScoredMoveList {
    moves: [ScoredMove; MAX_MOVES],
    len: usize,
}

impl ScoredMoveList {
    #[must_use]
    pub fn new() -> Self {
        ScoredMoveList {
            moves: [ScoredMove {
                mv: EMPTY_MOVE,
                score: 0,
            }; MAX_MOVES],
            len: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move, score: i32) {
        self.moves[self.len] = ScoredMove { mv, score };
        self.len += 1;
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ScoredMove] {
        &self.moves[..self.len]
    }

    /// Sort moves by score in descending order. Equal scores keep their
    /// generation order.
    pub fn sort_by_score_desc(&mut self) {
        self.moves[..self.len].sort_by(|a, b| b.score.cmp(&a.score));
    }

    /// Drop the scores, keeping the current order
    #[must_use]
    pub fn into_moves(self) -> MoveList {
        let mut list = MoveList::new();
        for scored in self.as_slice() {
            list.push(scored.mv);
        }
        list
    }
}

impl Default for ScoredMoveList {
    fn default() -> Self {
        ScoredMoveList::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display_uses_two_tokens() {
        let mv = Move::normal(Square(6, 4), Square(4, 4));
        assert_eq!(mv.to_string(), "e2 e4");
        assert_eq!(format!("{mv:?}"), "Move(e2e4)");
    }

    #[test]
    fn test_move_kind_queries() {
        let castle = Move::castle_kingside(Square(7, 4), Square(7, 6));
        assert!(castle.is_castling());
        assert!(!castle.is_promotion());
        let promo = Move::promotion(Square(1, 0), Square(0, 0));
        assert!(promo.is_promotion());
        assert_eq!(promo.kind(), MoveKind::Promotion);
        assert!(!Move::normal(Square(8, 0), Square(0, 0)).is_on_board());
    }

    #[test]
    fn test_retain_preserves_order() {
        let mut list = MoveList::new();
        for col in 0..5 {
            list.push(Move::normal(Square(6, col), Square(5, col)));
        }
        list.retain(|mv| mv.from().col() % 2 == 0);
        let cols: Vec<usize> = list.iter().map(|mv| mv.from().col()).collect();
        assert_eq!(cols, vec![0, 2, 4]);
    }

    #[test]
    fn test_scored_sort_is_stable() {
        let mut scored = ScoredMoveList::new();
        let a = Move::normal(Square(6, 0), Square(5, 0));
        let b = Move::normal(Square(6, 1), Square(5, 1));
        let c = Move::normal(Square(6, 2), Square(5, 2));
        scored.push(a, 0);
        scored.push(b, 10);
        scored.push(c, 0);
        scored.sort_by_score_desc();
        let order: Vec<Move> = scored.into_moves().into_iter().collect();
        assert_eq!(order, vec![b, a, c]);
    }
}
