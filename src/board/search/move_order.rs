//! Move ordering for search.
//!
//! Captures are scored most-valuable-victim / least-valuable-attacker, checks
//! get a flat bonus and mating moves go first. The sort is stable, so equal
//! scores keep generation order and identical inputs always order the same.

use super::constants::{CHECK_BONUS, MATING_MOVE_SCORE, MVV_LVA_MULTIPLIER};
use crate::board::{Board, Move, MoveList, ScoredMoveList};

/// Ordering score of `mv` on `board`.
pub(crate) fn score_move(board: &Board, mv: Move) -> i32 {
    let Some((color, attacker)) = board.piece_at(mv.from()) else {
        return 0;
    };

    let mut score = match board.piece_at(mv.to()) {
        Some((_, victim)) => MVV_LVA_MULTIPLIER * victim.value() - attacker.value(),
        None => 0,
    };

    let mut child = board.clone();
    if child.apply_move(mv).is_ok() {
        let enemy = color.opponent();
        if child.is_in_check(enemy) {
            score += CHECK_BONUS;
            if !child.has_legal_moves(enemy) {
                score = MATING_MOVE_SCORE;
            }
        }
    }
    score
}

/// Return `moves` sorted by descending ordering score.
pub(crate) fn order_moves(board: &Board, moves: &MoveList) -> MoveList {
    let mut scored = ScoredMoveList::new();
    for &mv in moves {
        scored.push(mv, score_move(board, mv));
    }
    scored.sort_by_score_desc();
    scored.into_moves()
}
