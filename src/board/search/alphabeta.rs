//! Recursive minimax with alpha-beta pruning.

use super::move_order::order_moves;
use super::{Searcher, MATE_SCORE};
use crate::board::{Board, Color};

impl Searcher<'_> {
    /// Value of `board` with `depth` plies left, White-positive.
    ///
    /// `maximizing` is true when White is to move. A checkmated side to move
    /// scores `MATE_SCORE` in the winner's favor; exhausted depth and
    /// stalemate fall through to the static evaluation.
    pub(super) fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats.nodes += 1;
        let side = if maximizing { Color::White } else { Color::Black };
        let mated = if maximizing { -MATE_SCORE } else { MATE_SCORE };

        if depth == 0 {
            return if board.is_checkmate(side) {
                mated
            } else {
                board.evaluate()
            };
        }

        let moves = board.legal_moves(side);
        if moves.is_empty() {
            return if board.is_in_check(side) {
                mated
            } else {
                board.evaluate()
            };
        }

        let enemy = side.opponent();
        let mut best: Option<i32> = None;
        for &mv in &order_moves(board, &moves) {
            if self.should_stop() {
                break;
            }
            let mut child = board.clone();
            if child.apply_move(mv).is_err() {
                continue;
            }
            if self.params.avoid_stalemate && child.is_stalemate(enemy) {
                continue;
            }

            let value = self.minimax(&child, depth - 1, alpha, beta, !maximizing);
            if maximizing {
                best = Some(best.map_or(value, |b| b.max(value)));
                alpha = alpha.max(value);
            } else {
                best = Some(best.map_or(value, |b| b.min(value)));
                beta = beta.min(value);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        // every candidate skipped
        best.unwrap_or(0)
    }
}
