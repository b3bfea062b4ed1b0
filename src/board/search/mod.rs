//! Search module implementing minimax with alpha-beta pruning.
//!
//! Features:
//! - Fixed-depth minimax over board clones
//! - One-ply check extension at the root
//! - Mate-in-one shortcut
//! - Move ordering (mate first, checks, MVV-LVA)
//! - Stalemate avoidance: lines that stalemate the opponent are skipped
//! - Cooperative cancellation through an `AtomicBool`

mod alphabeta;
pub(crate) mod constants;
mod move_order;
mod params;

use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use super::{Board, Color, Move};
pub use constants::MATE_SCORE;
pub use params::{SearchParams, DEFAULT_DEPTH};

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move; `None` only when the side had no legal move
    pub best_move: Option<Move>,
    /// Minimax value of `best_move`, White-positive. `None` when the move
    /// is a fallback that was never scored
    pub score: Option<i32>,
    /// Depth actually searched, including any check extension
    pub depth: u32,
    /// Nodes visited
    pub nodes: u64,
    /// Whether the search was cut short by the stop flag
    pub stopped: bool,
}

/// Statistics tracked during search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

impl SearchStats {
    pub fn reset(&mut self) {
        *self = SearchStats::default();
    }
}

/// Fixed-depth searcher. Holds no board state; every call to [`search`]
/// works on clones of the board it is given.
///
/// [`search`]: Searcher::search
pub struct Searcher<'a> {
    params: SearchParams,
    stop: Option<&'a AtomicBool>,
    stats: SearchStats,
}

impl Default for Searcher<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Searcher<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_params(SearchParams::default())
    }

    #[must_use]
    pub fn with_params(params: SearchParams) -> Self {
        Searcher {
            params,
            stop: None,
            stats: SearchStats::default(),
        }
    }

    /// Check `stop` between sibling moves at every ply.
    #[must_use]
    pub fn with_stop(mut self, stop: &'a AtomicBool) -> Self {
        self.stop = Some(stop);
        self
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Statistics of the most recent search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn should_stop(&self) -> bool {
        self.stop.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Pick a move for `side`.
    ///
    /// Always returns a legal move when one exists: if the search is stopped
    /// before any candidate is scored, or every candidate is skipped, the
    /// first legal move in generation order is returned.
    pub fn search(&mut self, board: &Board, side: Color) -> SearchResult {
        let start = Instant::now();
        self.stats.reset();

        let mut depth = self.params.depth;
        if self.params.check_extension && board.is_in_check(side) {
            depth += 1;
        }

        let moves = board.legal_moves(side);
        let Some(first_legal) = moves.first() else {
            debug!("search: {side} has no legal move");
            return SearchResult {
                best_move: None,
                score: None,
                depth,
                nodes: 0,
                stopped: false,
            };
        };

        let enemy = side.opponent();
        if self.params.mate_shortcut {
            for &mv in &moves {
                let mut child = board.clone();
                if child.apply_move(mv).is_ok() && child.is_checkmate(enemy) {
                    debug!("search: mate in one {mv:?} for {side}");
                    return SearchResult {
                        best_move: Some(mv),
                        score: Some(side.sign() * MATE_SCORE),
                        depth,
                        nodes: self.stats.nodes,
                        stopped: false,
                    };
                }
            }
        }

        let maximizing = side == Color::White;
        let ordered = move_order::order_moves(board, &moves);
        let mut best: Option<(Move, i32)> = None;
        let mut stopped = false;

        for &mv in &ordered {
            if self.should_stop() {
                stopped = true;
                break;
            }
            let mut child = board.clone();
            if child.apply_move(mv).is_err() {
                continue;
            }
            if self.params.avoid_stalemate && child.is_stalemate(enemy) {
                continue;
            }

            let value = self.minimax(
                &child,
                depth.saturating_sub(1),
                i32::MIN,
                i32::MAX,
                !maximizing,
            );
            // a subtree cut short by the stop flag has no usable value
            if self.should_stop() {
                stopped = true;
                break;
            }

            let improves = best.map_or(true, |(_, best_value)| {
                if maximizing {
                    value > best_value
                } else {
                    value < best_value
                }
            });
            if improves {
                best = Some((mv, value));
            }
        }

        let (best_move, score) = match best {
            Some((mv, value)) => (mv, Some(value)),
            None => (first_legal, None),
        };

        debug!(
            "search: side {side} depth {depth} nodes {} cutoffs {} best {best_move:?} score {score:?} stopped {stopped} in {:?}",
            self.stats.nodes,
            self.stats.cutoffs,
            start.elapsed()
        );

        SearchResult {
            best_move: Some(best_move),
            score,
            depth,
            nodes: self.stats.nodes,
            stopped,
        }
    }
}

/// Best move for `side` searched `depth` plies deep with default parameters.
///
/// Returns `None` only when `side` has no legal move.
///
/// # Examples
///
/// ```
/// use minimax_chess::board::{find_best_move, Board, Color};
///
/// let board = Board::new();
/// let mv = find_best_move(&board, Color::White, 1).unwrap();
/// assert!(board.legal_moves(Color::White).contains(&mv));
/// ```
#[must_use]
pub fn find_best_move(board: &Board, side: Color, depth: u32) -> Option<Move> {
    let params = SearchParams {
        depth,
        ..SearchParams::default()
    };
    Searcher::with_params(params).search(board, side).best_move
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, Piece, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn back_rank_position() -> Board {
        BoardBuilder::new()
            .piece(sq("h1"), Color::White, Piece::King)
            .piece(sq("e1"), Color::White, Piece::Rook)
            .piece(sq("g8"), Color::Black, Piece::King)
            .piece(sq("f7"), Color::Black, Piece::Pawn)
            .piece(sq("g7"), Color::Black, Piece::Pawn)
            .piece(sq("h7"), Color::Black, Piece::Pawn)
            .build()
    }

    #[test]
    fn test_mate_shortcut_scores_mate() {
        let board = back_rank_position();
        let result = Searcher::new().search(&board, Color::White);
        assert_eq!(result.best_move, Some(Move::normal(sq("e1"), sq("e8"))));
        assert_eq!(result.score, Some(MATE_SCORE));
        assert!(!result.stopped);
    }

    #[test]
    fn test_mate_found_without_shortcut() {
        let board = back_rank_position();
        let params = SearchParams {
            depth: 1,
            mate_shortcut: false,
            ..SearchParams::default()
        };
        let result = Searcher::with_params(params).search(&board, Color::White);
        assert_eq!(result.best_move, Some(Move::normal(sq("e1"), sq("e8"))));
        assert_eq!(result.score, Some(MATE_SCORE));
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_no_legal_move_returns_none() {
        let board = BoardBuilder::new()
            .piece(sq("a8"), Color::Black, Piece::King)
            .piece(sq("a7"), Color::White, Piece::Pawn)
            .piece(sq("b6"), Color::White, Piece::King)
            .build();
        let result = Searcher::new().search(&board, Color::Black);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, None);
        assert_eq!(find_best_move(&board, Color::Black, 3), None);
    }

    #[test]
    fn test_check_extends_depth() {
        let board = BoardBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("e8"), Color::Black, Piece::Rook)
            .piece(sq("a8"), Color::Black, Piece::King)
            .build();
        let params = SearchParams {
            depth: 1,
            ..SearchParams::default()
        };
        let result = Searcher::with_params(params.clone()).search(&board, Color::White);
        assert_eq!(result.depth, 2);

        let result = Searcher::with_params(SearchParams {
            check_extension: false,
            ..params
        })
        .search(&board, Color::White);
        assert_eq!(result.depth, 1);
    }

    #[test]
    fn test_preset_stop_falls_back_to_first_legal() {
        let board = Board::new();
        let stop = AtomicBool::new(true);
        let mut searcher = Searcher::new().with_stop(&stop);
        let result = searcher.search(&board, Color::White);
        assert!(result.stopped);
        assert_eq!(result.score, None);
        assert_eq!(result.best_move, board.legal_moves(Color::White).first());
    }

    #[test]
    fn test_search_does_not_touch_board() {
        let board = Board::new();
        let before = board.clone();
        let _ = find_best_move(&board, Color::White, 2);
        assert_eq!(board, before);
    }

    #[test]
    fn test_stats_count_nodes() {
        let board = Board::new();
        let params = SearchParams {
            depth: 2,
            ..SearchParams::default()
        };
        let mut searcher = Searcher::with_params(params);
        let result = searcher.search(&board, Color::White);
        assert_eq!(result.nodes, searcher.stats().nodes);
        // 20 root replies, each with at least one node below
        assert!(result.nodes >= 20);
    }
}
