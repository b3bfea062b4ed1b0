//! Engine controller implementation.

use std::io;

use log::{debug, info};

use super::worker::SearchWorker;
use crate::board::{
    Board, Color, GameStatus, Move, MoveError, SearchParams, SearchResult, Square,
};

/// Game state plus at most one background search.
///
/// Tracks whose turn it is, which the board itself does not.
pub struct EngineController {
    /// Current board position
    board: Board,
    /// Side to move
    side_to_move: Color,
    /// Parameters for every search started from here
    params: SearchParams,
    /// Active search job (if any)
    current_job: Option<SearchWorker>,
}

impl Default for EngineController {
    fn default() -> Self {
        Self::new(SearchParams::default())
    }
}

impl EngineController {
    /// Create a new engine controller at the starting position
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        EngineController {
            board: Board::new(),
            side_to_move: Color::White,
            params,
            current_job: None,
        }
    }

    /// Get a reference to the current board
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    pub fn set_depth(&mut self, depth: u32) {
        self.params.depth = depth;
    }

    /// Set the position and the side to move
    pub fn set_position(&mut self, board: Board, side_to_move: Color) {
        self.stop_search();
        self.board = board;
        self.side_to_move = side_to_move;
    }

    /// Reset the board to starting position
    pub fn new_game(&mut self) {
        self.set_position(Board::new(), Color::White);
    }

    /// Status for the side to move
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.board.status(self.side_to_move)
    }

    /// Play `from`-`to` for the side to move and pass the turn.
    pub fn play(&mut self, from: Square, to: Square) -> Result<Move, MoveError> {
        let mv = self.board.try_move(self.side_to_move, from, to)?;
        info!("{} played {mv}", self.side_to_move);
        self.side_to_move = self.side_to_move.opponent();
        Ok(mv)
    }

    /// Start a background search for the side to move, replacing any
    /// search already running.
    pub fn start_search(&mut self) -> io::Result<()> {
        self.stop_search();
        let worker =
            SearchWorker::spawn(self.board.clone(), self.side_to_move, self.params.clone())?;
        self.current_job = Some(worker);
        Ok(())
    }

    /// Check if there's an active search
    #[must_use]
    pub fn is_searching(&self) -> bool {
        self.current_job
            .as_ref()
            .is_some_and(|job| !job.is_finished())
    }

    /// Stop any active search and return what it found
    pub fn stop_search(&mut self) -> Option<SearchResult> {
        self.current_job.take().and_then(SearchWorker::stop_and_wait)
    }

    /// Wait for the active search to finish on its own
    pub fn wait_search(&mut self) -> Option<SearchResult> {
        self.current_job.take().and_then(SearchWorker::wait)
    }

    /// Search to completion and play the chosen move.
    ///
    /// Returns `Ok(None)` when the side to move has no legal move.
    pub fn think_and_play(&mut self) -> io::Result<Option<Move>> {
        self.start_search()?;
        let Some(result) = self.wait_search() else {
            return Err(io::Error::other("search thread panicked"));
        };
        let Some(mv) = result.best_move else {
            return Ok(None);
        };
        debug!(
            "engine chose {mv} (score {:?}, {} nodes)",
            result.score, result.nodes
        );
        self.board
            .apply_move(mv)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        info!("{} played {mv}", self.side_to_move);
        self.side_to_move = self.side_to_move.opponent();
        Ok(Some(mv))
    }
}
