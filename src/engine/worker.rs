//! Background search worker.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::debug;
use parking_lot::Mutex;

use crate::board::{Board, Color, SearchParams, SearchResult, Searcher};

/// Search thread stack size (8 MB); recursion depth is the search depth
const SEARCH_STACK_SIZE: usize = 8 * 1024 * 1024;

/// A search running on its own thread.
///
/// The searcher checks the shared stop flag between sibling moves, so
/// [`signal_stop`](SearchWorker::signal_stop) takes effect within one move
/// at the deepest ply.
pub struct SearchWorker {
    stop: Arc<AtomicBool>,
    result: Arc<Mutex<Option<SearchResult>>>,
    handle: JoinHandle<()>,
}

impl SearchWorker {
    /// Start searching `board` for `side` on a new thread.
    ///
    /// The board is moved into the worker; the caller keeps its own copy.
    pub fn spawn(board: Board, side: Color, params: SearchParams) -> io::Result<Self> {
        let stop = Arc::new(AtomicBool::new(false));
        let result = Arc::new(Mutex::new(None));

        let stop_clone = Arc::clone(&stop);
        let result_clone = Arc::clone(&result);
        let handle = thread::Builder::new()
            .name("search".to_string())
            .stack_size(SEARCH_STACK_SIZE)
            .spawn(move || {
                let outcome = Searcher::with_params(params)
                    .with_stop(&stop_clone)
                    .search(&board, side);
                *result_clone.lock() = Some(outcome);
            })?;

        debug!("search worker started for {side}");
        Ok(SearchWorker {
            stop,
            result,
            handle,
        })
    }

    /// Signal stop without waiting
    pub fn signal_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Whether the search thread has finished
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// The result, if the search has already published one
    #[must_use]
    pub fn result(&self) -> Option<SearchResult> {
        *self.result.lock()
    }

    /// Block until the search completes and return its result.
    ///
    /// Returns `None` only if the search thread panicked.
    pub fn wait(self) -> Option<SearchResult> {
        if self.handle.join().is_err() {
            debug!("search worker panicked");
            return None;
        }
        self.result.lock().take()
    }

    /// Stop the search and wait for the thread to finish
    pub fn stop_and_wait(self) -> Option<SearchResult> {
        self.signal_stop();
        self.wait()
    }
}
