//! Shared application state for the scoreboard API server.
//!
//! [`AppState`] holds the `SQLite` pool, the immutable team directory,
//! and the score-freeze flag. The pool is the only cross-request shared
//! state with history; the freeze flag is a single atomic toggle flipped
//! by the operator endpoints.

use std::sync::atomic::{AtomicBool, Ordering};

use benchboard_db::SqlitePool;
use benchboard_types::TeamDirectory;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor. The team directory is built once from configuration and
/// never mutated afterwards.
pub struct AppState {
    /// Connection pool to the score event store.
    pub db: SqlitePool,
    /// Lookup table from team identifier to display name.
    pub teams: TeamDirectory,
    /// When set, submissions are accepted but discarded.
    frozen: AtomicBool,
}

impl AppState {
    /// Create application state from its collaborators.
    ///
    /// `frozen` seeds the score-freeze flag from configuration; the
    /// operator endpoints can flip it at runtime.
    pub const fn new(db: SqlitePool, teams: TeamDirectory, frozen: bool) -> Self {
        Self {
            db,
            teams,
            frozen: AtomicBool::new(frozen),
        }
    }

    /// Whether the score freeze is currently active.
    ///
    /// Relaxed ordering is sufficient: the flag is an operator toggle,
    /// not a synchronization point between requests.
    pub fn is_frozen(&self) -> bool {
        self.frozen.load(Ordering::Relaxed)
    }

    /// Set the score freeze flag, returning the previous value.
    pub fn set_frozen(&self, frozen: bool) -> bool {
        self.frozen.swap(frozen, Ordering::Relaxed)
    }
}
