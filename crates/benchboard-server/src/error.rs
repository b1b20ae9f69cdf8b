//! Error types for the scoreboard server binary.
//!
//! [`StartupError`] is the top-level error type that wraps all possible
//! failure modes during server startup.

/// Top-level error for the scoreboard server binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: benchboard_api::ConfigError,
    },

    /// Database connection or migration failed.
    #[error("database error: {source}")]
    Db {
        /// The underlying database error.
        #[from]
        source: benchboard_db::DbError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: benchboard_api::ServerError,
    },
}
