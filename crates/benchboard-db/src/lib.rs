//! Data layer for the Benchboard scoreboard service (`SQLite`).
//!
//! A single append-only `scores` table is the source of truth for every
//! view the service exposes. Ingestion writes one row per submission;
//! the read paths recompute their aggregates from the full table on
//! each call, so the service itself holds no persistent state.
//!
//! # Modules
//!
//! - [`sqlite`] -- `SQLite` connection pool and configuration
//! - [`score_store`] -- Score event insertion and aggregate queries
//! - [`error`] -- Shared error types

pub mod error;
pub mod score_store;
pub mod sqlite;

// Re-export primary types for convenience.
pub use error::DbError;
pub use score_store::{ScoreRow, ScoreStore, TeamBestRow};
pub use sqlite::{SqliteConfig, SqlitePool};
