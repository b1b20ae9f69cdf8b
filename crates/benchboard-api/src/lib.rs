//! Scoreboard API server for the Benchboard service.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Score ingestion** (`POST /api/scores`) appending one immutable
//!   event per submission to the `SQLite` store
//! - **REST read endpoints** serving chart-ready aggregates: the
//!   per-team time series (`GET /api/scores`) and the ranked latest
//!   snapshot (`GET /api/scores/latest`)
//! - **Operator REST endpoints** for runtime control of the score
//!   freeze (freeze, unfreeze, status)
//! - **Minimal HTML status page** (`GET /`) showing freeze state and
//!   links to API endpoints
//!
//! # Architecture
//!
//! The server holds no mutable state of its own beyond the freeze
//! flag: every read recomputes its aggregate from the full event set in
//! the store, so two reads with no intervening write return identical
//! bodies. The charting front-end polls the read endpoints and redraws
//! when `latestTimestamp` changes.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod handlers;
pub mod operator;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use config::{BoardConfig, ConfigError};
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
