//! Shared type definitions for the Benchboard scoreboard service.
//!
//! This crate holds the types that cross crate boundaries: the team
//! identifier newtype, the score event record and submission payload,
//! the team display-name directory, and the chart-ready response
//! payloads served by the API.
//!
//! Wire types derive [`ts_rs::TS`] so TypeScript definitions can be
//! exported for the charting front-end that consumes the JSON.

pub mod chart;
pub mod score;
pub mod team;

// Re-export primary types for convenience.
pub use chart::{RankingDataset, RankingResponse, ScorePoint, SeriesDataset, SeriesResponse};
pub use score::{ScoreEvent, ScoreSubmission};
pub use team::{TeamDirectory, TeamId};
