//! Score event and submission types.
//!
//! A [`ScoreEvent`] is one row of the append-only `scores` table: the
//! atomic unit of record. A [`ScoreSubmission`] is the inbound write
//! payload; the timestamp is assigned server-side, never by the caller.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::team::TeamId;

/// One persisted score submission.
///
/// Events are immutable once written. The `id` is assigned by the store
/// and strictly increases with insertion order; `registered_at` is the
/// epoch-millisecond wall-clock time stamped at ingestion, which is not
/// guaranteed monotonic across ids when writes interleave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct ScoreEvent {
    /// Store-assigned monotonic identifier.
    pub id: i64,
    /// The team the score was submitted under.
    pub team_id: TeamId,
    /// The submitted score. Positive, negative, or zero; no bound enforced.
    pub score: i64,
    /// Epoch-millisecond timestamp assigned at write time.
    pub registered_at: i64,
}

/// Inbound payload for `POST /api/scores`.
///
/// Unknown fields are ignored, so a caller-supplied timestamp never
/// reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmission {
    /// The team submitting the score. Must be non-empty.
    pub team_id: TeamId,
    /// The score to record.
    pub score: i64,
}
