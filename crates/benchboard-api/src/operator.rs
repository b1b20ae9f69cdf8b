//! Operator REST API handlers for runtime scoreboard control.
//!
//! These endpoints are separate from the public score API. They carry
//! the score-freeze switch: near the end of a competition an operator
//! freezes the board so the ranking stops moving while submissions are
//! still acknowledged.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/api/operator/freeze` | Enable the score freeze |
//! | `POST` | `/api/operator/unfreeze` | Disable the score freeze |
//! | `GET` | `/api/operator/status` | Current freeze state and event count |

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use benchboard_db::ScoreStore;

use crate::error::ApiError;
use crate::state::AppState;

/// Generic success response.
#[derive(Debug, serde::Serialize)]
struct OperatorResponse {
    /// Whether the operation succeeded.
    ok: bool,
    /// Human-readable message.
    message: String,
}

/// Response body for `GET /api/operator/status`.
#[derive(Debug, serde::Serialize)]
pub struct BoardStatus {
    /// Whether the score freeze is active.
    pub frozen: bool,
    /// Number of stored score events.
    pub events: i64,
}

// ---------------------------------------------------------------------------
// POST /api/operator/freeze
// ---------------------------------------------------------------------------

/// Enable the score freeze.
///
/// Submissions keep returning `201` but are discarded until the board
/// is unfrozen. Idempotent: freezing an already-frozen board succeeds.
pub async fn freeze(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let was_frozen = state.set_frozen(true);
    tracing::info!(was_frozen, "Score freeze enabled");

    Json(OperatorResponse {
        ok: true,
        message: "Score freeze enabled -- submissions are accepted but discarded".to_owned(),
    })
}

// ---------------------------------------------------------------------------
// POST /api/operator/unfreeze
// ---------------------------------------------------------------------------

/// Disable the score freeze and resume persisting submissions.
pub async fn unfreeze(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let was_frozen = state.set_frozen(false);
    tracing::info!(was_frozen, "Score freeze disabled");

    Json(OperatorResponse {
        ok: true,
        message: "Score freeze disabled -- submissions are persisted again".to_owned(),
    })
}

// ---------------------------------------------------------------------------
// GET /api/operator/status
// ---------------------------------------------------------------------------

/// Return the current freeze state and the stored event count.
pub async fn status(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let store = ScoreStore::new(state.db.pool());
    let events = store.count().await?;

    Ok(Json(BoardStatus {
        frozen: state.is_frozen(),
        events,
    }))
}
