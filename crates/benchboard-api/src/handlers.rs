//! REST API endpoint handlers for the scoreboard server.
//!
//! All handlers go through the shared [`AppState`]: the read paths
//! issue one store query each and hand the rows to the aggregation
//! builders; the write path stamps the server-side timestamp and
//! appends one event.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/api/scores` | Per-team score time series |
//! | `GET` | `/api/scores/latest` | Ranked latest-score snapshot |
//! | `POST` | `/api/scores` | Submit one score |

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::Json;
use benchboard_db::ScoreStore;
use benchboard_types::ScoreSubmission;
use chrono::Utc;

use crate::aggregate;
use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing server status and API links.
///
/// The charting dashboard itself is a separate front-end that polls
/// the JSON endpoints; this page is for operators poking at the
/// service directly.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let freeze = if state.is_frozen() { "FROZEN" } else { "LIVE" };
    let team_count = state.teams.len();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Benchboard</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .subtitle {{ color: #8b949e; margin-top: 0; }}
        .metric {{
            display: inline-block;
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 120px;
        }}
        .metric .label {{ color: #8b949e; font-size: 0.85rem; }}
        .metric .value {{ color: #58a6ff; font-size: 1.5rem; font-weight: bold; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
        .status {{ color: #3fb950; font-weight: bold; }}
        hr {{ border: none; border-top: 1px solid #30363d; margin: 1.5rem 0; }}
    </style>
</head>
<body>
    <h1>Benchboard</h1>
    <p class="subtitle">Competition scoreboard service</p>

    <p>Scoring: <span class="status">{freeze}</span></p>

    <div>
        <div class="metric">
            <div class="label">Configured teams</div>
            <div class="value">{team_count}</div>
        </div>
    </div>

    <hr>

    <h2>API Endpoints</h2>
    <ul>
        <li>GET <a href="/api/scores">/api/scores</a> -- Per-team score time series</li>
        <li>GET <a href="/api/scores/latest">/api/scores/latest</a> -- Ranked latest snapshot</li>
        <li>POST /api/scores -- Submit a score ({{"teamId", "score"}})</li>
        <li>GET <a href="/api/operator/status">/api/operator/status</a> -- Operator status</li>
        <li>POST /api/operator/freeze, /api/operator/unfreeze -- Score freeze control</li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// GET /api/scores -- per-team time series
// ---------------------------------------------------------------------------

/// Return every team's score series plus the global latest timestamp.
///
/// One full scan in insertion order; the aggregate is recomputed from
/// scratch on every call, so repeated reads with no intervening write
/// return identical bodies.
pub async fn get_scores(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let store = ScoreStore::new(state.db.pool());
    let events = store.all_events().await?;

    Ok(Json(aggregate::build_series(&events, &state.teams)))
}

// ---------------------------------------------------------------------------
// GET /api/scores/latest -- ranked latest snapshot
// ---------------------------------------------------------------------------

/// Return the ranked best-score-per-team snapshot for the bar chart.
pub async fn get_latest_scores(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let store = ScoreStore::new(state.db.pool());
    let rows = store.team_bests().await?;

    Ok(Json(aggregate::build_ranking(&rows, &state.teams)))
}

// ---------------------------------------------------------------------------
// POST /api/scores -- submit one score
// ---------------------------------------------------------------------------

/// Record one score submission.
///
/// The timestamp is stamped server-side; anything the caller supplied
/// beyond `teamId` and `score` was already dropped during
/// deserialization. While the score freeze is active the submission is
/// acknowledged with the usual `201` but not persisted, so the board
/// stops moving without breaking submitters near the end of a
/// competition.
pub async fn submit_score(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<ScoreSubmission>,
) -> Result<impl IntoResponse, ApiError> {
    if submission.team_id.is_empty() {
        return Err(ApiError::InvalidBody("teamId must not be empty".to_owned()));
    }

    if state.is_frozen() {
        tracing::info!(
            team_id = submission.team_id.as_str(),
            score = submission.score,
            "Score accepted but discarded (board frozen)"
        );
        return Ok(StatusCode::CREATED);
    }

    let registered_at = Utc::now().timestamp_millis();

    let store = ScoreStore::new(state.db.pool());
    store.append(&submission, registered_at).await?;

    Ok(StatusCode::CREATED)
}
