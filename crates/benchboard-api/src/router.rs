//! Axum router construction for the scoreboard API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware
//! enabled for cross-origin dashboard access.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::operator;
use crate::state::AppState;

/// Build the complete Axum router for the scoreboard server.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `GET /api/scores` -- per-team score time series
/// - `POST /api/scores` -- submit one score
/// - `GET /api/scores/latest` -- ranked latest-score snapshot
/// - `POST /api/operator/freeze` -- enable the score freeze
/// - `POST /api/operator/unfreeze` -- disable the score freeze
/// - `GET /api/operator/status` -- freeze state and event count
///
/// CORS is configured to allow any origin so the charting front-end
/// can poll from wherever it is hosted. In production this should be
/// restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // Score API
        .route(
            "/api/scores",
            get(handlers::get_scores).post(handlers::submit_score),
        )
        .route("/api/scores/latest", get(handlers::get_latest_scores))
        // Operator API
        .route("/api/operator/freeze", post(operator::freeze))
        .route("/api/operator/unfreeze", post(operator::unfreeze))
        .route("/api/operator/status", get(operator::status))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
