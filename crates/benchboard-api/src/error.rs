//! Error types for the scoreboard API layer.
//!
//! [`ApiError`] unifies all failure modes into a single enum that
//! can be converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.
//! Storage failures surface verbatim as server errors: a visibly
//! failing scoreboard beats a silently stale one during a live
//! competition.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors that can occur in the scoreboard API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A store read or write failed.
    #[error("storage error: {0}")]
    Storage(#[from] benchboard_db::DbError),

    /// The request body was well-formed JSON but semantically invalid.
    #[error("invalid body: {0}")]
    InvalidBody(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Storage(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("{e}")),
            Self::InvalidBody(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
