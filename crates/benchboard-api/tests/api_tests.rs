//! Integration tests for the scoreboard API endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server, backed by an in-memory `SQLite` store. This
//! validates handler logic, aggregation, and routing without a live
//! network connection.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use benchboard_api::router::build_router;
use benchboard_api::state::AppState;
use benchboard_db::{SqliteConfig, SqlitePool};
use benchboard_types::TeamDirectory;
use serde_json::Value;
use tower::ServiceExt;

async fn make_test_state() -> Arc<AppState> {
    let pool = SqlitePool::connect(&SqliteConfig::in_memory())
        .await
        .unwrap();
    pool.run_migrations().await.unwrap();

    let mut names = BTreeMap::new();
    names.insert("teamA".to_owned(), "TeamA".to_owned());
    names.insert("teamB".to_owned(), "TeamB".to_owned());
    let teams = TeamDirectory::new(names);

    Arc::new(AppState::new(pool, teams, false))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn score_request(team: &str, score: i64) -> Request<Body> {
    Request::post("/api/scores")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(format!(
            r#"{{"teamId":"{team}","score":{score}}}"#
        )))
        .unwrap()
}

fn get(path: &str) -> Request<Body> {
    Request::get(path).body(Body::empty()).unwrap()
}

fn post(path: &str) -> Request<Body> {
    Request::post(path).body(Body::empty()).unwrap()
}

// =========================================================================
// Status page
// =========================================================================

#[tokio::test]
async fn test_index_returns_html() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));
}

// =========================================================================
// Series endpoint
// =========================================================================

#[tokio::test]
async fn test_series_of_empty_store() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router.oneshot(get("/api/scores")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["latestTimestamp"], 0);
    assert_eq!(json["datasets"], serde_json::json!([]));
}

#[tokio::test]
async fn test_submit_returns_201_with_empty_body() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router.oneshot(score_request("teamA", 10)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_submitted_scores_appear_in_series() {
    let state = make_test_state().await;
    let router = build_router(state);

    for request in [
        score_request("teamA", 10),
        score_request("teamB", 30),
        score_request("teamA", 20),
    ] {
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = router.oneshot(get("/api/scores")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;

    let datasets = json["datasets"].as_array().unwrap();
    assert_eq!(datasets.len(), 2);

    // Datasets come out in team-identifier order.
    assert_eq!(datasets[0]["label"], "TeamA");
    let team_a_points = datasets[0]["data"].as_array().unwrap();
    assert_eq!(team_a_points.len(), 2);
    assert_eq!(team_a_points[0]["y"], 10);
    assert_eq!(team_a_points[1]["y"], 20);

    assert_eq!(datasets[1]["label"], "TeamB");
    assert_eq!(datasets[1]["data"][0]["y"], 30);

    // The global latest timestamp is the max over every stored event.
    let latest = json["latestTimestamp"].as_i64().unwrap();
    let max_point = team_a_points[1]["x"]
        .as_i64()
        .unwrap()
        .max(datasets[1]["data"][0]["x"].as_i64().unwrap());
    assert_eq!(latest, max_point);
}

#[tokio::test]
async fn test_consecutive_reads_are_identical() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .clone()
        .oneshot(score_request("teamA", 42))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let first = body_to_json(
        router
            .clone()
            .oneshot(get("/api/scores"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    let second = body_to_json(
        router
            .oneshot(get("/api/scores"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_unknown_team_is_served_without_label() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .clone()
        .oneshot(score_request("ghost", 5))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_to_json(
        router
            .clone()
            .oneshot(get("/api/scores"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    let dataset = &json["datasets"][0];
    assert!(dataset.get("label").is_none());
    assert_eq!(dataset["data"][0]["y"], 5);

    // The ranking serves the same team with a null label.
    let latest = body_to_json(
        router
            .oneshot(get("/api/scores/latest"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    assert_eq!(latest["labels"], serde_json::json!([null]));
}

#[tokio::test]
async fn test_client_supplied_timestamp_is_ignored() {
    let state = make_test_state().await;
    let router = build_router(state);

    let request = Request::post("/api/scores")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"teamId":"teamA","score":5,"registeredAt":1}"#,
        ))
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_to_json(
        router
            .oneshot(get("/api/scores"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    let stored_at = json["datasets"][0]["data"][0]["x"].as_i64().unwrap();

    // The stored timestamp is the server's clock, not the caller's 1.
    assert!(stored_at > 1_700_000_000_000);
    assert_eq!(json["latestTimestamp"].as_i64().unwrap(), stored_at);
}

// =========================================================================
// Ranking endpoint
// =========================================================================

#[tokio::test]
async fn test_ranking_orders_teams_by_best_score() {
    let state = make_test_state().await;
    let router = build_router(state);

    for request in [
        score_request("teamA", 10),
        score_request("teamB", 30),
        score_request("teamA", 20),
    ] {
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = router.oneshot(get("/api/scores/latest")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;

    // teamB's 30 beats teamA's best of max(10, 20) = 20.
    assert_eq!(json["labels"], serde_json::json!(["TeamB", "TeamA"]));
    assert_eq!(json["datasets"][0]["data"], serde_json::json!([30, 20]));
    assert_eq!(json["datasets"][0]["borderWidth"], 1);

    let backgrounds = json["datasets"][0]["backgroundColor"].as_array().unwrap();
    let borders = json["datasets"][0]["borderColor"].as_array().unwrap();
    assert_eq!(backgrounds.len(), 2);
    assert_eq!(borders.len(), 2);
}

#[tokio::test]
async fn test_ranking_of_empty_store() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router.oneshot(get("/api/scores/latest")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;

    assert_eq!(json["latestTimestamp"], 0);
    assert_eq!(json["labels"], serde_json::json!([]));
    assert_eq!(json["datasets"][0]["data"], serde_json::json!([]));
}

#[tokio::test]
async fn test_both_read_paths_agree_on_latest_timestamp() {
    let state = make_test_state().await;
    let router = build_router(state);

    for request in [score_request("teamA", 1), score_request("teamB", 2)] {
        let response = router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let series = body_to_json(
        router
            .clone()
            .oneshot(get("/api/scores"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    let ranking = body_to_json(
        router
            .oneshot(get("/api/scores/latest"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;

    assert_eq!(series["latestTimestamp"], ranking["latestTimestamp"]);
    assert!(series["latestTimestamp"].as_i64().unwrap() > 0);
}

// =========================================================================
// Validation
// =========================================================================

#[tokio::test]
async fn test_empty_team_id_is_rejected() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .clone()
        .oneshot(score_request("", 10))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing was written.
    let json = body_to_json(
        router
            .oneshot(get("/api/scores"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    assert_eq!(json["datasets"], serde_json::json!([]));
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let state = make_test_state().await;
    let router = build_router(state);

    let request = Request::post("/api/scores")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"teamId":"teamA","score":"not a number"}"#))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_nonexistent_route_returns_404() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router.oneshot(get("/api/nonexistent")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =========================================================================
// Operator API
// =========================================================================

#[tokio::test]
async fn test_freeze_accepts_but_discards_submissions() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .clone()
        .oneshot(post("/api/operator/freeze"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The submitter still sees success.
    let response = router
        .clone()
        .oneshot(score_request("teamA", 99))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // But nothing reached the store.
    let json = body_to_json(
        router
            .oneshot(get("/api/scores"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    assert_eq!(json["latestTimestamp"], 0);
    assert_eq!(json["datasets"], serde_json::json!([]));
}

#[tokio::test]
async fn test_unfreeze_resumes_persistence() {
    let state = make_test_state().await;
    let router = build_router(state);

    for path in ["/api/operator/freeze", "/api/operator/unfreeze"] {
        let response = router.clone().oneshot(post(path)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = router
        .clone()
        .oneshot(score_request("teamA", 7))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_to_json(
        router
            .oneshot(get("/api/scores"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    assert_eq!(json["datasets"][0]["data"][0]["y"], 7);
}

#[tokio::test]
async fn test_operator_status_reports_freeze_and_count() {
    let state = make_test_state().await;
    let router = build_router(state);

    let response = router
        .clone()
        .oneshot(score_request("teamA", 1))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_to_json(
        router
            .clone()
            .oneshot(get("/api/operator/status"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    assert_eq!(json["frozen"], false);
    assert_eq!(json["events"], 1);

    let response = router
        .clone()
        .oneshot(post("/api/operator/freeze"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(
        router
            .oneshot(get("/api/operator/status"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    assert_eq!(json["frozen"], true);
    assert_eq!(json["events"], 1);
}

#[tokio::test]
async fn test_state_seeded_frozen_from_config() {
    let pool = SqlitePool::connect(&SqliteConfig::in_memory())
        .await
        .unwrap();
    pool.run_migrations().await.unwrap();
    let state = Arc::new(AppState::new(pool, TeamDirectory::default(), true));
    let router = build_router(state);

    let response = router
        .clone()
        .oneshot(score_request("teamA", 5))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_to_json(
        router
            .oneshot(get("/api/operator/status"))
            .await
            .unwrap()
            .into_body(),
    )
    .await;
    assert_eq!(json["frozen"], true);
    assert_eq!(json["events"], 0);
}
