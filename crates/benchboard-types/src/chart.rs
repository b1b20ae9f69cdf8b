//! Chart-ready response payloads for the two read endpoints.
//!
//! The shapes mirror what the charting front-end feeds directly into its
//! line and bar charts, so field names follow the chart library's
//! conventions (`label`, `data`, `borderWidth`, ...) and serialize in
//! camelCase. `latestTimestamp` lets pollers skip redraws when nothing
//! changed.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One plotted point: submission time on the x axis, score on the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ScorePoint {
    /// Epoch-millisecond submission timestamp.
    pub x: i64,
    /// The submitted score.
    pub y: i64,
}

/// One team's time series for the line chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct SeriesDataset {
    /// Resolved display name. Omitted when the team directory has no
    /// entry for the submitting identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub label: Option<String>,
    /// The team's score points in insertion order.
    pub data: Vec<ScorePoint>,
    /// Line width hint for the chart.
    pub border_width: u32,
}

/// Response body for `GET /api/scores`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct SeriesResponse {
    /// Maximum `registeredAt` over all stored events; 0 when the store
    /// is empty.
    pub latest_timestamp: i64,
    /// One dataset per team with at least one stored event.
    pub datasets: Vec<SeriesDataset>,
}

/// The single styled dataset for the ranking bar chart.
///
/// The styling arrays are index-aligned with the scores and cycle
/// through a fixed palette when the team count exceeds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct RankingDataset {
    /// Best score per team, ranked descending.
    pub data: Vec<i64>,
    /// Bar fill color per team.
    pub background_color: Vec<String>,
    /// Bar border color per team.
    pub border_color: Vec<String>,
    /// Bar border width hint for the chart.
    pub border_width: u32,
}

/// Response body for `GET /api/scores/latest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse {
    /// Maximum of the per-team latest submission timestamps; 0 when no
    /// teams have submitted.
    pub latest_timestamp: i64,
    /// Display labels index-aligned with the ranked scores. `null` for
    /// teams the directory cannot resolve.
    pub labels: Vec<Option<String>>,
    /// A single dataset holding the ranked scores and bar styling.
    pub datasets: Vec<RankingDataset>,
}
