//! Aggregation of the raw event log into chart-ready payloads.
//!
//! Both builders are pure functions over rows the store returned, so
//! the read endpoints stay referentially transparent: the same event
//! set always produces the same body. Grouping, ranking, and label
//! resolution all happen here; the handlers only fetch rows and
//! serialize the result.

use benchboard_db::TeamBestRow;
use benchboard_types::{
    RankingDataset, RankingResponse, ScoreEvent, ScorePoint, SeriesDataset, SeriesResponse,
    TeamDirectory, TeamId,
};
use std::collections::BTreeMap;

/// Line/bar width hint baked into every dataset.
const BORDER_WIDTH: u32 = 1;

/// One palette slot: bar fill plus its border color.
struct PaletteColor {
    /// Translucent fill.
    fill: &'static str,
    /// Opaque border.
    stroke: &'static str,
}

/// Fixed styling palette for the ranking bar chart.
///
/// Cycled modulo its length when more teams than colors are ranked.
const PALETTE: [PaletteColor; 7] = [
    PaletteColor {
        fill: "rgba(255, 99, 132, 0.2)",
        stroke: "rgb(255, 99, 132)",
    },
    PaletteColor {
        fill: "rgba(255, 159, 64, 0.2)",
        stroke: "rgb(255, 159, 64)",
    },
    PaletteColor {
        fill: "rgba(255, 205, 86, 0.2)",
        stroke: "rgb(255, 205, 86)",
    },
    PaletteColor {
        fill: "rgba(75, 192, 192, 0.2)",
        stroke: "rgb(75, 192, 192)",
    },
    PaletteColor {
        fill: "rgba(54, 162, 235, 0.2)",
        stroke: "rgb(54, 162, 235)",
    },
    PaletteColor {
        fill: "rgba(153, 102, 255, 0.2)",
        stroke: "rgb(153, 102, 255)",
    },
    PaletteColor {
        fill: "rgba(201, 203, 207, 0.2)",
        stroke: "rgb(201, 203, 207)",
    },
];

/// Group a full event scan into one time series per team.
///
/// Point order inside each dataset is the scan order (insertion order);
/// datasets are emitted in team-identifier order so output is
/// deterministic. The global latest timestamp is tracked in the same
/// pass and is 0 when no events exist.
pub fn build_series(events: &[ScoreEvent], teams: &TeamDirectory) -> SeriesResponse {
    let mut latest_timestamp = 0_i64;
    let mut points_by_team: BTreeMap<TeamId, Vec<ScorePoint>> = BTreeMap::new();

    for event in events {
        latest_timestamp = latest_timestamp.max(event.registered_at);
        points_by_team
            .entry(event.team_id.clone())
            .or_default()
            .push(ScorePoint {
                x: event.registered_at,
                y: event.score,
            });
    }

    let datasets = points_by_team
        .into_iter()
        .map(|(team, data)| SeriesDataset {
            label: teams.resolve(&team).map(str::to_owned),
            data,
            border_width: BORDER_WIDTH,
        })
        .collect();

    SeriesResponse {
        latest_timestamp,
        datasets,
    }
}

/// Turn the ranked per-team aggregates into the bar-chart payload.
///
/// The rows arrive already ranked (best score descending, team id
/// ascending on ties); this keeps that order and attaches labels,
/// palette-cycled styling, and the global latest timestamp (0 when no
/// teams have submitted). Unresolved labels stay `None` so they
/// serialize as `null` at their ranked position.
pub fn build_ranking(rows: &[TeamBestRow], teams: &TeamDirectory) -> RankingResponse {
    let mut latest_timestamp = 0_i64;
    let mut labels = Vec::with_capacity(rows.len());
    let mut data = Vec::with_capacity(rows.len());

    for row in rows {
        latest_timestamp = latest_timestamp.max(row.latest_registered_at);
        labels.push(
            teams
                .resolve(&TeamId::new(row.team_id.as_str()))
                .map(str::to_owned),
        );
        data.push(row.best_score);
    }

    let background_color = PALETTE
        .iter()
        .cycle()
        .take(rows.len())
        .map(|color| color.fill.to_owned())
        .collect();
    let border_color = PALETTE
        .iter()
        .cycle()
        .take(rows.len())
        .map(|color| color.stroke.to_owned())
        .collect();

    RankingResponse {
        latest_timestamp,
        labels,
        datasets: vec![RankingDataset {
            data,
            background_color,
            border_color,
            border_width: BORDER_WIDTH,
        }],
    }
}
