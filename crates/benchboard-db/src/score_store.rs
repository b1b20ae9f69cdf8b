//! Score store operations over the append-only `scores` table.
//!
//! The table is the sole source of truth: ingestion appends one row per
//! submission and the two read paths recompute their aggregates from it
//! on every call. Rows are never updated or deleted.

use benchboard_types::{ScoreEvent, ScoreSubmission, TeamId};
use sqlx::{Pool, Sqlite};

use crate::error::DbError;

/// Operations on the `scores` table.
pub struct ScoreStore<'a> {
    pool: &'a Pool<Sqlite>,
}

impl<'a> ScoreStore<'a> {
    /// Create a new score store bound to a connection pool.
    pub const fn new(pool: &'a Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Append one score event.
    ///
    /// A single-row insert, so the write is atomic: either the full
    /// event is durable or nothing is. The store assigns the id;
    /// `registered_at` is the server-side epoch-millisecond timestamp
    /// stamped by the caller at ingestion time.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the insert fails.
    pub async fn append(
        &self,
        submission: &ScoreSubmission,
        registered_at: i64,
    ) -> Result<(), DbError> {
        sqlx::query("INSERT INTO scores (team_id, score, registered_at) VALUES (?, ?, ?)")
            .bind(submission.team_id.as_str())
            .bind(submission.score)
            .bind(registered_at)
            .execute(self.pool)
            .await?;

        tracing::debug!(
            team_id = submission.team_id.as_str(),
            score = submission.score,
            registered_at,
            "Appended score event"
        );
        Ok(())
    }

    /// Scan the full event log in insertion order.
    ///
    /// Ids increase monotonically with insertion, so `ORDER BY id` is
    /// the insertion order the series view relies on. The whole table
    /// is loaded into memory per call; acceptable while the event count
    /// stays bounded by the length of a competition.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn all_events(&self) -> Result<Vec<ScoreEvent>, DbError> {
        let rows = sqlx::query_as::<_, ScoreRow>(
            r"SELECT id, team_id, score, registered_at
              FROM scores
              ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(ScoreEvent::from).collect())
    }

    /// Per-team best score and most recent submission time, ranked.
    ///
    /// `best_score` and `latest_registered_at` are independent maxima:
    /// the reported timestamp is the team's most recent submission,
    /// which is not necessarily the submission that produced the best
    /// score. Teams are ordered best score descending; equal scores are
    /// broken by team id ascending so the ranking is deterministic.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn team_bests(&self) -> Result<Vec<TeamBestRow>, DbError> {
        let rows = sqlx::query_as::<_, TeamBestRow>(
            r"SELECT team_id, MAX(score) AS best_score, MAX(registered_at) AS latest_registered_at
              FROM scores
              GROUP BY team_id
              ORDER BY best_score DESC, team_id ASC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Number of stored score events.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn count(&self) -> Result<i64, DbError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM scores")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}

/// A raw row from the `scores` table.
///
/// Uses runtime types rather than compile-time checked types to
/// avoid requiring a live database during builds.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ScoreRow {
    /// Auto-incremented event id.
    pub id: i64,
    /// The submitting team's identifier.
    pub team_id: String,
    /// The submitted score.
    pub score: i64,
    /// Epoch-millisecond timestamp assigned at ingestion.
    pub registered_at: i64,
}

impl From<ScoreRow> for ScoreEvent {
    fn from(row: ScoreRow) -> Self {
        Self {
            id: row.id,
            team_id: TeamId::new(row.team_id),
            score: row.score,
            registered_at: row.registered_at,
        }
    }
}

/// One team's aggregate row from the grouped ranking query.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TeamBestRow {
    /// The team's identifier.
    pub team_id: String,
    /// The team's maximum submitted score.
    pub best_score: i64,
    /// The team's most recent submission timestamp.
    pub latest_registered_at: i64,
}
