//! Repository for the `participations` table (the participation ledger).
//!
//! Pure data access: no transition rules live here. Methods used by the
//! enrollment and attendance engines take any `PgExecutor` so they can
//! run inside the engines' transactions via `&mut *tx`.

use sqlx::{PgExecutor, PgPool};

use labportal_core::participation::STATUS_ENROLLED;
use labportal_core::types::DbId;

use crate::models::participation::Participation;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, event_id, user_id, status, created_at, updated_at";

/// Provides read/write operations on participation rows.
pub struct ParticipationRepo;

impl ParticipationRepo {
    /// Insert a new participation row, returning the created row.
    ///
    /// Fails with a unique violation (`uq_participations_event_user`) if a
    /// row for this (event, user) pair already exists.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        event_id: DbId,
        user_id: DbId,
        status: &str,
    ) -> Result<Participation, sqlx::Error> {
        let query = format!(
            "INSERT INTO participations (event_id, user_id, status)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Participation>(&query)
            .bind(event_id)
            .bind(user_id)
            .bind(status)
            .fetch_one(executor)
            .await
    }

    /// Find the single participation row for a (user, event) pair.
    pub async fn find_by_user_and_event(
        executor: impl PgExecutor<'_>,
        user_id: DbId,
        event_id: DbId,
    ) -> Result<Option<Participation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM participations WHERE user_id = $1 AND event_id = $2");
        sqlx::query_as::<_, Participation>(&query)
            .bind(user_id)
            .bind(event_id)
            .fetch_optional(executor)
            .await
    }

    /// List all participation rows for an event, oldest first.
    pub async fn find_by_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<Participation>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM participations WHERE event_id = $1 ORDER BY created_at ASC");
        sqlx::query_as::<_, Participation>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }

    /// List all participation rows for a user, newest first.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Participation>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM participations WHERE user_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Participation>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Count participations currently holding a seat (status = enrolled).
    pub async fn count_active(
        executor: impl PgExecutor<'_>,
        event_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM participations WHERE event_id = $1 AND status = $2",
        )
        .bind(event_id)
        .bind(STATUS_ENROLLED)
        .fetch_one(executor)
        .await?;
        Ok(count.0)
    }

    /// Transition a participation row from one status to another,
    /// returning the updated row.
    ///
    /// The update is a compare-and-set: it only applies while the row is
    /// still in `from`, so a writer acting on a stale read cannot clobber
    /// a transition that committed in between. Returns `None` if no row
    /// with the given `id` exists or its status is no longer `from`.
    pub async fn transition_status(
        executor: impl PgExecutor<'_>,
        id: DbId,
        from: &str,
        to: &str,
    ) -> Result<Option<Participation>, sqlx::Error> {
        let query = format!(
            "UPDATE participations SET status = $3, updated_at = NOW()
             WHERE id = $1 AND status = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Participation>(&query)
            .bind(id)
            .bind(from)
            .bind(to)
            .fetch_optional(executor)
            .await
    }
}
