//! Repository for the `events` table (the event catalog).

use sqlx::{PgConnection, PgPool};

use labportal_core::event::STATUS_ACTIVE;
use labportal_core::types::DbId;

use crate::models::event::{CreateEvent, Event, UpdateEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, description, start_time, end_time, capacity, status, created_at, updated_at";

/// Provides CRUD and time-window queries for events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event, returning the created row.
    ///
    /// If `status` is `None` in the input, defaults to `"active"`.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (name, description, start_time, end_time, capacity, status)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, '{STATUS_ACTIVE}'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(input.capacity)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find an event by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an event by its unique name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE name = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Find an event by ID and take a row-level lock on it.
    ///
    /// Must run inside a transaction; the lock is held until that
    /// transaction commits or rolls back. This serializes concurrent
    /// enrollment attempts against the same event so the capacity check
    /// and the subsequent write are atomic.
    pub async fn lock_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List all events, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events ORDER BY created_at DESC");
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// List events that have not yet ended, soonest start first.
    pub async fn list_upcoming(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events WHERE end_time >= NOW() ORDER BY start_time ASC"
        );
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// List events that have already ended, most recently ended first.
    pub async fn list_past(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM events WHERE end_time < NOW() ORDER BY end_time DESC");
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }

    /// Update an event. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                start_time = COALESCE($4, start_time),
                end_time = COALESCE($5, end_time),
                capacity = COALESCE($6, capacity),
                status = COALESCE($7, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(input.capacity)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }
}
