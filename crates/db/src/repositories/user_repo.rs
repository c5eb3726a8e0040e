//! Repository for the `users` table.
//!
//! Minimal user-directory surface: the enrollment flow only needs
//! existence checks; user administration is handled elsewhere.

use sqlx::{PgExecutor, PgPool};

use labportal_core::types::DbId;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, display_name, role, is_active, created_at, updated_at";

/// Provides lookups against the user directory.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// If `role` is `None` in the input, defaults to `"member"`.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, display_name, role)
             VALUES ($1, $2, COALESCE($3, 'member'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.display_name)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Find a user by their internal ID.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Check whether an active user with the given ID exists.
    pub async fn exists(executor: impl PgExecutor<'_>, id: DbId) -> Result<bool, sqlx::Error> {
        let found: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM users WHERE id = $1 AND is_active = TRUE")
                .bind(id)
                .fetch_optional(executor)
                .await?;
        Ok(found.is_some())
    }
}
