//! Participation entity model.

use serde::Serialize;
use sqlx::FromRow;

use labportal_core::types::{DbId, Timestamp};

/// A row from the `participations` table.
///
/// There is at most one row per (event, user) pair; the row is reused
/// across the enroll/cancel/re-enroll cycle and never deleted.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Participation {
    pub id: DbId,
    pub event_id: DbId,
    pub user_id: DbId,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
