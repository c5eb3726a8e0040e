use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// Every expected business outcome is a variant here rather than a panic
/// or an opaque string; the API layer maps each variant to an HTTP status.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found: id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("An event named '{0}' already exists")]
    DuplicateName(String),

    #[error("User {user_id} is already enrolled in event {event_id}")]
    DuplicateEnrollment { event_id: DbId, user_id: DbId },

    #[error("Invalid participation status: {0}")]
    InvalidStatus(String),

    #[error("Event {event_id} is at capacity ({capacity} enrolled)")]
    CapacityExhausted { event_id: DbId, capacity: i32 },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
