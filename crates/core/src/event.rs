//! Event status vocabulary and schedule validation.
//!
//! Status values are stored verbatim in the `events.status` column; the
//! CHECK constraint in the schema must stay in sync with this list.

use crate::types::Timestamp;

/// Event is published and visible.
pub const STATUS_ACTIVE: &str = "active";

/// Event is hidden from listings but kept for editing.
pub const STATUS_INACTIVE: &str = "inactive";

/// Event is drafted and awaiting approval.
pub const STATUS_PENDING: &str = "pending";

/// Event was called off.
pub const STATUS_CANCELLED: &str = "cancelled";

/// All valid event status values.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_ACTIVE,
    STATUS_INACTIVE,
    STATUS_PENDING,
    STATUS_CANCELLED,
];

/// Validate that an event status string is one of the accepted values.
pub fn validate_status(status: &str) -> Result<(), String> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid event status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        ))
    }
}

/// Validate that an event's schedule is a well-formed time range.
pub fn validate_schedule(start_time: Timestamp, end_time: Timestamp) -> Result<(), String> {
    if end_time > start_time {
        Ok(())
    } else {
        Err("end_time must be after start_time".to_string())
    }
}

/// Whether self-service enrollment and cancellation are still permitted.
///
/// Both close strictly at `start_time`; attendance marking has no such
/// window.
pub fn enrollment_open(start_time: Timestamp, now: Timestamp) -> bool {
    now < start_time
}
