//! Participation status vocabulary, transition guards, and bulk-marking
//! outcome constants.
//!
//! A participation row moves through: enrolled -> cancelled -> enrolled
//! (re-activation of the same row), and enrolled -> attended | absent
//! (terminal, staff-recorded). Values are stored verbatim in the
//! `participations.status` column.

/// Active reservation counting against event capacity.
pub const STATUS_ENROLLED: &str = "enrolled";

/// Reservation released before the event started.
pub const STATUS_CANCELLED: &str = "cancelled";

/// User showed up; recorded by staff. Terminal.
pub const STATUS_ATTENDED: &str = "attended";

/// User did not show up; recorded by staff. Terminal.
pub const STATUS_ABSENT: &str = "absent";

/// All valid participation status values.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_ENROLLED,
    STATUS_CANCELLED,
    STATUS_ATTENDED,
    STATUS_ABSENT,
];

/// Per-user outcome strings returned by bulk attendance marking.
pub const OUTCOME_MARKED: &str = "marked";
pub const OUTCOME_NOT_ENROLLED: &str = "not enrolled";
pub const OUTCOME_INVALID_STATUS: &str = "invalid status";

/// Validate that a participation status string is one of the accepted values.
pub fn validate_status(status: &str) -> Result<(), String> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid participation status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        ))
    }
}

/// Whether this status counts against event capacity.
pub fn is_active(status: &str) -> bool {
    status == STATUS_ENROLLED
}

/// Whether a terminal attendance status may be applied from `status`.
///
/// Attended/absent are only reachable from enrolled; re-marking an
/// already attended or absent row is rejected, not reapplied.
pub fn can_mark(status: &str) -> bool {
    status == STATUS_ENROLLED
}

/// Whether `status` is a valid bulk-marking target.
pub fn is_marking_target(status: &str) -> bool {
    status == STATUS_ATTENDED || status == STATUS_ABSENT
}
