//! Well-known role name constants.
//!
//! These must match the CHECK constraint on `users.role` in the schema.

pub const ROLE_MEMBER: &str = "member";
pub const ROLE_STAFF: &str = "staff";
pub const ROLE_ADMIN: &str = "admin";

/// Whether a role may perform staff-only actions (event management,
/// bulk attendance marking).
pub fn is_staff(role: &str) -> bool {
    role == ROLE_STAFF || role == ROLE_ADMIN
}
