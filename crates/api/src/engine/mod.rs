//! Stateful engines owning the transactional enrollment and attendance
//! flows.
//!
//! Repositories stay rule-free; all transition guards, capacity checks,
//! and transaction boundaries live here.

pub mod attendance;
pub mod enrollment;

pub use attendance::AttendanceBatchProcessor;
pub use enrollment::EnrollmentEngine;
