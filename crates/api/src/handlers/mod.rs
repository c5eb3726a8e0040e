//! HTTP request handlers, grouped by resource.

pub mod attendance;
pub mod enrollment;
pub mod event;
