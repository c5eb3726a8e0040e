//! Pure domain logic shared by the database and API layers.
//!
//! Nothing in this crate performs I/O: it holds the common ID/timestamp
//! types, the domain error taxonomy, and the status vocabularies and
//! transition guards for events and participations.

pub mod error;
pub mod event;
pub mod participation;
pub mod roles;
pub mod types;
