//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Repositories enforce no business rules; the engines in the API crate
//! are responsible for transition validity and capacity checks.

pub mod event_repo;
pub mod participation_repo;
pub mod user_repo;

pub use event_repo::EventRepo;
pub use participation_repo::ParticipationRepo;
pub use user_repo::UserRepo;
