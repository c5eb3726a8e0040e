//! Authentication primitives.
//!
//! - [`jwt`] -- JWT access-token signing and validation. Token issuance
//!   itself belongs to the external identity service; the signing helper
//!   here exists for operational tooling and tests.

pub mod jwt;
