//! HTTP layer: axum router, configuration, auth, and the enrollment and
//! attendance engines that own transactions.

pub mod auth;
pub mod config;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
