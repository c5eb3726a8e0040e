pub mod event;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /events                                  list, create (create: staff)
/// /events/{id}                             get, update (update: staff)
/// /events/{id}/enroll                      enroll caller (POST)
/// /events/{id}/cancel                      cancel caller's enrollment (POST)
/// /events/{id}/participations              event ledger (staff)
/// /events/{id}/attendance/attended         bulk mark attended (staff)
/// /events/{id}/attendance/absent           bulk mark absent (staff)
///
/// /me/participations                       caller's own ledger
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/events", event::router())
        .route(
            "/me/participations",
            get(handlers::enrollment::my_participations),
        )
}
