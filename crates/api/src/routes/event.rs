//! Route definitions for the event catalog, enrollment, and attendance.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{attendance, enrollment, event};
use crate::state::AppState;

/// Event routes, nested under `/events`.
///
/// ```text
/// POST   /                                 create (staff)
/// GET    /?filter=all|upcoming|past        list
/// GET    /{id}                             get_by_id
/// PUT    /{id}                             update (staff)
/// POST   /{id}/enroll                      enroll
/// POST   /{id}/cancel                      cancel
/// GET    /{id}/participations              list_for_event (staff)
/// POST   /{id}/attendance/attended         mark_attended (staff)
/// POST   /{id}/attendance/absent           mark_absent (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(event::create).get(event::list))
        .route("/{id}", get(event::get_by_id).put(event::update))
        .route("/{id}/enroll", post(enrollment::enroll))
        .route("/{id}/cancel", post(enrollment::cancel))
        .route("/{id}/participations", get(enrollment::list_for_event))
        .route("/{id}/attendance/attended", post(attendance::mark_attended))
        .route("/{id}/attendance/absent", post(attendance::mark_absent))
}
