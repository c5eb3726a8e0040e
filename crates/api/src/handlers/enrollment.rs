//! Handlers for self-service enrollment and ledger reads.
//!
//! Enrollment and cancellation always act on the authenticated caller's
//! own identity; there is no enroll-someone-else path.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use labportal_core::error::CoreError;
use labportal_core::types::DbId;
use labportal_db::models::participation::Participation;
use labportal_db::repositories::{EventRepo, ParticipationRepo};

use crate::engine::EnrollmentEngine;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::state::AppState;

/// POST /api/v1/events/{event_id}/enroll
///
/// Enroll the caller into an event (or re-activate their cancelled
/// participation).
pub async fn enroll(
    user: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<(StatusCode, Json<Participation>)> {
    let participation = EnrollmentEngine::enroll(&state.pool, event_id, user.user_id).await?;
    Ok((StatusCode::CREATED, Json(participation)))
}

/// POST /api/v1/events/{event_id}/cancel
///
/// Cancel the caller's active enrollment.
pub async fn cancel(
    user: AuthUser,
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<Json<Participation>> {
    let participation = EnrollmentEngine::cancel(&state.pool, event_id, user.user_id).await?;
    Ok(Json(participation))
}

/// GET /api/v1/events/{event_id}/participations
///
/// Full participation ledger for an event, including cancelled and
/// marked rows. Staff only.
pub async fn list_for_event(
    RequireStaff(_user): RequireStaff,
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
) -> AppResult<Json<Vec<Participation>>> {
    EventRepo::find_by_id(&state.pool, event_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }))?;

    let participations = ParticipationRepo::find_by_event(&state.pool, event_id).await?;
    Ok(Json(participations))
}

/// GET /api/v1/me/participations
///
/// The caller's own participation history across all events.
pub async fn my_participations(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Participation>>> {
    let participations = ParticipationRepo::find_by_user(&state.pool, user.user_id).await?;
    Ok(Json(participations))
}
