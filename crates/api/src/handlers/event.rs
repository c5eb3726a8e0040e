//! Handlers for the `/events` resource (the event catalog).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use labportal_core::error::CoreError;
use labportal_core::event;
use labportal_core::types::{DbId, Timestamp};
use labportal_db::models::event::{CreateEvent, Event, UpdateEvent};
use labportal_db::repositories::EventRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::state::AppState;

/// Time-window filter for event listings.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventFilter {
    #[default]
    All,
    Upcoming,
    Past,
}

/// Query parameters for `GET /events`.
#[derive(Debug, Default, Deserialize)]
pub struct ListEventsQuery {
    #[serde(default)]
    pub filter: EventFilter,
}

/// Validate the fields shared by create and update payloads.
fn validate_event_fields(
    start_time: Timestamp,
    end_time: Timestamp,
    capacity: Option<i32>,
    status: Option<&str>,
) -> Result<(), AppError> {
    event::validate_schedule(start_time, end_time).map_err(CoreError::Validation)?;

    if let Some(capacity) = capacity {
        if capacity <= 0 {
            return Err(CoreError::Validation("capacity must be a positive integer".into()).into());
        }
    }

    if let Some(status) = status {
        event::validate_status(status).map_err(CoreError::Validation)?;
    }

    Ok(())
}

/// POST /api/v1/events
///
/// Create an event. Staff only. Event names are unique across the catalog.
pub async fn create(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Json(input): Json<CreateEvent>,
) -> AppResult<(StatusCode, Json<Event>)> {
    validate_event_fields(
        input.start_time,
        input.end_time,
        input.capacity,
        input.status.as_deref(),
    )?;

    if EventRepo::find_by_name(&state.pool, &input.name)
        .await?
        .is_some()
    {
        return Err(CoreError::DuplicateName(input.name.clone()).into());
    }

    let created = EventRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = user.user_id,
        event_id = created.id,
        name = %created.name,
        "Event created"
    );

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/events?filter=all|upcoming|past
pub async fn list(
    _user: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> AppResult<Json<Vec<Event>>> {
    let events = match query.filter {
        EventFilter::All => EventRepo::list(&state.pool).await?,
        EventFilter::Upcoming => EventRepo::list_upcoming(&state.pool).await?,
        EventFilter::Past => EventRepo::list_past(&state.pool).await?,
    };
    Ok(Json(events))
}

/// GET /api/v1/events/{id}
pub async fn get_by_id(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Event>> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))?;
    Ok(Json(event))
}

/// PUT /api/v1/events/{id}
///
/// Patch an event. Staff only. Name uniqueness is re-checked when the
/// name changes; the patched schedule must still be a valid time range.
pub async fn update(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEvent>,
) -> AppResult<Json<Event>> {
    let existing = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))?;

    // Validate the schedule that would result from applying the patch.
    let start_time = input.start_time.unwrap_or(existing.start_time);
    let end_time = input.end_time.unwrap_or(existing.end_time);
    validate_event_fields(start_time, end_time, input.capacity, input.status.as_deref())?;

    if let Some(ref name) = input.name {
        if name != &existing.name
            && EventRepo::find_by_name(&state.pool, name).await?.is_some()
        {
            return Err(CoreError::DuplicateName(name.clone()).into());
        }
    }

    let updated = EventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id,
        }))?;

    tracing::info!(user_id = user.user_id, event_id = id, "Event updated");

    Ok(Json(updated))
}
