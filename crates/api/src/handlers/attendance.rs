//! Handlers for bulk attendance marking. Staff only.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use labportal_core::participation::{STATUS_ABSENT, STATUS_ATTENDED};
use labportal_core::types::DbId;

use crate::engine::AttendanceBatchProcessor;
use crate::error::AppResult;
use crate::middleware::rbac::RequireStaff;
use crate::state::AppState;

/// Request body for bulk attendance marking.
#[derive(Debug, Deserialize)]
pub struct MarkAttendanceRequest {
    pub user_ids: Vec<DbId>,
}

/// Per-user outcome report covering every requested user.
#[derive(Debug, Serialize)]
pub struct AttendanceOutcomes {
    pub outcomes: BTreeMap<DbId, String>,
}

/// POST /api/v1/events/{event_id}/attendance/attended
pub async fn mark_attended(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
    Json(input): Json<MarkAttendanceRequest>,
) -> AppResult<Json<AttendanceOutcomes>> {
    let outcomes =
        AttendanceBatchProcessor::mark(&state.pool, event_id, &input.user_ids, STATUS_ATTENDED)
            .await?;

    tracing::info!(
        user_id = user.user_id,
        event_id,
        requested = input.user_ids.len(),
        "Marked attendance: attended"
    );

    Ok(Json(AttendanceOutcomes { outcomes }))
}

/// POST /api/v1/events/{event_id}/attendance/absent
pub async fn mark_absent(
    RequireStaff(user): RequireStaff,
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
    Json(input): Json<MarkAttendanceRequest>,
) -> AppResult<Json<AttendanceOutcomes>> {
    let outcomes =
        AttendanceBatchProcessor::mark(&state.pool, event_id, &input.user_ids, STATUS_ABSENT)
            .await?;

    tracing::info!(
        user_id = user.user_id,
        event_id,
        requested = input.user_ids.len(),
        "Marked attendance: absent"
    );

    Ok(Json(AttendanceOutcomes { outcomes }))
}
