//! Bulk attendance marking for one event.
//!
//! Staff submit a list of user ids; each user is judged independently and
//! the caller gets back one outcome per input id. All applied writes
//! commit together -- an ineligible user never aborts the batch, only a
//! storage failure does.

use std::collections::BTreeMap;

use labportal_core::error::CoreError;
use labportal_core::participation::{
    self, OUTCOME_INVALID_STATUS, OUTCOME_MARKED, OUTCOME_NOT_ENROLLED,
};
use labportal_core::types::DbId;

use labportal_db::repositories::{EventRepo, ParticipationRepo};
use labportal_db::DbPool;

use crate::error::AppError;

/// Applies a terminal attendance status to a batch of users in one
/// transaction.
pub struct AttendanceBatchProcessor;

impl AttendanceBatchProcessor {
    /// Mark every eligible user in `user_ids` as `target` (attended or
    /// absent) against one event.
    ///
    /// Returns a map with exactly one outcome per distinct input user id:
    /// `"marked"`, `"not enrolled"` (no participation row), or
    /// `"invalid status"` (participation not currently enrolled --
    /// including already-marked users, so re-marking is rejected rather
    /// than reapplied). Duplicate ids in the input collapse to the first
    /// occurrence's outcome.
    ///
    /// Fails with `NotFound` if the event does not exist and
    /// `InvalidStatus` if `target` is not a terminal attendance status.
    pub async fn mark(
        pool: &DbPool,
        event_id: DbId,
        user_ids: &[DbId],
        target: &str,
    ) -> Result<BTreeMap<DbId, String>, AppError> {
        if !participation::is_marking_target(target) {
            return Err(CoreError::InvalidStatus(format!(
                "'{target}' is not a terminal attendance status"
            ))
            .into());
        }

        EventRepo::find_by_id(pool, event_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Event",
                id: event_id,
            })?;

        let mut tx = pool.begin().await?;
        let mut outcomes: BTreeMap<DbId, String> = BTreeMap::new();
        let mut marked = 0usize;

        for &user_id in user_ids {
            if outcomes.contains_key(&user_id) {
                continue;
            }

            let outcome = match ParticipationRepo::find_by_user_and_event(
                &mut *tx, user_id, event_id,
            )
            .await?
            {
                None => OUTCOME_NOT_ENROLLED,
                Some(p) if !participation::can_mark(&p.status) => OUTCOME_INVALID_STATUS,
                Some(p) => {
                    // Compare-and-set: if a cancel committed after the
                    // read above, the write applies to zero rows and the
                    // user is reported instead of silently re-marked.
                    match ParticipationRepo::transition_status(
                        &mut *tx,
                        p.id,
                        participation::STATUS_ENROLLED,
                        target,
                    )
                    .await?
                    {
                        Some(_) => {
                            marked += 1;
                            OUTCOME_MARKED
                        }
                        None => OUTCOME_INVALID_STATUS,
                    }
                }
            };

            outcomes.insert(user_id, outcome.to_string());
        }

        tx.commit().await?;

        tracing::info!(
            event_id,
            target,
            requested = user_ids.len(),
            marked,
            "Attendance batch applied"
        );

        Ok(outcomes)
    }
}
