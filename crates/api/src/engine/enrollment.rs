//! The enrollment state machine for a single (event, user) pair.
//!
//! States: unenrolled (no row), enrolled, cancelled, attended, absent.
//! `enroll` creates the row or re-activates a cancelled one -- the same
//! row is reused across the whole enroll/cancel/re-enroll cycle, so each
//! (event, user) pair keeps a single identity. `cancel` releases the seat
//! before the event starts. Attended/absent are applied by the attendance
//! batch processor, never here.

use chrono::Utc;

use labportal_core::error::CoreError;
use labportal_core::types::DbId;
use labportal_core::{event, participation};

use labportal_db::models::participation::Participation;
use labportal_db::repositories::{EventRepo, ParticipationRepo, UserRepo};
use labportal_db::DbPool;

use crate::error::AppError;

/// Drives enrollment and cancellation against one event.
pub struct EnrollmentEngine;

impl EnrollmentEngine {
    /// Enroll a user into an event, or re-activate their cancelled
    /// participation.
    ///
    /// The whole check-and-write runs in one transaction holding a row
    /// lock on the event (`SELECT ... FOR UPDATE`), so the capacity check
    /// cannot race with a concurrent enrollment: of two simultaneous
    /// calls against the last free seat, exactly one commits.
    ///
    /// Failure modes: `NotFound` (event or user missing), `Validation`
    /// (event already started), `DuplicateEnrollment` (already enrolled),
    /// `InvalidStatus` (participation already attended/absent),
    /// `CapacityExhausted` (no seat left -- re-activation re-checks
    /// capacity just like a first enrollment).
    pub async fn enroll(
        pool: &DbPool,
        event_id: DbId,
        user_id: DbId,
    ) -> Result<Participation, AppError> {
        let mut tx = pool.begin().await?;

        let event = EventRepo::lock_by_id(&mut tx, event_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Event",
                id: event_id,
            })?;

        if !UserRepo::exists(&mut *tx, user_id).await? {
            return Err(CoreError::NotFound {
                entity: "User",
                id: user_id,
            }
            .into());
        }

        if !event::enrollment_open(event.start_time, Utc::now()) {
            return Err(CoreError::Validation(
                "Enrollment is closed: the event has already started".into(),
            )
            .into());
        }

        let existing =
            ParticipationRepo::find_by_user_and_event(&mut *tx, user_id, event_id).await?;

        if let Some(ref p) = existing {
            if p.status == participation::STATUS_ENROLLED {
                return Err(CoreError::DuplicateEnrollment { event_id, user_id }.into());
            }
            if p.status != participation::STATUS_CANCELLED {
                return Err(CoreError::InvalidStatus(format!(
                    "Cannot re-enroll a participation with status '{}'",
                    p.status
                ))
                .into());
            }
        }

        if let Some(capacity) = event.capacity {
            let enrolled = ParticipationRepo::count_active(&mut *tx, event_id).await?;
            if enrolled >= i64::from(capacity) {
                return Err(CoreError::CapacityExhausted { event_id, capacity }.into());
            }
        }

        let result = match existing {
            Some(p) => {
                ParticipationRepo::transition_status(
                    &mut *tx,
                    p.id,
                    participation::STATUS_CANCELLED,
                    participation::STATUS_ENROLLED,
                )
                .await?
                .ok_or_else(|| {
                    CoreError::Internal(format!("Participation {} changed mid-transaction", p.id))
                })?
            }
            None => {
                ParticipationRepo::create(
                    &mut *tx,
                    event_id,
                    user_id,
                    participation::STATUS_ENROLLED,
                )
                .await?
            }
        };

        tx.commit().await?;

        tracing::info!(
            event_id,
            user_id,
            participation_id = result.id,
            "User enrolled"
        );

        Ok(result)
    }

    /// Cancel a user's active enrollment, releasing the seat.
    ///
    /// Failure modes: `NotFound` (event missing, or the user has no
    /// participation row), `Validation` (event already started),
    /// `InvalidStatus` (participation is not currently enrolled).
    pub async fn cancel(
        pool: &DbPool,
        event_id: DbId,
        user_id: DbId,
    ) -> Result<Participation, AppError> {
        let event = EventRepo::find_by_id(pool, event_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Event",
                id: event_id,
            })?;

        if !event::enrollment_open(event.start_time, Utc::now()) {
            return Err(CoreError::Validation(
                "Cancellation is closed: the event has already started".into(),
            )
            .into());
        }

        let existing = ParticipationRepo::find_by_user_and_event(pool, user_id, event_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Enrollment",
                id: event_id,
            })?;

        if existing.status != participation::STATUS_ENROLLED {
            return Err(CoreError::InvalidStatus(format!(
                "Cannot cancel a participation with status '{}'; user is not enrolled",
                existing.status
            ))
            .into());
        }

        // Compare-and-set: if another writer moved the row out of
        // enrolled since the read above (e.g. an attendance batch), the
        // cancel must not overwrite that transition.
        let result = ParticipationRepo::transition_status(
            pool,
            existing.id,
            participation::STATUS_ENROLLED,
            participation::STATUS_CANCELLED,
        )
        .await?
        .ok_or_else(|| {
            CoreError::InvalidStatus(format!(
                "Cannot cancel participation {}: it is no longer enrolled",
                existing.id
            ))
        })?;

        tracing::info!(
            event_id,
            user_id,
            participation_id = result.id,
            "Enrollment cancelled"
        );

        Ok(result)
    }
}
