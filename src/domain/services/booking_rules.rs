use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::domain::models::booking::{Booking, BookingCandidate};
use crate::domain::models::room::Room;

/// Why a candidate booking was refused. The variant order mirrors the order
/// the checks run in; the first failing check wins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("End time must be after start time")]
    InvalidInterval,
    #[error("You can only book up to {limit_hours} hour(s) per booking")]
    DurationExceeded { limit_hours: i64 },
    #[error("This room is currently unavailable for booking")]
    RoomUnavailable,
    #[error("This time slot overlaps with another booking")]
    SlotOverlap,
    #[error("You already have an active or upcoming booking for this room")]
    DuplicateActiveBooking,
}

impl RuleViolation {
    pub fn kind(&self) -> &'static str {
        match self {
            RuleViolation::MissingField(_) => "missing_field",
            RuleViolation::InvalidInterval => "invalid_interval",
            RuleViolation::DurationExceeded { .. } => "duration_exceeded",
            RuleViolation::RoomUnavailable => "room_unavailable",
            RuleViolation::SlotOverlap => "slot_overlap",
            RuleViolation::DuplicateActiveBooking => "duplicate_active_booking",
        }
    }
}

/// Decides whether a candidate booking may be persisted.
///
/// Pure apart from its inputs: the caller supplies the room the candidate
/// references (`None` when the reference itself is missing), every existing
/// booking for that room, and the current time. Runs on every save, not just
/// creation, so a persisted record being re-validated excludes itself from
/// the overlap and duplicate checks via `candidate.id`.
pub fn validate_booking(
    candidate: &BookingCandidate,
    room: Option<&Room>,
    existing: &[Booking],
    now: DateTime<Utc>,
) -> Result<(), RuleViolation> {
    let start = candidate.start_time.ok_or(RuleViolation::MissingField("start_time"))?;
    let end = candidate.end_time.ok_or(RuleViolation::MissingField("end_time"))?;

    if end <= start {
        return Err(RuleViolation::InvalidInterval);
    }

    if candidate.room_id.is_none() {
        return Err(RuleViolation::MissingField("room"));
    }
    let room = room.ok_or(RuleViolation::MissingField("room"))?;

    let user_id = candidate.user_id.as_deref().ok_or(RuleViolation::MissingField("user"))?;

    if end - start > Duration::hours(room.max_hours) {
        return Err(RuleViolation::DurationExceeded { limit_hours: room.max_hours });
    }

    if !room.is_available() {
        return Err(RuleViolation::RoomUnavailable);
    }

    let others = existing.iter().filter(|b| candidate.id.as_deref() != Some(b.id.as_str()));

    // Half-open intervals: a booking ending exactly when the candidate
    // starts does not overlap.
    if others.clone().any(|b| b.start_time < end && b.end_time > start) {
        return Err(RuleViolation::SlotOverlap);
    }

    if others.clone().any(|b| b.user_id == user_id && b.end_time >= now) {
        return Err(RuleViolation::DuplicateActiveBooking);
    }

    Ok(())
}
