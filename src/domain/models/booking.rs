use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Booking {
    pub id: String,
    pub room_id: String,
    pub user_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(room_id: String, user_id: String, start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            room_id,
            user_id,
            start_time,
            end_time,
            created_at: Utc::now(),
        }
    }
}

/// A submission as it arrives from a form, before the booking rules have
/// accepted it. Fields are optional because the rules decide what a missing
/// field means; `id` is set when re-validating a persisted record so the
/// overlap and duplicate checks can exclude the record itself.
#[derive(Debug, Default, Clone)]
pub struct BookingCandidate {
    pub id: Option<String>,
    pub room_id: Option<String>,
    pub user_id: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

/// Booking joined with its room and owner, for listings.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct BookingOverview {
    pub id: String,
    pub room_id: String,
    pub room_name: String,
    pub user_id: String,
    pub username: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
