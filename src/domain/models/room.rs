use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const ROOM_AVAILABLE: &str = "AVAILABLE";
pub const ROOM_UNAVAILABLE: &str = "UNAVAILABLE";

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Room {
    pub id: String,
    pub name: String,
    /// Informational only; the booking rules do not enforce it.
    pub capacity: i64,
    /// Maximum booking duration in hours.
    pub max_hours: i64,
    pub status: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewRoomParams {
    pub name: String,
    pub capacity: i64,
    pub max_hours: i64,
    pub status: Option<String>,
    pub image_url: Option<String>,
}

impl Room {
    pub fn new(params: NewRoomParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: params.name,
            capacity: params.capacity,
            max_hours: params.max_hours,
            status: params.status.unwrap_or_else(|| ROOM_AVAILABLE.to_string()),
            image_url: params.image_url,
            created_at: Utc::now(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == ROOM_AVAILABLE
    }
}
