use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Times stay optional so the booking rules can report which one is missing,
/// instead of the deserializer rejecting the body outright.
#[derive(Deserialize)]
pub struct SubmitBookingRequest {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
    #[serde(default)]
    pub capacity: i64,
    pub max_hours: i64,
    pub status: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateRoomRequest {
    pub name: Option<String>,
    pub capacity: Option<i64>,
    pub max_hours: Option<i64>,
    pub status: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Deserialize)]
pub struct StaffBookingQuery {
    /// Exact room id.
    pub room: Option<String>,
    /// Case-insensitive username substring.
    pub user: Option<String>,
}
