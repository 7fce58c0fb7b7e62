use serde::Serialize;

use crate::domain::models::{booking::Booking, room::Room};

#[derive(Serialize)]
pub struct RoomDetailResponse {
    pub room: Room,
    pub bookings: Vec<Booking>,
}
