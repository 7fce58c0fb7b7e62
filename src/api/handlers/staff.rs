use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateRoomRequest, StaffBookingQuery, UpdateRoomRequest};
use crate::api::extractors::staff::StaffUser;
use crate::domain::models::room::{NewRoomParams, Room, ROOM_AVAILABLE, ROOM_UNAVAILABLE};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    _staff: StaffUser,
    Query(filter): Query<StaffBookingQuery>,
) -> Result<impl IntoResponse, AppError> {
    let bookings = state.booking_repo
        .list_all(filter.room.as_deref(), filter.user.as_deref())
        .await?;
    Ok(Json(bookings))
}

pub async fn create_room(
    State(state): State<Arc<AppState>>,
    StaffUser(staff): StaffUser,
    Json(payload): Json<CreateRoomRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_room_fields(payload.max_hours, payload.capacity, payload.status.as_deref())?;

    let room = Room::new(NewRoomParams {
        name: payload.name,
        capacity: payload.capacity,
        max_hours: payload.max_hours,
        status: payload.status,
        image_url: payload.image_url,
    });
    let created = state.room_repo.create(&room).await?;

    info!("Room created: {} by staff {}", created.id, staff.id);
    Ok(Json(created))
}

pub async fn update_room(
    State(state): State<Arc<AppState>>,
    StaffUser(staff): StaffUser,
    Path(room_id): Path<String>,
    Json(payload): Json<UpdateRoomRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut room = state.room_repo.find_by_id(&room_id).await?
        .ok_or(AppError::NotFound("Room not found".into()))?;

    if let Some(name) = payload.name { room.name = name; }
    if let Some(capacity) = payload.capacity { room.capacity = capacity; }
    if let Some(max_hours) = payload.max_hours { room.max_hours = max_hours; }
    if let Some(status) = payload.status { room.status = status; }
    if let Some(image_url) = payload.image_url {
        room.image_url = if image_url.is_empty() { None } else { Some(image_url) };
    }

    validate_room_fields(room.max_hours, room.capacity, Some(&room.status))?;

    let updated = state.room_repo.update(&room).await?;
    info!("Room updated: {} by staff {}", updated.id, staff.id);
    Ok(Json(updated))
}

/// Bookings for the room cascade away with it.
pub async fn delete_room(
    State(state): State<Arc<AppState>>,
    StaffUser(staff): StaffUser,
    Path(room_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.room_repo.delete(&room_id).await?;
    info!("Room deleted: {} by staff {}", room_id, staff.id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

fn validate_room_fields(max_hours: i64, capacity: i64, status: Option<&str>) -> Result<(), AppError> {
    if max_hours < 1 {
        return Err(AppError::Validation("max_hours must be at least 1".into()));
    }
    if capacity < 0 {
        return Err(AppError::Validation("capacity must not be negative".into()));
    }
    if let Some(status) = status
        && status != ROOM_AVAILABLE && status != ROOM_UNAVAILABLE {
        return Err(AppError::Validation("status must be AVAILABLE or UNAVAILABLE".into()));
    }
    Ok(())
}
