use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use crate::state::AppState;
use crate::api::dtos::requests::SubmitBookingRequest;
use crate::api::dtos::responses::RoomDetailResponse;
use crate::api::extractors::maybe_auth::MaybeAuthUser;
use crate::domain::models::booking::{Booking, BookingCandidate};
use crate::domain::services::booking_rules::validate_booking;
use crate::error::AppError;
use std::sync::Arc;
use chrono::Utc;
use tracing::{info, warn};

pub async fn list_rooms(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let rooms = state.room_repo.list().await?;
    Ok(Json(rooms))
}

/// Anyone may view a room and its bookings.
pub async fn room_detail(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let room = state.room_repo.find_by_id(&room_id).await?
        .ok_or(AppError::NotFound("Room not found".into()))?;

    let bookings = state.booking_repo.list_by_room(&room.id).await?;

    Ok(Json(RoomDetailResponse { room, bookings }))
}

/// Submitting requires login: anonymous submissions are redirected to the
/// login endpoint with the room path preserved in `next`.
pub async fn submit_booking(
    State(state): State<Arc<AppState>>,
    MaybeAuthUser(user): MaybeAuthUser,
    Path(room_id): Path<String>,
    Json(payload): Json<SubmitBookingRequest>,
) -> Result<Response, AppError> {
    let Some(user) = user else {
        return Ok(Redirect::to(&format!("/login/?next=/room/{}/", room_id)).into_response());
    };

    let room = state.room_repo.find_by_id(&room_id).await?
        .ok_or(AppError::NotFound("Room not found".into()))?;

    let candidate = BookingCandidate {
        id: None,
        room_id: Some(room.id.clone()),
        user_id: Some(user.id.clone()),
        start_time: payload.start_time,
        end_time: payload.end_time,
    };

    let existing = state.booking_repo.list_by_room(&room.id).await?;

    if let Err(violation) = validate_booking(&candidate, Some(&room), &existing, Utc::now()) {
        warn!("Booking rejected for room {}: {}", room.id, violation);
        return Err(violation.into());
    }

    // Both times are present once validation passed.
    let booking = Booking::new(
        room.id.clone(),
        user.id.clone(),
        payload.start_time.ok_or(AppError::Internal)?,
        payload.end_time.ok_or(AppError::Internal)?,
    );

    let created = state.booking_repo.create(&booking).await?;
    info!("Booking confirmed: {} for room {}", created.id, room.id);

    Ok(Json(created).into_response())
}
