use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
    Json,
};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn my_bookings(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let bookings = state.booking_repo.list_for_user(&user.id).await?;
    Ok(Json(bookings))
}

/// The lookup is scoped to the requester, so a booking owned by someone else
/// answers as not-found rather than forbidden. That masking is deliberate:
/// it keeps foreign booking ids unguessable.
pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = state.booking_repo.delete_owned(&booking_id, &user.id).await?;
    if !deleted {
        return Err(AppError::NotFound("Booking not found".into()));
    }

    info!("Booking cancelled: {}", booking_id);
    Ok(Redirect::to("/mine/"))
}
