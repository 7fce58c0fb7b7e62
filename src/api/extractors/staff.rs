use axum::{
    extract::{FromRequestParts, FromRef},
    http::{request::Parts, StatusCode},
};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::user::User;
use crate::state::AppState;
use std::sync::Arc;

/// `AuthUser` narrowed to staff accounts. Non-staff get a 403, never a 404,
/// because the staff surface itself is not a secret.
pub struct StaffUser(pub User);

impl<S> FromRequestParts<S> for StaffUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser(user) = AuthUser::from_request_parts(parts, state).await?;

        if !user.is_staff() {
            return Err(StatusCode::FORBIDDEN);
        }

        Ok(StaffUser(user))
    }
}
