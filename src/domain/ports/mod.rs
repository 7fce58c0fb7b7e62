use crate::domain::models::{
    auth::RefreshTokenRecord,
    booking::{Booking, BookingOverview},
    room::Room,
    user::User,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn create(&self, room: &Room) -> Result<Room, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Room>, AppError>;
    async fn list(&self) -> Result<Vec<Room>, AppError>;
    async fn update(&self, room: &Room) -> Result<Room, AppError>;
    /// Deletes the room; its bookings cascade away at the storage layer.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Inserts the booking, re-asserting the overlap and duplicate-booking
    /// rules atomically at commit time. The in-process validation is only a
    /// user-facing pre-filter; two concurrent submissions may both pass it,
    /// and this is where the loser is turned away with a conflict.
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn list_by_room(&self, room_id: &str) -> Result<Vec<Booking>, AppError>;
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<BookingOverview>, AppError>;
    /// Scoped to the owner: a booking belonging to someone else is
    /// indistinguishable from a missing one.
    async fn delete_owned(&self, id: &str, user_id: &str) -> Result<bool, AppError>;
    async fn list_all(
        &self,
        room_id: Option<&str>,
        username_contains: Option<&str>,
    ) -> Result<Vec<BookingOverview>, AppError>;
}

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn create_refresh_token(&self, record: &RefreshTokenRecord) -> Result<(), AppError>;
    async fn find_refresh_token(&self, token_hash: &str) -> Result<Option<RefreshTokenRecord>, AppError>;
    async fn delete_refresh_token(&self, token_hash: &str) -> Result<(), AppError>;
}
