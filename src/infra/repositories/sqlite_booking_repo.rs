use crate::domain::{models::booking::{Booking, BookingOverview}, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const OVERVIEW_SELECT: &str =
    "SELECT b.id, b.room_id, r.name AS room_name, b.user_id, u.username, b.start_time, b.end_time, b.created_at
     FROM bookings b
     JOIN rooms r ON r.id = b.room_id
     JOIN users u ON u.id = b.user_id";

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        // Guarded insert: the overlap and duplicate-active checks run inside
        // the same statement as the write, so SQLite's single-writer model
        // makes the read-then-write race unobservable. Zero rows means a
        // concurrent submission won.
        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, room_id, user_id, start_time, end_time, created_at)
             SELECT ?, ?, ?, ?, ?, ?
             WHERE NOT EXISTS (
                 SELECT 1 FROM bookings
                 WHERE room_id = ? AND start_time < ? AND end_time > ?
             )
             AND NOT EXISTS (
                 SELECT 1 FROM bookings
                 WHERE room_id = ? AND user_id = ? AND end_time >= ?
             )
             RETURNING *"
        )
            .bind(&booking.id).bind(&booking.room_id).bind(&booking.user_id)
            .bind(booking.start_time).bind(booking.end_time).bind(booking.created_at)
            .bind(&booking.room_id).bind(booking.end_time).bind(booking.start_time)
            .bind(&booking.room_id).bind(&booking.user_id).bind(Utc::now())
            .fetch_optional(&self.pool).await.map_err(AppError::Database)?;

        created.ok_or_else(|| AppError::Conflict("This time slot is no longer available".into()))
    }

    async fn list_by_room(&self, room_id: &str) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE room_id = ? ORDER BY start_time ASC")
            .bind(room_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<BookingOverview>, AppError> {
        sqlx::query_as::<_, BookingOverview>(
            &format!("{OVERVIEW_SELECT} WHERE b.user_id = ? ORDER BY b.start_time ASC")
        )
            .bind(user_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete_owned(&self, id: &str, user_id: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = ? AND user_id = ?")
            .bind(id).bind(user_id).execute(&self.pool).await.map_err(AppError::Database)?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_all(
        &self,
        room_id: Option<&str>,
        username_contains: Option<&str>,
    ) -> Result<Vec<BookingOverview>, AppError> {
        sqlx::query_as::<_, BookingOverview>(
            &format!(
                "{OVERVIEW_SELECT}
                 WHERE (? IS NULL OR b.room_id = ?)
                   AND (? IS NULL OR instr(lower(u.username), lower(?)) > 0)
                 ORDER BY b.start_time DESC"
            )
        )
            .bind(room_id).bind(room_id)
            .bind(username_contains).bind(username_contains)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
