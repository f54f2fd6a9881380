use crate::domain::{models::booking::{Booking, BookingStatus}, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{Row, SqlitePool};

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create_checked(&self, booking: &Booking) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // SQLite has no row locks; the self-assignment forces the
        // transaction to take the write lock before the checks below, so
        // two concurrent creates for the same space/date serialize.
        sqlx::query("UPDATE availability SET is_available = is_available WHERE space_id = ? AND date = ?")
            .bind(&booking.space_id).bind(booking.date)
            .execute(&mut *tx).await.map_err(AppError::Database)?;

        let covered = sqlx::query(
            "SELECT COUNT(*) as count FROM availability
             WHERE space_id = ? AND date = ? AND is_available = 1
               AND start_time <= ? AND end_time >= ?"
        )
            .bind(&booking.space_id).bind(booking.date)
            .bind(booking.start_time).bind(booking.end_time)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?
            .get::<i64, _>("count");
        if covered == 0 {
            return Err(AppError::Conflict("Space is not available for the requested time".into()));
        }

        let overlapping = sqlx::query(
            "SELECT COUNT(*) as count FROM bookings
             WHERE space_id = ? AND date = ? AND status IN ('pending', 'confirmed')
               AND start_time < ? AND end_time > ?"
        )
            .bind(&booking.space_id).bind(booking.date)
            .bind(booking.end_time).bind(booking.start_time)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?
            .get::<i64, _>("count");
        if overlapping > 0 {
            return Err(AppError::Conflict("Space is already booked for the requested time".into()));
        }

        let created = sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, user_id, space_id, date, start_time, end_time, total_hours, total_price_cents, status, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&booking.id).bind(&booking.user_id).bind(&booking.space_id).bind(booking.date)
            .bind(booking.start_time).bind(booking.end_time).bind(booking.total_hours)
            .bind(booking.total_price_cents).bind(&booking.status).bind(booking.created_at)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_all(&self) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY date ASC, start_time ASC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE user_id = ? ORDER BY date ASC, start_time ASC").bind(user_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_manager(&self, manager_id: &str) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>(
            "SELECT b.* FROM bookings b
             JOIN spaces s ON s.id = b.space_id
             JOIN locations l ON l.id = s.location_id
             WHERE l.manager_id = ?
             ORDER BY b.date ASC, b.start_time ASC"
        )
            .bind(manager_id)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_active_by_space_date(&self, space_id: &str, date: NaiveDate) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE space_id = ? AND date = ? AND status IN ('pending', 'confirmed') ORDER BY start_time ASC"
        )
            .bind(space_id).bind(date)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn update_status(&self, id: &str, new_status: BookingStatus) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let current = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx).await.map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Booking not found".into()))?;

        if current.status()?.is_terminal() {
            return Err(AppError::InvalidState(format!("Booking is already {}", current.status)));
        }

        let updated = sqlx::query_as::<_, Booking>("UPDATE bookings SET status = ? WHERE id = ? RETURNING *")
            .bind(new_status.as_str()).bind(id)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(updated)
    }
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = ?").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Booking not found".into())); }
        Ok(())
    }
}
