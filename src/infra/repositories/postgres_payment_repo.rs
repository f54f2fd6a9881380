use crate::domain::{
    models::{booking::Booking, payment::{Payment, PaymentStatus}},
    ports::PaymentRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{PgPool, Row};

pub struct PostgresPaymentRepo {
    pool: PgPool,
}

impl PostgresPaymentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRepository for PostgresPaymentRepo {
    async fn create_completed(&self, payment: &Payment) -> Result<Payment, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1 FOR UPDATE")
            .bind(&payment.booking_id)
            .fetch_optional(&mut *tx).await.map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Booking not found".into()))?;

        if booking.status()?.is_terminal() {
            return Err(AppError::InvalidState(format!("Booking is already {}", booking.status)));
        }

        let paid = sqlx::query("SELECT COUNT(*) as count FROM payments WHERE booking_id = $1 AND status = 'completed'")
            .bind(&payment.booking_id)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?
            .get::<i64, _>("count");
        if paid > 0 {
            return Err(AppError::Conflict("Booking is already paid".into()));
        }

        let created = sqlx::query_as::<_, Payment>(
            "INSERT INTO payments (id, booking_id, amount_cents, method, status, transaction_id, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *"
        )
            .bind(&payment.id).bind(&payment.booking_id).bind(payment.amount_cents)
            .bind(&payment.method).bind(&payment.status).bind(&payment.transaction_id).bind(payment.created_at)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        sqlx::query("UPDATE bookings SET status = 'confirmed' WHERE id = $1")
            .bind(&payment.booking_id)
            .execute(&mut *tx).await.map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Payment>, AppError> {
        sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE id = $1").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_booking(&self, booking_id: &str) -> Result<Vec<Payment>, AppError> {
        sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE booking_id = $1 ORDER BY created_at ASC").bind(booking_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn update_status(&self, id: &str, new_status: PaymentStatus) -> Result<Payment, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let payment = sqlx::query_as::<_, Payment>("SELECT * FROM payments WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx).await.map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Payment not found".into()))?;

        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1 FOR UPDATE")
            .bind(&payment.booking_id)
            .fetch_optional(&mut *tx).await.map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Booking not found".into()))?;

        let effect = new_status.booking_effect();
        let terminal = booking.status()?.is_terminal();
        if terminal && booking.status != effect.as_str() {
            return Err(AppError::InvalidState(format!("Booking is already {}", booking.status)));
        }

        let updated = sqlx::query_as::<_, Payment>("UPDATE payments SET status = $1 WHERE id = $2 RETURNING *")
            .bind(new_status.as_str()).bind(id)
            .fetch_one(&mut *tx).await.map_err(AppError::Database)?;

        if !terminal {
            sqlx::query("UPDATE bookings SET status = $1 WHERE id = $2")
                .bind(effect.as_str()).bind(&payment.booking_id)
                .execute(&mut *tx).await.map_err(AppError::Database)?;
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(updated)
    }
}
