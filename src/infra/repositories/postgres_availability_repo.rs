use crate::domain::{models::availability::Availability, ports::AvailabilityRepository};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

pub struct PostgresAvailabilityRepo {
    pool: PgPool,
}

impl PostgresAvailabilityRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvailabilityRepository for PostgresAvailabilityRepo {
    async fn create(&self, block: &Availability) -> Result<Availability, AppError> {
        sqlx::query_as::<_, Availability>(
            "INSERT INTO availability (id, space_id, date, start_time, end_time, is_available, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING *"
        )
            .bind(&block.id).bind(&block.space_id).bind(block.date)
            .bind(block.start_time).bind(block.end_time).bind(block.is_available).bind(block.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Availability>, AppError> {
        sqlx::query_as::<_, Availability>("SELECT * FROM availability WHERE id = $1").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_by_space_date(&self, space_id: &str, date: NaiveDate) -> Result<Vec<Availability>, AppError> {
        sqlx::query_as::<_, Availability>(
            "SELECT * FROM availability WHERE space_id = $1 AND date = $2 ORDER BY start_time ASC"
        )
            .bind(space_id).bind(date)
            .fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM availability WHERE id = $1").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Availability block not found".into())); }
        Ok(())
    }
}
