use crate::domain::{models::space::{Space, SpaceType}, ports::SpaceRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresSpaceRepo {
    pool: PgPool,
}

impl PostgresSpaceRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SpaceRepository for PostgresSpaceRepo {
    async fn create(&self, space: &Space) -> Result<Space, AppError> {
        sqlx::query_as::<_, Space>(
            "INSERT INTO spaces (id, location_id, space_type_id, name, capacity, price_per_hour_cents, price_per_day_cents, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING *"
        )
            .bind(&space.id).bind(&space.location_id).bind(&space.space_type_id).bind(&space.name)
            .bind(space.capacity).bind(space.price_per_hour_cents).bind(space.price_per_day_cents).bind(space.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Space>, AppError> {
        sqlx::query_as::<_, Space>("SELECT * FROM spaces WHERE id = $1").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list(&self, location_id: Option<&str>) -> Result<Vec<Space>, AppError> {
        match location_id {
            Some(loc) => sqlx::query_as::<_, Space>("SELECT * FROM spaces WHERE location_id = $1 ORDER BY name ASC").bind(loc).fetch_all(&self.pool).await.map_err(AppError::Database),
            None => sqlx::query_as::<_, Space>("SELECT * FROM spaces ORDER BY name ASC").fetch_all(&self.pool).await.map_err(AppError::Database),
        }
    }
    async fn update(&self, space: &Space) -> Result<Space, AppError> {
        sqlx::query_as::<_, Space>(
            "UPDATE spaces SET name = $1, capacity = $2, price_per_hour_cents = $3, price_per_day_cents = $4 WHERE id = $5 RETURNING *"
        )
            .bind(&space.name).bind(space.capacity).bind(space.price_per_hour_cents)
            .bind(space.price_per_day_cents).bind(&space.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM spaces WHERE id = $1").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Space not found".into())); }
        Ok(())
    }

    async fn create_type(&self, space_type: &SpaceType) -> Result<SpaceType, AppError> {
        sqlx::query_as::<_, SpaceType>(
            "INSERT INTO space_types (id, name, description) VALUES ($1, $2, $3) RETURNING *"
        )
            .bind(&space_type.id).bind(&space_type.name).bind(&space_type.description)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn find_type_by_id(&self, id: &str) -> Result<Option<SpaceType>, AppError> {
        sqlx::query_as::<_, SpaceType>("SELECT * FROM space_types WHERE id = $1").bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }
    async fn list_types(&self) -> Result<Vec<SpaceType>, AppError> {
        sqlx::query_as::<_, SpaceType>("SELECT * FROM space_types ORDER BY name ASC").fetch_all(&self.pool).await.map_err(AppError::Database)
    }
    async fn update_type(&self, space_type: &SpaceType) -> Result<SpaceType, AppError> {
        sqlx::query_as::<_, SpaceType>(
            "UPDATE space_types SET name = $1, description = $2 WHERE id = $3 RETURNING *"
        )
            .bind(&space_type.name).bind(&space_type.description).bind(&space_type.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }
    async fn delete_type(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM space_types WHERE id = $1").bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 { return Err(AppError::NotFound("Space type not found".into())); }
        Ok(())
    }
}
