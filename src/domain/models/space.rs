use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct SpaceType {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

impl SpaceType {
    pub fn new(name: String, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Space {
    pub id: String,
    pub location_id: String,
    pub space_type_id: String,
    pub name: String,
    pub capacity: i32,
    pub price_per_hour_cents: i64,
    pub price_per_day_cents: i64,
    pub created_at: DateTime<Utc>,
}

pub struct NewSpaceParams {
    pub location_id: String,
    pub space_type_id: String,
    pub name: String,
    pub capacity: i32,
    pub price_per_hour_cents: i64,
    pub price_per_day_cents: i64,
}

impl Space {
    pub fn new(params: NewSpaceParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            location_id: params.location_id,
            space_type_id: params.space_type_id,
            name: params.name,
            capacity: params.capacity,
            price_per_hour_cents: params.price_per_hour_cents,
            price_per_day_cents: params.price_per_day_cents,
            created_at: Utc::now(),
        }
    }
}
