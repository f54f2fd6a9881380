use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub address: String,
    pub manager_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Location {
    pub fn new(name: String, address: String, manager_id: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            address,
            manager_id,
            created_at: Utc::now(),
        }
    }
}
