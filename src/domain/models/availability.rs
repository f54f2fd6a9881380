use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;

/// A window in which a space is offered for booking. Rows are independent
/// and may overlap; there is no uniqueness beyond the primary key.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Availability {
    pub id: String,
    pub space_id: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

impl Availability {
    pub fn new(space_id: String, date: NaiveDate, start_time: NaiveTime, end_time: NaiveTime, is_available: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            space_id,
            date,
            start_time,
            end_time,
            is_available,
            created_at: Utc::now(),
        }
    }
}
