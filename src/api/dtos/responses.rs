use axum::Json;
use chrono::NaiveTime;
use serde::Serialize;
use serde_json::{json, Value};

use crate::domain::models::availability::Availability;

/// Uniform success envelope: `{"status": "success", "data": ...}`.
/// Errors carry `{"status": "fail", "message": ...}` via `AppError`.
pub fn success<T: Serialize>(data: T) -> Json<Value> {
    Json(json!({ "status": "success", "data": data }))
}

#[derive(Serialize)]
pub struct FreeWindow {
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Serialize)]
pub struct DayAvailabilityResponse {
    pub date: String,
    pub blocks: Vec<Availability>,
    pub free_windows: Vec<FreeWindow>,
}
