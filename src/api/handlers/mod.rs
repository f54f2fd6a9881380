pub mod auth;
pub mod availability;
pub mod booking;
pub mod health;
pub mod location;
pub mod payment;
pub mod space;
pub mod space_type;
pub mod user;

use chrono::{NaiveDate, NaiveTime};

use crate::error::AppError;

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format (YYYY-MM-DD)".into()))
}

pub(crate) fn parse_time(s: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| AppError::Validation("Invalid time format (HH:MM)".into()))
}
