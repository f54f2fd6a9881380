use chrono::NaiveTime;

use crate::domain::models::space::Space;
use crate::error::AppError;

/// Bookings at or above this duration are billed at the day rate.
pub const DAY_RATE_THRESHOLD_MINUTES: i64 = 8 * 60;

/// Duration of the requested window in minutes. A window whose end is not
/// strictly after its start is rejected; overnight bookings are not
/// supported, so there is no midnight wrap-around.
pub fn billable_minutes(start: NaiveTime, end: NaiveTime) -> Result<i64, AppError> {
    let minutes = (end - start).num_minutes();
    if minutes <= 0 {
        return Err(AppError::Validation("end_time must be after start_time".into()));
    }
    Ok(minutes)
}

pub fn total_hours(minutes: i64) -> f64 {
    minutes as f64 / 60.0
}

/// The one authoritative price rule: day rate from 8 hours, hourly below.
pub fn quote(space: &Space, minutes: i64) -> i64 {
    if minutes >= DAY_RATE_THRESHOLD_MINUTES {
        space.price_per_day_cents
    } else {
        space.price_per_hour_cents * minutes / 60
    }
}
