use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{AvailabilityQuery, CreateAvailabilityRequest};
use crate::api::dtos::responses::{success, DayAvailabilityResponse, FreeWindow};
use crate::api::extractors::auth::AuthUser;
use crate::api::handlers::{parse_date, parse_time};
use crate::domain::models::availability::Availability;
use crate::domain::services::access::{self, MANAGE_CATALOG};
use crate::domain::services::scheduling;
use crate::error::AppError;
use crate::state::AppState;

/// Public calendar view: the day's offered blocks plus the windows still
/// open after subtracting active bookings.
pub async fn list_availability(
    State(state): State<Arc<AppState>>,
    Path(space_id): Path<String>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    state
        .space_repo
        .find_by_id(&space_id)
        .await?
        .ok_or(AppError::NotFound("Space not found".into()))?;

    let date = parse_date(&query.date)?;

    let blocks = state.availability_repo.list_by_space_date(&space_id, date).await?;
    let bookings = state.booking_repo.list_active_by_space_date(&space_id, date).await?;

    let free_windows = scheduling::free_windows(&blocks, &bookings)
        .into_iter()
        .map(|(start_time, end_time)| FreeWindow { start_time, end_time })
        .collect();

    Ok(success(DayAvailabilityResponse {
        date: query.date,
        blocks,
        free_windows,
    }))
}

pub async fn create_availability(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(space_id): Path<String>,
    Json(payload): Json<CreateAvailabilityRequest>,
) -> Result<impl IntoResponse, AppError> {
    MANAGE_CATALOG.check(&user)?;
    access::require_space_manager(&state, &user, &space_id).await?;

    let date = parse_date(&payload.date)?;
    let start_time = parse_time(&payload.start_time)?;
    let end_time = parse_time(&payload.end_time)?;

    if end_time <= start_time {
        return Err(AppError::Validation("end_time must be after start_time".into()));
    }

    let block = Availability::new(
        space_id,
        date,
        start_time,
        end_time,
        payload.is_available.unwrap_or(true),
    );

    let created = state.availability_repo.create(&block).await?;
    info!("Availability block created: {} for space {}", created.id, created.space_id);
    Ok((StatusCode::CREATED, success(created)))
}

pub async fn delete_availability(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    MANAGE_CATALOG.check(&user)?;

    let block = state
        .availability_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Availability block not found".into()))?;

    access::require_space_manager(&state, &user, &block.space_id).await?;

    state.availability_repo.delete(&id).await?;
    info!("Availability block deleted: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
