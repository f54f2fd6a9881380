use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateBookingRequest, UpdateBookingStatusRequest};
use crate::api::dtos::responses::success;
use crate::api::extractors::auth::AuthUser;
use crate::api::handlers::{parse_date, parse_time};
use crate::domain::models::booking::{Booking, BookingStatus, NewBookingParams};
use crate::domain::services::access::{self, Role, UPDATE_BOOKING_STATUS};
use crate::domain::services::pricing;
use crate::error::AppError;
use crate::state::AppState;

/// Books a space. The price is computed server-side from the space's
/// rates; the availability and overlap checks run again inside the insert
/// transaction, so two concurrent requests for the same window cannot
/// both succeed.
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let space = state
        .space_repo
        .find_by_id(&payload.space_id)
        .await?
        .ok_or(AppError::NotFound("Space not found".into()))?;

    let date = parse_date(&payload.date)?;
    let start_time = parse_time(&payload.start_time)?;
    let end_time = parse_time(&payload.end_time)?;

    let minutes = pricing::billable_minutes(start_time, end_time)?;
    let total_price_cents = pricing::quote(&space, minutes);

    let booking = Booking::new(NewBookingParams {
        user_id: user.id.clone(),
        space_id: space.id.clone(),
        date,
        start_time,
        end_time,
        total_hours: pricing::total_hours(minutes),
        total_price_cents,
    });

    let created = state.booking_repo.create_checked(&booking).await?;
    info!(
        "Booking created: {} for space {} on {} ({} cents)",
        created.id, created.space_id, created.date, created.total_price_cents
    );
    Ok((StatusCode::CREATED, success(created)))
}

/// Listing is scoped by role: users see their own bookings, managers see
/// bookings at their locations, admins see everything.
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let bookings = match Role::parse(&user.role)? {
        Role::Admin => state.booking_repo.list_all().await?,
        Role::Manager => state.booking_repo.list_by_manager(&user.id).await?,
        Role::User => state.booking_repo.list_by_user(&user.id).await?,
    };
    Ok(success(bookings))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state
        .booking_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    if !access::can_access_booking(&state, &user, &booking.user_id, &booking.space_id).await? {
        return Err(AppError::Forbidden("Not allowed to view this booking".into()));
    }

    Ok(success(booking))
}

pub async fn update_booking_status(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateBookingStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    UPDATE_BOOKING_STATUS.check(&user)?;

    let booking = state
        .booking_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    access::require_space_manager(&state, &user, &booking.space_id).await?;

    let new_status = BookingStatus::parse(&payload.status)?;
    let updated = state.booking_repo.update_status(&id, new_status).await?;
    info!("Booking {} status set to {}", updated.id, updated.status);
    Ok(success(updated))
}

pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state
        .booking_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    if !access::is_admin(&user) {
        if !access::can_access_booking(&state, &user, &booking.user_id, &booking.space_id).await? {
            return Err(AppError::Forbidden("Not allowed to delete this booking".into()));
        }
        // Owners and managers may only remove bookings that have not been
        // confirmed or completed; admins are unrestricted.
        match booking.status()? {
            BookingStatus::Confirmed | BookingStatus::Completed => {
                return Err(AppError::InvalidState(
                    "Confirmed or completed bookings cannot be deleted".into(),
                ));
            }
            BookingStatus::Pending | BookingStatus::Cancelled => {}
        }
    }

    state.booking_repo.delete(&id).await?;
    info!("Booking deleted: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
