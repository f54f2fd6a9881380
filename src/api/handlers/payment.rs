use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreatePaymentRequest, UpdatePaymentStatusRequest};
use crate::api::dtos::responses::success;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::payment::{Payment, PaymentStatus};
use crate::domain::services::access::{self, UPDATE_PAYMENT_STATUS};
use crate::error::AppError;
use crate::state::AppState;

/// Settles a booking. The gateway is simulated, so the payment is created
/// already completed and the booking is confirmed in the same transaction.
pub async fn create_payment(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreatePaymentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state
        .booking_repo
        .find_by_id(&payload.booking_id)
        .await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    if booking.user_id != user.id {
        return Err(AppError::Forbidden("Only the booking owner can pay for it".into()));
    }

    if payload.amount_cents != booking.total_price_cents {
        return Err(AppError::Validation(format!(
            "Payment amount must equal the booking total ({} cents)",
            booking.total_price_cents
        )));
    }

    let payment = Payment::new_completed(booking.id.clone(), payload.amount_cents, payload.method);
    let created = state.payment_repo.create_completed(&payment).await?;
    info!("Payment completed: {} for booking {}", created.id, created.booking_id);
    Ok((StatusCode::CREATED, success(created)))
}

pub async fn get_payment(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let payment = state
        .payment_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Payment not found".into()))?;

    let booking = state
        .booking_repo
        .find_by_id(&payment.booking_id)
        .await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    if !access::can_access_booking(&state, &user, &booking.user_id, &booking.space_id).await? {
        return Err(AppError::Forbidden("Not allowed to view this payment".into()));
    }

    Ok(success(payment))
}

pub async fn list_booking_payments(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state
        .booking_repo
        .find_by_id(&booking_id)
        .await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    if !access::can_access_booking(&state, &user, &booking.user_id, &booking.space_id).await? {
        return Err(AppError::Forbidden("Not allowed to view these payments".into()));
    }

    let payments = state.payment_repo.find_by_booking(&booking_id).await?;
    Ok(success(payments))
}

pub async fn update_payment_status(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePaymentStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    UPDATE_PAYMENT_STATUS.check(&user)?;

    let payment = state
        .payment_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Payment not found".into()))?;

    let booking = state
        .booking_repo
        .find_by_id(&payment.booking_id)
        .await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    access::require_space_manager(&state, &user, &booking.space_id).await?;

    let new_status = PaymentStatus::parse(&payload.status)?;
    let updated = state.payment_repo.update_status(&id, new_status).await?;
    info!("Payment {} status set to {}", updated.id, updated.status);
    Ok(success(updated))
}
