use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::models::booking::BookingStatus;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Completed,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s {
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            "refunded" => Ok(Self::Refunded),
            other => Err(AppError::Validation(format!("Unknown payment status: {}", other))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
        }
    }

    /// The booking status implied by this payment status. A completed
    /// payment confirms the booking; failed and refunded cancel it.
    pub fn booking_effect(&self) -> BookingStatus {
        match self {
            Self::Completed => BookingStatus::Confirmed,
            Self::Failed | Self::Refunded => BookingStatus::Cancelled,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Payment {
    pub id: String,
    pub booking_id: String,
    pub amount_cents: i64,
    pub method: String,
    pub status: String,
    pub transaction_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    /// Gateway integration is simulated: payments are created already
    /// settled, carrying a locally generated transaction id.
    pub fn new_completed(booking_id: String, amount_cents: i64, method: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            booking_id,
            amount_cents,
            method,
            status: PaymentStatus::Completed.as_str().to_string(),
            transaction_id: Some(format!("txn_{}", Uuid::new_v4())),
            created_at: Utc::now(),
        }
    }
}
