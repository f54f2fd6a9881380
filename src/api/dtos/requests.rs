use serde::Deserialize;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateLocationRequest {
    pub name: String,
    pub address: String,
    pub manager_id: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateLocationRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub manager_id: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateSpaceTypeRequest {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateSpaceTypeRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateSpaceRequest {
    pub location_id: String,
    pub space_type_id: String,
    pub name: String,
    pub capacity: i32,
    pub price_per_hour_cents: i64,
    pub price_per_day_cents: i64,
}

#[derive(Deserialize)]
pub struct UpdateSpaceRequest {
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub price_per_hour_cents: Option<i64>,
    pub price_per_day_cents: Option<i64>,
}

#[derive(Deserialize)]
pub struct ListSpacesParams {
    pub location_id: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateAvailabilityRequest {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub is_available: Option<bool>,
}

#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub date: String,
}

#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub space_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: String,
}

#[derive(Deserialize)]
pub struct CreatePaymentRequest {
    pub booking_id: String,
    pub amount_cents: i64,
    pub method: String,
}

#[derive(Deserialize)]
pub struct UpdatePaymentStatusRequest {
    pub status: String,
}
