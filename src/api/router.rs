use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get, patch, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{
    auth, availability, booking, health, location, payment, space, space_type, user,
};
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))

        // Users
        .route("/api/v1/users", get(user::list_users))
        .route("/api/v1/users/{id}", get(user::get_user).patch(user::update_user).delete(user::delete_user))

        // Catalog
        .route("/api/v1/locations", get(location::list_locations).post(location::create_location))
        .route("/api/v1/locations/{id}", get(location::get_location).patch(location::update_location).delete(location::delete_location))
        .route("/api/v1/space-types", get(space_type::list_space_types).post(space_type::create_space_type))
        .route("/api/v1/space-types/{id}", get(space_type::get_space_type).patch(space_type::update_space_type).delete(space_type::delete_space_type))
        .route("/api/v1/spaces", get(space::list_spaces).post(space::create_space))
        .route("/api/v1/spaces/{id}", get(space::get_space).patch(space::update_space).delete(space::delete_space))

        // Availability
        .route("/api/v1/spaces/{id}/availability", get(availability::list_availability).post(availability::create_availability))
        .route("/api/v1/availability/{id}", delete(availability::delete_availability))

        // Bookings
        .route("/api/v1/bookings", get(booking::list_bookings).post(booking::create_booking))
        .route("/api/v1/bookings/{id}", get(booking::get_booking).delete(booking::delete_booking))
        .route("/api/v1/bookings/{id}/status", patch(booking::update_booking_status))
        .route("/api/v1/bookings/{id}/payments", get(payment::list_booking_payments))

        // Payments
        .route("/api/v1/payments", post(payment::create_payment))
        .route("/api/v1/payments/{id}", get(payment::get_payment))
        .route("/api/v1/payments/{id}/status", patch(payment::update_payment_status))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
