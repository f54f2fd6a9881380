mod common;

use axum::http::StatusCode;
use common::{parse_body, seed_space, TestApp};
use serde_json::json;

async fn book(
    app: &TestApp,
    token: &str,
    space_id: &str,
    start: &str,
    end: &str,
) -> axum::http::Response<axum::body::Body> {
    app.request(
        "POST",
        "/api/v1/bookings",
        Some(token),
        Some(json!({
            "space_id": space_id,
            "date": "2026-09-10",
            "start_time": start,
            "end_time": end,
        })),
    )
    .await
}

#[tokio::test]
async fn booking_inside_availability_is_priced_hourly() {
    let app = TestApp::new().await;
    let seed = seed_space(&app, "hourly").await;
    let (token, user_id) = app.register("renter@test.io", "Renter", "password123").await;

    let response = book(&app, &token, &seed.space_id, "10:00", "12:00").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_body(response).await;
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["user_id"], user_id.as_str());
    assert_eq!(body["data"]["total_hours"], 2.0);
    assert_eq!(body["data"]["total_price_cents"], 3000);
}

#[tokio::test]
async fn eight_hours_switches_to_day_rate() {
    let app = TestApp::new().await;
    let seed = seed_space(&app, "dayrate").await;
    let (token, _) = app.register("allday@test.io", "A", "password123").await;

    let response = book(&app, &token, &seed.space_id, "09:00", "17:00").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_body(response).await;
    assert_eq!(body["data"]["total_hours"], 8.0);
    assert_eq!(body["data"]["total_price_cents"], 9000);
}

#[tokio::test]
async fn fractional_hours_bill_by_the_minute() {
    let app = TestApp::new().await;
    let seed = seed_space(&app, "frac").await;
    let (token, _) = app.register("half@test.io", "H", "password123").await;

    let response = book(&app, &token, &seed.space_id, "10:00", "11:30").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_body(response).await;
    assert_eq!(body["data"]["total_hours"], 1.5);
    assert_eq!(body["data"]["total_price_cents"], 2250);
}

#[tokio::test]
async fn overlapping_booking_conflicts() {
    let app = TestApp::new().await;
    let seed = seed_space(&app, "overlap").await;
    let (token_a, _) = app.register("first@test.io", "F", "password123").await;
    let (token_b, _) = app.register("second@test.io", "S", "password123").await;

    let response = book(&app, &token_a, &seed.space_id, "10:00", "12:00").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = book(&app, &token_b, &seed.space_id, "11:00", "13:00").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn back_to_back_bookings_do_not_conflict() {
    let app = TestApp::new().await;
    let seed = seed_space(&app, "adjacent").await;
    let (token_a, _) = app.register("early@test.io", "E", "password123").await;
    let (token_b, _) = app.register("late@test.io", "L", "password123").await;

    let response = book(&app, &token_a, &seed.space_id, "10:00", "12:00").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Intervals are half-open, so an end shared with the next start is fine.
    let response = book(&app, &token_b, &seed.space_id, "12:00", "14:00").await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn cancelled_booking_frees_the_window() {
    let app = TestApp::new().await;
    let seed = seed_space(&app, "freed").await;
    let (token_a, _) = app.register("quitter@test.io", "Q", "password123").await;
    let (token_b, _) = app.register("taker@test.io", "T", "password123").await;

    let response = book(&app, &token_a, &seed.space_id, "10:00", "12:00").await;
    let booking_id = parse_body(response).await["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PATCH",
            &format!("/api/v1/bookings/{}/status", booking_id),
            Some(&seed.manager_token),
            Some(json!({ "status": "cancelled" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = book(&app, &token_b, &seed.space_id, "10:00", "12:00").await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn booking_outside_availability_conflicts() {
    let app = TestApp::new().await;
    let seed = seed_space(&app, "outside").await;
    let (token, _) = app.register("night@test.io", "N", "password123").await;

    // Entirely outside the 09:00-17:00 block.
    let response = book(&app, &token, &seed.space_id, "18:00", "19:00").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Partially covered windows are rejected too.
    let response = book(&app, &token, &seed.space_id, "16:00", "18:00").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // A day with no blocks at all.
    let response = app
        .request(
            "POST",
            "/api/v1/bookings",
            Some(&token),
            Some(json!({
                "space_id": seed.space_id,
                "date": "2026-09-11",
                "start_time": "10:00",
                "end_time": "11:00",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn inverted_or_empty_window_is_invalid() {
    let app = TestApp::new().await;
    let seed = seed_space(&app, "invalid").await;
    let (token, _) = app.register("oops@test.io", "O", "password123").await;

    let response = book(&app, &token, &seed.space_id, "12:00", "10:00").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = book(&app, &token, &seed.space_id, "10:00", "10:00").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn booking_unknown_space_is_not_found() {
    let app = TestApp::new().await;
    seed_space(&app, "nospace").await;
    let (token, _) = app.register("lost@test.io", "L", "password123").await;

    let response = book(&app, &token, "no-such-space", "10:00", "11:00").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn listing_is_scoped_by_role() {
    let app = TestApp::new().await;
    let seed = seed_space(&app, "scope").await;
    let (token_a, _) = app.register("mine@test.io", "M", "password123").await;
    let (token_b, _) = app.register("yours@test.io", "Y", "password123").await;

    book(&app, &token_a, &seed.space_id, "09:00", "10:00").await;
    book(&app, &token_b, &seed.space_id, "10:00", "11:00").await;

    let response = app.request("GET", "/api/v1/bookings", Some(&token_a), None).await;
    assert_eq!(parse_body(response).await["data"].as_array().unwrap().len(), 1);

    // The manager of the space's location sees both.
    let response = app
        .request("GET", "/api/v1/bookings", Some(&seed.manager_token), None)
        .await;
    assert_eq!(parse_body(response).await["data"].as_array().unwrap().len(), 2);

    let response = app
        .request("GET", "/api/v1/bookings", Some(&seed.admin_token), None)
        .await;
    assert_eq!(parse_body(response).await["data"].as_array().unwrap().len(), 2);

    // A manager of an unrelated location sees nothing.
    let (other_manager, _) = app.register_manager("elsewhere@test.io").await;
    let response = app
        .request("GET", "/api/v1/bookings", Some(&other_manager), None)
        .await;
    assert_eq!(parse_body(response).await["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn booking_detail_is_owner_manager_or_admin() {
    let app = TestApp::new().await;
    let seed = seed_space(&app, "detail").await;
    let (owner_token, _) = app.register("owner@test.io", "O", "password123").await;
    let (stranger_token, _) = app.register("stranger@test.io", "S", "password123").await;

    let response = book(&app, &owner_token, &seed.space_id, "10:00", "11:00").await;
    let booking_id = parse_body(response).await["data"]["id"].as_str().unwrap().to_string();

    let uri = format!("/api/v1/bookings/{}", booking_id);

    let response = app.request("GET", &uri, Some(&owner_token), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.request("GET", &uri, Some(&seed.manager_token), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.request("GET", &uri, Some(&stranger_token), None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn owner_deletes_pending_but_not_confirmed_bookings() {
    let app = TestApp::new().await;
    let seed = seed_space(&app, "delete").await;
    let (token, _) = app.register("deleter@test.io", "D", "password123").await;

    let response = book(&app, &token, &seed.space_id, "09:00", "10:00").await;
    let pending_id = parse_body(response).await["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .request("DELETE", &format!("/api/v1/bookings/{}", pending_id), Some(&token), None)
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = book(&app, &token, &seed.space_id, "10:00", "11:00").await;
    let confirmed_id = parse_body(response).await["data"]["id"].as_str().unwrap().to_string();
    app.request(
        "PATCH",
        &format!("/api/v1/bookings/{}/status", confirmed_id),
        Some(&seed.manager_token),
        Some(json!({ "status": "confirmed" })),
    )
    .await;

    let response = app
        .request("DELETE", &format!("/api/v1/bookings/{}", confirmed_id), Some(&token), None)
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Admins are not bound by the lifecycle restriction.
    let response = app
        .request(
            "DELETE",
            &format!("/api/v1/bookings/{}", confirmed_id),
            Some(&seed.admin_token),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
