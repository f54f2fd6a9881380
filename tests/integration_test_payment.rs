mod common;

use axum::http::StatusCode;
use common::{parse_body, seed_space, TestApp};
use serde_json::json;

struct PaymentFixture {
    app: TestApp,
    seed: common::Seed,
    owner_token: String,
    booking_id: String,
    total_cents: i64,
}

async fn fixture(tag: &str) -> PaymentFixture {
    let app = TestApp::new().await;
    let seed = seed_space(&app, tag).await;
    let (owner_token, _) = app
        .register(&format!("payer_{}@test.io", tag), "Payer", "password123")
        .await;

    let response = app
        .request(
            "POST",
            "/api/v1/bookings",
            Some(&owner_token),
            Some(json!({
                "space_id": seed.space_id,
                "date": "2026-09-10",
                "start_time": "10:00",
                "end_time": "12:00",
            })),
        )
        .await;
    let body = parse_body(response).await;
    let booking_id = body["data"]["id"].as_str().unwrap().to_string();
    let total_cents = body["data"]["total_price_cents"].as_i64().unwrap();

    PaymentFixture { app, seed, owner_token, booking_id, total_cents }
}

#[tokio::test]
async fn paying_the_exact_total_confirms_the_booking() {
    let f = fixture("exact").await;

    let response = f
        .app
        .request(
            "POST",
            "/api/v1/payments",
            Some(&f.owner_token),
            Some(json!({
                "booking_id": f.booking_id,
                "amount_cents": f.total_cents,
                "method": "card",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_body(response).await;
    assert_eq!(body["data"]["status"], "completed");
    assert!(body["data"]["transaction_id"].as_str().unwrap().starts_with("txn_"));

    let response = f
        .app
        .request(
            "GET",
            &format!("/api/v1/bookings/{}", f.booking_id),
            Some(&f.owner_token),
            None,
        )
        .await;
    assert_eq!(parse_body(response).await["data"]["status"], "confirmed");
}

#[tokio::test]
async fn wrong_amount_is_rejected_and_changes_nothing() {
    let f = fixture("amount").await;

    let response = f
        .app
        .request(
            "POST",
            "/api/v1/payments",
            Some(&f.owner_token),
            Some(json!({
                "booking_id": f.booking_id,
                "amount_cents": f.total_cents - 1,
                "method": "card",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = f
        .app
        .request(
            "GET",
            &format!("/api/v1/bookings/{}", f.booking_id),
            Some(&f.owner_token),
            None,
        )
        .await;
    assert_eq!(parse_body(response).await["data"]["status"], "pending");

    let response = f
        .app
        .request(
            "GET",
            &format!("/api/v1/bookings/{}/payments", f.booking_id),
            Some(&f.owner_token),
            None,
        )
        .await;
    assert_eq!(parse_body(response).await["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn second_completed_payment_conflicts() {
    let f = fixture("double").await;

    let payload = json!({
        "booking_id": f.booking_id,
        "amount_cents": f.total_cents,
        "method": "card",
    });

    let response = f
        .app
        .request("POST", "/api/v1/payments", Some(&f.owner_token), Some(payload.clone()))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = f
        .app
        .request("POST", "/api/v1/payments", Some(&f.owner_token), Some(payload))
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = f
        .app
        .request(
            "GET",
            &format!("/api/v1/bookings/{}/payments", f.booking_id),
            Some(&f.owner_token),
            None,
        )
        .await;
    assert_eq!(parse_body(response).await["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn only_the_booking_owner_can_pay() {
    let f = fixture("owner").await;
    let (other_token, _) = f.app.register("bystander@test.io", "B", "password123").await;

    let response = f
        .app
        .request(
            "POST",
            "/api/v1/payments",
            Some(&other_token),
            Some(json!({
                "booking_id": f.booking_id,
                "amount_cents": f.total_cents,
                "method": "card",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn paying_a_cancelled_booking_conflicts() {
    let f = fixture("cancelled").await;

    f.app
        .request(
            "PATCH",
            &format!("/api/v1/bookings/{}/status", f.booking_id),
            Some(&f.seed.manager_token),
            Some(json!({ "status": "cancelled" })),
        )
        .await;

    let response = f
        .app
        .request(
            "POST",
            "/api/v1/payments",
            Some(&f.owner_token),
            Some(json!({
                "booking_id": f.booking_id,
                "amount_cents": f.total_cents,
                "method": "card",
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

async fn settle(f: &PaymentFixture) -> String {
    let response = f
        .app
        .request(
            "POST",
            "/api/v1/payments",
            Some(&f.owner_token),
            Some(json!({
                "booking_id": f.booking_id,
                "amount_cents": f.total_cents,
                "method": "card",
            })),
        )
        .await;
    parse_body(response).await["data"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn failed_payment_cancels_the_booking() {
    let f = fixture("failed").await;
    let payment_id = settle(&f).await;

    let response = f
        .app
        .request(
            "PATCH",
            &format!("/api/v1/payments/{}/status", payment_id),
            Some(&f.seed.manager_token),
            Some(json!({ "status": "failed" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_body(response).await["data"]["status"], "failed");

    let response = f
        .app
        .request(
            "GET",
            &format!("/api/v1/bookings/{}", f.booking_id),
            Some(&f.owner_token),
            None,
        )
        .await;
    assert_eq!(parse_body(response).await["data"]["status"], "cancelled");
}

#[tokio::test]
async fn refund_cancels_the_booking() {
    let f = fixture("refund").await;
    let payment_id = settle(&f).await;

    let response = f
        .app
        .request(
            "PATCH",
            &format!("/api/v1/payments/{}/status", payment_id),
            Some(&f.seed.admin_token),
            Some(json!({ "status": "refunded" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = f
        .app
        .request(
            "GET",
            &format!("/api/v1/bookings/{}", f.booking_id),
            Some(&f.seed.admin_token),
            None,
        )
        .await;
    assert_eq!(parse_body(response).await["data"]["status"], "cancelled");
}

#[tokio::test]
async fn payment_status_updates_need_manager_rights() {
    let f = fixture("rights").await;
    let payment_id = settle(&f).await;
    let (other_manager, _) = f.app.register_manager("foreign@test.io").await;

    let uri = format!("/api/v1/payments/{}/status", payment_id);

    let response = f
        .app
        .request("PATCH", &uri, Some(&f.owner_token), Some(json!({ "status": "refunded" })))
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = f
        .app
        .request("PATCH", &uri, Some(&other_manager), Some(json!({ "status": "refunded" })))
        .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn unknown_payment_status_is_invalid() {
    let f = fixture("badstatus").await;
    let payment_id = settle(&f).await;

    let response = f
        .app
        .request(
            "PATCH",
            &format!("/api/v1/payments/{}/status", payment_id),
            Some(&f.seed.manager_token),
            Some(json!({ "status": "chargeback" })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn payment_detail_is_access_scoped() {
    let f = fixture("view").await;
    let payment_id = settle(&f).await;
    let (stranger, _) = f.app.register("peek@test.io", "P", "password123").await;

    let uri = format!("/api/v1/payments/{}", payment_id);

    let response = f.app.request("GET", &uri, Some(&f.owner_token), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_body(response).await["data"]["amount_cents"], f.total_cents);

    let response = f.app.request("GET", &uri, Some(&stranger), None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
