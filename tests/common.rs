use coworking_backend::{
    api::router::create_router,
    config::Config,
    domain::services::auth_service::AuthService,
    infra::repositories::{
        sqlite_availability_repo::SqliteAvailabilityRepo, sqlite_booking_repo::SqliteBookingRepo,
        sqlite_location_repo::SqliteLocationRepo, sqlite_payment_repo::SqlitePaymentRepo,
        sqlite_space_repo::SqliteSpaceRepo, sqlite_user_repo::SqliteUserRepo,
    },
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
    Pool, Sqlite,
};
use std::str::FromStr;
use std::time::Duration;
use std::sync::Arc;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        // Same journal settings as the production pool; concurrent write
        // transactions would otherwise fail fast with SQLITE_BUSY.
        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url,
            port: 0,
            jwt_secret: "test-secret-not-for-production".to_string(),
            auth_issuer: "test-issuer".to_string(),
            token_ttl_minutes: 60,
            admin_email: None,
            admin_password: None,
        };

        let auth_service = Arc::new(AuthService::new(&config));

        let state = Arc::new(AppState {
            config,
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            location_repo: Arc::new(SqliteLocationRepo::new(pool.clone())),
            space_repo: Arc::new(SqliteSpaceRepo::new(pool.clone())),
            availability_repo: Arc::new(SqliteAvailabilityRepo::new(pool.clone())),
            booking_repo: Arc::new(SqliteBookingRepo::new(pool.clone())),
            payment_repo: Arc::new(SqlitePaymentRepo::new(pool.clone())),
            auth_service,
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> Response<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let body = match body {
            Some(json) => Body::from(json.to_string()),
            None => Body::empty(),
        };

        self.router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap()
    }

    /// Registers a user and returns (token, user_id). The returned token
    /// stays valid after a role change because the handler stack resolves
    /// the user row on every request.
    pub async fn register(&self, email: &str, name: &str, password: &str) -> (String, String) {
        let response = self
            .request(
                "POST",
                "/api/v1/auth/register",
                None,
                Some(serde_json::json!({
                    "email": email,
                    "name": name,
                    "password": password,
                })),
            )
            .await;

        assert!(
            response.status().is_success(),
            "Registration failed in test helper: {}",
            response.status()
        );

        let body = parse_body(response).await;
        let token = body["data"]["token"].as_str().unwrap().to_string();
        let user_id = body["data"]["user"]["id"].as_str().unwrap().to_string();
        (token, user_id)
    }

    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/v1/auth/login",
                None,
                Some(serde_json::json!({ "email": email, "password": password })),
            )
            .await;

        assert!(
            response.status().is_success(),
            "Login failed in test helper: {}",
            response.status()
        );

        let body = parse_body(response).await;
        body["data"]["token"].as_str().unwrap().to_string()
    }

    /// Role changes go straight to the database; promoting the very first
    /// admin through the API is a bootstrap problem, not a test concern.
    pub async fn set_role(&self, user_id: &str, role: &str) {
        sqlx::query("UPDATE users SET role = ? WHERE id = ?")
            .bind(role)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .expect("Failed to set role");
    }

    pub async fn register_admin(&self, email: &str) -> String {
        let (token, user_id) = self.register(email, "Admin", "password123").await;
        self.set_role(&user_id, "admin").await;
        token
    }

    pub async fn register_manager(&self, email: &str) -> (String, String) {
        let (token, user_id) = self.register(email, "Manager", "password123").await;
        self.set_role(&user_id, "manager").await;
        (token, user_id)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}

pub async fn parse_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[allow(dead_code)]
pub struct Seed {
    pub admin_token: String,
    pub manager_token: String,
    pub manager_id: String,
    pub location_id: String,
    pub space_type_id: String,
    pub space_id: String,
}

/// A bookable space: admin-owned location managed by a dedicated manager,
/// one space type, one space (1500 cents/hour, 9000 cents/day) and an
/// availability block 09:00-17:00 on 2026-09-10. The tag keeps emails
/// unique across tests sharing a binary.
#[allow(dead_code)]
pub async fn seed_space(app: &TestApp, tag: &str) -> Seed {
    let admin_token = app.register_admin(&format!("admin_{}@test.io", tag)).await;
    let (manager_token, manager_id) = app
        .register_manager(&format!("manager_{}@test.io", tag))
        .await;

    let response = app
        .request(
            "POST",
            "/api/v1/locations",
            Some(&admin_token),
            Some(serde_json::json!({
                "name": format!("Hub {}", tag),
                "address": "1 Main St",
                "manager_id": manager_id,
            })),
        )
        .await;
    let location_id = parse_body(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .request(
            "POST",
            "/api/v1/space-types",
            Some(&admin_token),
            Some(serde_json::json!({
                "name": format!("meeting-room-{}", tag),
                "description": "Meeting room",
            })),
        )
        .await;
    let space_type_id = parse_body(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .request(
            "POST",
            "/api/v1/spaces",
            Some(&admin_token),
            Some(serde_json::json!({
                "location_id": location_id,
                "space_type_id": space_type_id,
                "name": "Room A",
                "capacity": 8,
                "price_per_hour_cents": 1500,
                "price_per_day_cents": 9000,
            })),
        )
        .await;
    let space_id = parse_body(response).await["data"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .request(
            "POST",
            &format!("/api/v1/spaces/{}/availability", space_id),
            Some(&manager_token),
            Some(serde_json::json!({
                "date": "2026-09-10",
                "start_time": "09:00",
                "end_time": "17:00",
            })),
        )
        .await;
    assert!(response.status().is_success(), "Seeding availability failed");

    Seed {
        admin_token,
        manager_token,
        manager_id,
        location_id,
        space_type_id,
        space_id,
    }
}
