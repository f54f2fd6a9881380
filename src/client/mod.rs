pub mod cache;

use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::client::cache::TtlCache;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },
    #[error("Unexpected response shape")]
    Decode,
}

/// Typed client for the booking API. Construct one per consumer and pass
/// it down; it holds its own connection pool and read cache.
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
    cache: TtlCache,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            cache: TtlCache::new(Duration::from_secs(30)),
        }
    }

    /// Returns a client that sends the given bearer token. The cache is
    /// fresh because cached bodies may be role-dependent.
    pub fn with_token(self, token: String) -> Self {
        Self {
            token: Some(token),
            cache: TtlCache::new(Duration::from_secs(30)),
            ..self
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn unwrap_envelope(response: reqwest::Response) -> Result<Value, ClientError> {
        let status = response.status();
        let body: Value = response.json().await?;

        if !status.is_success() {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            return Err(ClientError::Api { status, message });
        }

        body.get("data").cloned().ok_or(ClientError::Decode)
    }

    /// GET through the cache. A hit skips the network entirely.
    async fn get_cached<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        if let Some(cached) = self.cache.get(path) {
            debug!("cache hit: {}", path);
            return serde_json::from_value(cached).map_err(|_| ClientError::Decode);
        }

        let response = self.request(Method::GET, path).send().await?;
        let data = Self::unwrap_envelope(response).await?;
        self.cache.insert(path.to_string(), data.clone());
        serde_json::from_value(data).map_err(|_| ClientError::Decode)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &impl Serialize,
        invalidate: &str,
    ) -> Result<T, ClientError> {
        let response = self.request(method, path).json(body).send().await?;
        let data = Self::unwrap_envelope(response).await?;
        self.cache.invalidate_prefix(invalidate);
        serde_json::from_value(data).map_err(|_| ClientError::Decode)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Value, ClientError> {
        let response = self
            .request(Method::POST, "/api/v1/auth/login")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;
        Self::unwrap_envelope(response).await
    }

    pub async fn register(&self, email: &str, name: &str, password: &str) -> Result<Value, ClientError> {
        let response = self
            .request(Method::POST, "/api/v1/auth/register")
            .json(&serde_json::json!({ "email": email, "name": name, "password": password }))
            .send()
            .await?;
        Self::unwrap_envelope(response).await
    }

    pub async fn list_locations(&self) -> Result<Value, ClientError> {
        self.get_cached("/api/v1/locations").await
    }

    pub async fn list_spaces(&self, location_id: Option<&str>) -> Result<Value, ClientError> {
        let path = match location_id {
            Some(id) => format!("/api/v1/spaces?location_id={}", id),
            None => "/api/v1/spaces".to_string(),
        };
        self.get_cached(&path).await
    }

    pub async fn get_space(&self, space_id: &str) -> Result<Value, ClientError> {
        self.get_cached(&format!("/api/v1/spaces/{}", space_id)).await
    }

    pub async fn day_availability(&self, space_id: &str, date: &str) -> Result<Value, ClientError> {
        self.get_cached(&format!("/api/v1/spaces/{}/availability?date={}", space_id, date))
            .await
    }

    pub async fn create_booking(
        &self,
        space_id: &str,
        date: &str,
        start_time: &str,
        end_time: &str,
    ) -> Result<Value, ClientError> {
        let body = serde_json::json!({
            "space_id": space_id,
            "date": date,
            "start_time": start_time,
            "end_time": end_time,
        });
        // A new booking changes the space's free windows.
        self.send_json(Method::POST, "/api/v1/bookings", &body, "/api/v1/spaces").await
    }

    pub async fn list_bookings(&self) -> Result<Value, ClientError> {
        let response = self.request(Method::GET, "/api/v1/bookings").send().await?;
        Self::unwrap_envelope(response).await
    }

    pub async fn pay_booking(
        &self,
        booking_id: &str,
        amount_cents: i64,
        method: &str,
    ) -> Result<Value, ClientError> {
        let body = serde_json::json!({
            "booking_id": booking_id,
            "amount_cents": amount_cents,
            "method": method,
        });
        self.send_json(Method::POST, "/api/v1/payments", &body, "/api/v1/bookings").await
    }
}
