use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use crate::error::AppError;
use crate::state::AppState;
use crate::domain::models::user::User;
use std::sync::Arc;
use tracing::Span;

pub struct AuthUser(pub User);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = header.strip_prefix("Bearer ").ok_or(AppError::Unauthorized)?;

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
        let claims = app_state.auth_service.verify_token(token)?;

        // The role in the claims is advisory only. The user row is the
        // source of truth, so demotions and deletions take effect on the
        // next request rather than at token expiry.
        let user = app_state
            .user_repo
            .find_by_id(&claims.sub)
            .await?
            .ok_or(AppError::Unauthorized)?;

        Span::current().record("user_id", &user.id);

        Ok(AuthUser(user))
    }
}
