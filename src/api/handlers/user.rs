use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::UpdateUserRequest;
use crate::api::dtos::responses::success;
use crate::api::extractors::auth::AuthUser;
use crate::domain::services::access::{self, Role, ADMIN_ONLY};
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_users(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    ADMIN_ONLY.check(&user)?;
    let users = state.user_repo.list().await?;
    Ok(success(users))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if user.id != id && !access::is_admin(&user) {
        return Err(AppError::Forbidden("Not allowed to view this user".into()));
    }

    let target = state
        .user_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))?;
    Ok(success(target))
}

pub async fn update_user(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    if user.id != id && !access::is_admin(&user) {
        return Err(AppError::Forbidden("Not allowed to update this user".into()));
    }

    let mut target = state
        .user_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    if let Some(name) = payload.name {
        target.name = name;
    }
    if let Some(password) = payload.password {
        if password.len() < 8 {
            return Err(AppError::Validation("Password must be at least 8 characters".into()));
        }
        let salt = SaltString::generate(&mut OsRng);
        target.password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|_| AppError::Internal)?
            .to_string();
    }
    if let Some(role) = payload.role {
        if !access::is_admin(&user) {
            return Err(AppError::Forbidden("Only admins can change roles".into()));
        }
        target.role = Role::parse(&role)?.as_str().to_string();
    }

    let updated = state.user_repo.update(&target).await?;
    info!("User updated: {}", updated.id);
    Ok(success(updated))
}

pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    ADMIN_ONLY.check(&user)?;

    state
        .user_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("User not found".into()))?;

    state.user_repo.delete(&id).await?;
    info!("User deleted: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
