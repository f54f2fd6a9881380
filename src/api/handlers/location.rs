use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateLocationRequest, UpdateLocationRequest};
use crate::api::dtos::responses::success;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::location::Location;
use crate::domain::services::access::{self, ADMIN_ONLY, MANAGE_CATALOG};
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_locations(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let locations = state.location_repo.list().await?;
    Ok(success(locations))
}

pub async fn get_location(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let location = state
        .location_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Location not found".into()))?;
    Ok(success(location))
}

pub async fn create_location(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateLocationRequest>,
) -> Result<impl IntoResponse, AppError> {
    ADMIN_ONLY.check(&user)?;

    if let Some(manager_id) = &payload.manager_id {
        state
            .user_repo
            .find_by_id(manager_id)
            .await?
            .ok_or(AppError::Validation("manager_id does not reference a user".into()))?;
    }

    let location = Location::new(payload.name, payload.address, payload.manager_id);
    let created = state.location_repo.create(&location).await?;
    info!("Location created: {}", created.id);
    Ok((StatusCode::CREATED, success(created)))
}

pub async fn update_location(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateLocationRequest>,
) -> Result<impl IntoResponse, AppError> {
    MANAGE_CATALOG.check(&user)?;
    access::require_location_manager(&state, &user, &id).await?;

    let mut location = state
        .location_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Location not found".into()))?;

    if let Some(name) = payload.name {
        location.name = name;
    }
    if let Some(address) = payload.address {
        location.address = address;
    }
    if let Some(manager_id) = payload.manager_id {
        // Reassigning the manager is an admin decision.
        if !access::is_admin(&user) {
            return Err(AppError::Forbidden("Only admins can reassign a location manager".into()));
        }
        state
            .user_repo
            .find_by_id(&manager_id)
            .await?
            .ok_or(AppError::Validation("manager_id does not reference a user".into()))?;
        location.manager_id = Some(manager_id);
    }

    let updated = state.location_repo.update(&location).await?;
    info!("Location updated: {}", updated.id);
    Ok(success(updated))
}

pub async fn delete_location(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    ADMIN_ONLY.check(&user)?;

    state
        .location_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Location not found".into()))?;

    state.location_repo.delete(&id).await?;
    info!("Location deleted: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
