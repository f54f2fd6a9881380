use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateSpaceRequest, ListSpacesParams, UpdateSpaceRequest};
use crate::api::dtos::responses::success;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::space::{NewSpaceParams, Space};
use crate::domain::services::access::{self, MANAGE_CATALOG};
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_spaces(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListSpacesParams>,
) -> Result<impl IntoResponse, AppError> {
    let spaces = state.space_repo.list(params.location_id.as_deref()).await?;
    Ok(success(spaces))
}

pub async fn get_space(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let space = state
        .space_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Space not found".into()))?;
    Ok(success(space))
}

pub async fn create_space(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateSpaceRequest>,
) -> Result<impl IntoResponse, AppError> {
    MANAGE_CATALOG.check(&user)?;
    access::require_location_manager(&state, &user, &payload.location_id).await?;

    state
        .space_repo
        .find_type_by_id(&payload.space_type_id)
        .await?
        .ok_or(AppError::Validation("space_type_id does not reference a space type".into()))?;

    if payload.capacity <= 0 {
        return Err(AppError::Validation("capacity must be positive".into()));
    }
    if payload.price_per_hour_cents < 0 || payload.price_per_day_cents < 0 {
        return Err(AppError::Validation("prices must not be negative".into()));
    }

    let space = Space::new(NewSpaceParams {
        location_id: payload.location_id,
        space_type_id: payload.space_type_id,
        name: payload.name,
        capacity: payload.capacity,
        price_per_hour_cents: payload.price_per_hour_cents,
        price_per_day_cents: payload.price_per_day_cents,
    });

    let created = state.space_repo.create(&space).await?;
    info!("Space created: {} at location {}", created.id, created.location_id);
    Ok((StatusCode::CREATED, success(created)))
}

pub async fn update_space(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateSpaceRequest>,
) -> Result<impl IntoResponse, AppError> {
    MANAGE_CATALOG.check(&user)?;
    access::require_space_manager(&state, &user, &id).await?;

    let mut space = state
        .space_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Space not found".into()))?;

    if let Some(name) = payload.name {
        space.name = name;
    }
    if let Some(capacity) = payload.capacity {
        if capacity <= 0 {
            return Err(AppError::Validation("capacity must be positive".into()));
        }
        space.capacity = capacity;
    }
    if let Some(price) = payload.price_per_hour_cents {
        if price < 0 {
            return Err(AppError::Validation("prices must not be negative".into()));
        }
        space.price_per_hour_cents = price;
    }
    if let Some(price) = payload.price_per_day_cents {
        if price < 0 {
            return Err(AppError::Validation("prices must not be negative".into()));
        }
        space.price_per_day_cents = price;
    }

    let updated = state.space_repo.update(&space).await?;
    info!("Space updated: {}", updated.id);
    Ok(success(updated))
}

pub async fn delete_space(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    MANAGE_CATALOG.check(&user)?;
    access::require_space_manager(&state, &user, &id).await?;

    state.space_repo.delete(&id).await?;
    info!("Space deleted: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
