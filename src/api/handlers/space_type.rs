use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateSpaceTypeRequest, UpdateSpaceTypeRequest};
use crate::api::dtos::responses::success;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::space::SpaceType;
use crate::domain::services::access::ADMIN_ONLY;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_space_types(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let types = state.space_repo.list_types().await?;
    Ok(success(types))
}

pub async fn get_space_type(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let space_type = state
        .space_repo
        .find_type_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Space type not found".into()))?;
    Ok(success(space_type))
}

pub async fn create_space_type(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateSpaceTypeRequest>,
) -> Result<impl IntoResponse, AppError> {
    ADMIN_ONLY.check(&user)?;

    let space_type = SpaceType::new(payload.name, payload.description);
    let created = state.space_repo.create_type(&space_type).await?;
    info!("Space type created: {}", created.id);
    Ok((StatusCode::CREATED, success(created)))
}

pub async fn update_space_type(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    Json(payload): Json<UpdateSpaceTypeRequest>,
) -> Result<impl IntoResponse, AppError> {
    ADMIN_ONLY.check(&user)?;

    let mut space_type = state
        .space_repo
        .find_type_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Space type not found".into()))?;

    if let Some(name) = payload.name {
        space_type.name = name;
    }
    if let Some(description) = payload.description {
        space_type.description = Some(description);
    }

    let updated = state.space_repo.update_type(&space_type).await?;
    info!("Space type updated: {}", updated.id);
    Ok(success(updated))
}

pub async fn delete_space_type(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    ADMIN_ONLY.check(&user)?;

    state
        .space_repo
        .find_type_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Space type not found".into()))?;

    state.space_repo.delete_type(&id).await?;
    info!("Space type deleted: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
