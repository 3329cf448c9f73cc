//! Brand write endpoints under `/api/private/brands`.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use vitrine_cache::tags;
use vitrine_core::{Brand, BrandUpdate, NewBrand};

use super::ApiError;
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewBrand>,
) -> Result<Json<Brand>, ApiError> {
    let brand = state.storage.create_brand(Brand::from_new(payload)).await?;
    state.cache.invalidate(tags::BRANDS);
    Ok(Json(brand))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<BrandUpdate>,
) -> Result<Json<Brand>, ApiError> {
    let brand = state.storage.update_brand(id, payload).await?;
    state.cache.invalidate(tags::BRANDS);
    Ok(Json(brand))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.storage.delete_brand(id).await?;
    state.cache.invalidate(tags::BRANDS);
    Ok(StatusCode::NO_CONTENT)
}
