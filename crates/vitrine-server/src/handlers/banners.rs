//! Banner write endpoints under `/api/private/banners`.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use vitrine_cache::tags;
use vitrine_core::{Banner, BannerUpdate, NewBanner};

use super::ApiError;
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewBanner>,
) -> Result<Json<Banner>, ApiError> {
    let banner = state
        .storage
        .create_banner(Banner::from_new(payload))
        .await?;
    state.cache.invalidate(tags::BANNERS);
    Ok(Json(banner))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<BannerUpdate>,
) -> Result<Json<Banner>, ApiError> {
    let banner = state.storage.update_banner(id, payload).await?;
    state.cache.invalidate(tags::BANNERS);
    Ok(Json(banner))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.storage.delete_banner(id).await?;
    state.cache.invalidate(tags::BANNERS);
    Ok(StatusCode::NO_CONTENT)
}
