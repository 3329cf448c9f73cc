//! Social-media write endpoints under `/api/private/social-media`.
//!
//! Social-media records are embedded in the store-configuration payload,
//! so every write here invalidates the `store-config` tag.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use vitrine_cache::tags;
use vitrine_core::{NewSocialMedia, SocialMedia, SocialMediaUpdate};

use super::ApiError;
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewSocialMedia>,
) -> Result<Json<SocialMedia>, ApiError> {
    let social = state
        .storage
        .create_social_media(SocialMedia::from_new(payload))
        .await?;
    state.cache.invalidate(tags::STORE_CONFIG);
    Ok(Json(social))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SocialMediaUpdate>,
) -> Result<Json<SocialMedia>, ApiError> {
    let social = state.storage.update_social_media(id, payload).await?;
    state.cache.invalidate(tags::STORE_CONFIG);
    Ok(Json(social))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.storage.delete_social_media(id).await?;
    state.cache.invalidate(tags::STORE_CONFIG);
    Ok(StatusCode::NO_CONTENT)
}
