//! Store-configuration write endpoint under `/api/private/store-config`.

use axum::{Json, extract::State};

use vitrine_cache::tags;
use vitrine_core::{StoreConfig, StoreConfigUpdate};

use super::ApiError;
use crate::state::AppState;

pub async fn update(
    State(state): State<AppState>,
    Json(payload): Json<StoreConfigUpdate>,
) -> Result<Json<StoreConfig>, ApiError> {
    let config = state.storage.update_store_config(payload).await?;
    state.cache.invalidate(tags::STORE_CONFIG);
    Ok(Json(config))
}
