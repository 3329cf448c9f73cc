//! Category write endpoints under `/api/private/categories`.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use vitrine_cache::tags;
use vitrine_core::{Category, CategoryUpdate, NewCategory};

use super::ApiError;
use crate::state::AppState;

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewCategory>,
) -> Result<Json<Category>, ApiError> {
    let category = state
        .storage
        .create_category(Category::from_new(payload))
        .await?;
    state.cache.invalidate(tags::CATEGORIES);
    Ok(Json(category))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CategoryUpdate>,
) -> Result<Json<Category>, ApiError> {
    let category = state.storage.update_category(id, payload).await?;
    state.cache.invalidate(tags::CATEGORIES);
    Ok(Json(category))
}

/// Deleting a category also drops it from product memberships, so the
/// product listing and the per-product entries of every affected product
/// are stale too.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let affected: Vec<_> = state
        .storage
        .list_products()
        .await?
        .into_iter()
        .filter(|p| p.category_ids.contains(&id))
        .collect();

    state.storage.delete_category(id).await?;

    state
        .cache
        .invalidate_all([tags::CATEGORIES, tags::PRODUCTS]);
    for product in &affected {
        state.cache.invalidate_all([
            tags::product(&product.id.to_string()),
            tags::product_related(&product.id.to_string()),
            tags::product(&product.slug),
            tags::product_related(&product.slug),
        ]);
    }
    Ok(StatusCode::NO_CONTENT)
}
