//! Product write endpoints under `/api/private/products`.
//!
//! Product writes fan out to every tag the product's reads can be cached
//! under: the listing, the id-keyed entries and the slug-keyed entries.
//! On a slug change the old slug's entries are swept as well, so a stale
//! slug never serves the renamed product.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use vitrine_cache::{TagCache, tags};
use vitrine_core::{NewProduct, Product, ProductUpdate};

use super::ApiError;
use crate::state::AppState;

fn invalidate_product(cache: &TagCache, id: Uuid, slugs: &[&str]) {
    cache.invalidate(tags::PRODUCTS);
    cache.invalidate(&tags::product(&id.to_string()));
    cache.invalidate(&tags::product_related(&id.to_string()));
    for slug in slugs {
        cache.invalidate(&tags::product(slug));
        cache.invalidate(&tags::product_related(slug));
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewProduct>,
) -> Result<Json<Product>, ApiError> {
    let product = state
        .storage
        .create_product(Product::from_new(payload))
        .await?;
    invalidate_product(&state.cache, product.id, &[&product.slug]);
    Ok(Json(product))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProductUpdate>,
) -> Result<Json<Product>, ApiError> {
    // The slug before the update still keys live cache entries.
    let previous_slug = state
        .storage
        .get_product(id)
        .await?
        .map(|product| product.slug);

    let product = state.storage.update_product(id, payload).await?;

    let mut slugs = vec![product.slug.as_str()];
    if let Some(previous) = previous_slug.as_deref()
        && previous != product.slug
    {
        slugs.push(previous);
    }
    invalidate_product(&state.cache, id, &slugs);
    Ok(Json(product))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let previous_slug = state
        .storage
        .get_product(id)
        .await?
        .map(|product| product.slug);

    state.storage.delete_product(id).await?;

    let slugs: Vec<&str> = previous_slug.as_deref().into_iter().collect();
    invalidate_product(&state.cache, id, &slugs);
    Ok(StatusCode::NO_CONTENT)
}
