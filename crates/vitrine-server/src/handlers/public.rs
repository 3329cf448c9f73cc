//! Public, cached read endpoints under `/api/public`.
//!
//! Every handler wraps its storage query in a cached computation: the
//! serialized response body is stored under the endpoint's key and
//! registered under the tag(s) the write side invalidates. Errors are
//! never cached.

use std::future::Future;

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use uuid::Uuid;

use vitrine_cache::tags;
use vitrine_core::StoreConfigView;
use vitrine_storage::StorageError;

use super::ApiError;
use crate::state::AppState;

/// Serve `key` from the cache, or compute, serialize and register the
/// result under `cache_tags` with the configured TTL.
async fn cached_json<T, F, Fut>(
    state: &AppState,
    key: &str,
    cache_tags: &[&str],
    compute: F,
) -> Result<Response, ApiError>
where
    T: Serialize,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    if let Some(hit) = state.cache.get(key) {
        return Ok(json_bytes((*hit).clone()));
    }
    let value = compute().await?;
    let bytes = serde_json::to_vec(&value)?;
    state
        .cache
        .put(key, cache_tags, bytes.clone(), state.cache_ttl);
    Ok(json_bytes(bytes))
}

fn json_bytes(bytes: Vec<u8>) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], bytes).into_response()
}

pub async fn list_banners(State(state): State<AppState>) -> Result<Response, ApiError> {
    let storage = state.storage.clone();
    cached_json(&state, tags::BANNERS, &[tags::BANNERS], || async move {
        let banners = storage.list_banners().await?;
        Ok(banners.into_iter().filter(|b| b.active).collect::<Vec<_>>())
    })
    .await
}

pub async fn list_brands(State(state): State<AppState>) -> Result<Response, ApiError> {
    let storage = state.storage.clone();
    cached_json(&state, tags::BRANDS, &[tags::BRANDS], || async move {
        Ok(storage.list_brands().await?)
    })
    .await
}

pub async fn list_categories(State(state): State<AppState>) -> Result<Response, ApiError> {
    let storage = state.storage.clone();
    cached_json(&state, tags::CATEGORIES, &[tags::CATEGORIES], || async move {
        Ok(storage.list_categories().await?)
    })
    .await
}

pub async fn list_products(State(state): State<AppState>) -> Result<Response, ApiError> {
    let storage = state.storage.clone();
    cached_json(&state, tags::PRODUCTS, &[tags::PRODUCTS], || async move {
        let products = storage.list_products().await?;
        Ok(products.into_iter().filter(|p| p.active).collect::<Vec<_>>())
    })
    .await
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let storage = state.storage.clone();
    let key = tags::product(&id.to_string());
    cached_json(&state, &key, &[key.as_str()], || async move {
        storage
            .get_product(id)
            .await?
            .filter(|p| p.active)
            .ok_or_else(|| StorageError::not_found("Product", id.to_string()).into())
    })
    .await
}

pub async fn get_product_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, ApiError> {
    let storage = state.storage.clone();
    let key = tags::product(&slug);
    let lookup = slug.clone();
    cached_json(&state, &key, &[key.as_str()], || async move {
        storage
            .get_product_by_slug(&lookup)
            .await?
            .filter(|p| p.active)
            .ok_or_else(|| StorageError::not_found("Product", lookup).into())
    })
    .await
}

pub async fn related_products(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let storage = state.storage.clone();
    let key = tags::product_related(&id.to_string());
    cached_json(&state, &key, &[key.as_str()], || async move {
        Ok(storage.related_products(id).await?)
    })
    .await
}

pub async fn related_products_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, ApiError> {
    let storage = state.storage.clone();
    let key = tags::product_related(&slug);
    let lookup = slug.clone();
    cached_json(&state, &key, &[key.as_str()], || async move {
        let subject = storage
            .get_product_by_slug(&lookup)
            .await?
            .ok_or_else(|| StorageError::not_found("Product", lookup))?;
        Ok(storage.related_products(subject.id).await?)
    })
    .await
}

pub async fn list_social_media(State(state): State<AppState>) -> Result<Response, ApiError> {
    let storage = state.storage.clone();
    cached_json(
        &state,
        "social-media",
        &[tags::STORE_CONFIG],
        || async move {
            let records = storage.list_social_media().await?;
            Ok(records.into_iter().filter(|s| s.active).collect::<Vec<_>>())
        },
    )
    .await
}

pub async fn store_config(State(state): State<AppState>) -> Result<Response, ApiError> {
    let storage = state.storage.clone();
    cached_json(
        &state,
        tags::STORE_CONFIG,
        &[tags::STORE_CONFIG],
        || async move {
            let config = storage.get_store_config().await?;
            let social_media = storage
                .list_social_media()
                .await?
                .into_iter()
                .filter(|s| s.active)
                .collect();
            Ok(StoreConfigView {
                config,
                social_media,
            })
        },
    )
    .await
}
