//! File uploads and the static file route.
//!
//! Uploaded files land under `{uploads.dir}/{folder}/{uuid}.{ext}` and are
//! served back under `/uploads/...` with far-future cache headers. The
//! serve route is exempt from the gate; its only guard is the traversal
//! check.

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use uuid::Uuid;

use super::ApiError;
use crate::state::AppState;

/// Folders the upload endpoint accepts.
const FOLDERS: [&str; 4] = ["banners", "categories", "products", "store"];

/// Receives a multipart upload and writes the first file field to disk
/// under a generated name, answering with its public URL.
pub async fn upload(
    State(state): State<AppState>,
    Path(folder): Path<String>,
    mut multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    if !FOLDERS.contains(&folder.as_str()) {
        return Err(ApiError::bad_request(format!("Pasta inválida: {folder}")));
    }

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?
    {
        let Some(file_name) = field.file_name().map(str::to_owned) else {
            continue;
        };
        let ext = sanitize_extension(&file_name);
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(e.to_string()))?;

        let name = format!("{}.{ext}", Uuid::new_v4());
        let dir = state.uploads_dir.join(&folder);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| ApiError::internal(e.to_string()))?;
        tokio::fs::write(dir.join(&name), &data)
            .await
            .map_err(|e| ApiError::internal(e.to_string()))?;

        tracing::info!(folder = %folder, name = %name, bytes = data.len(), "file uploaded");
        return Ok(Json(json!({ "url": format!("/uploads/{folder}/{name}") })));
    }

    Err(ApiError::bad_request("Nenhum arquivo enviado"))
}

/// Serves an uploaded file.
///
/// Any path containing a `..` segment is refused outright; uploaded names
/// are server-generated, so nothing legitimate ever contains one.
pub async fn serve(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    if is_traversal(&path) {
        return (StatusCode::FORBIDDEN, "Forbidden").into_response();
    }

    let full = state.uploads_dir.join(&path);
    match tokio::fs::read(&full).await {
        Ok(bytes) => {
            let mime = mime_guess::from_path(&full).first_or_octet_stream();
            (
                [
                    (header::CONTENT_TYPE, mime.as_ref()),
                    (
                        header::CACHE_CONTROL,
                        "public, max-age=31536000, immutable",
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(_) => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}

fn is_traversal(path: &str) -> bool {
    path.contains('\\') || path.split('/').any(|segment| segment.contains(".."))
}

/// Lowercase alphanumeric extension from the uploaded filename, capped at
/// 8 characters; anything else falls back to `bin`.
fn sanitize_extension(file_name: &str) -> String {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .filter(|e| {
            !e.is_empty() && e.len() <= 8 && e.chars().all(|c| c.is_ascii_alphanumeric())
        })
        .unwrap_or_else(|| "bin".to_string())
}
