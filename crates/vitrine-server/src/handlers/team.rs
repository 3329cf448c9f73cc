//! Team-account endpoints under `/api/private/team`.
//!
//! No cache tags here: team accounts never appear in public reads.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use vitrine_auth::password;
use vitrine_core::{NewTeamAccount, TeamAccount};

use super::ApiError;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<TeamAccount>>, ApiError> {
    Ok(Json(state.storage.list_team_accounts().await?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewTeamAccount>,
) -> Result<Json<TeamAccount>, ApiError> {
    if payload.password.len() < 8 {
        return Err(ApiError::bad_request(
            "A senha deve ter pelo menos 8 caracteres",
        ));
    }
    let hash = password::hash(&payload.password).map_err(|e| ApiError::internal(e.to_string()))?;
    let account = state
        .storage
        .create_team_account(TeamAccount::new(
            payload.name,
            payload.email,
            hash,
            payload.active,
        ))
        .await?;
    Ok(Json(account))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.storage.delete_team_account(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
