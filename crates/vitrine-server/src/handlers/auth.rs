//! Session endpoints under `/api/auth`.
//!
//! These bypass the gate: login must be reachable without a session, and
//! the session probe is what the admin UI uses to decide what to render.

use axum::{Json, extract::State};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use serde_json::{Value, json};

use vitrine_auth::{SESSION_COOKIE, password};

use super::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Verifies team-account credentials and sets the session cookie.
///
/// Unknown email, wrong password and inactive account all answer the same
/// 401 body; login must not reveal which accounts exist.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, Json<Value>), ApiError> {
    let account = state
        .storage
        .find_team_account_by_email(&payload.email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !account.active || !password::verify(&payload.password, &account.password_hash) {
        return Err(ApiError::InvalidCredentials);
    }

    let token = state
        .sessions
        .issue(&account)
        .map_err(|e| ApiError::internal(e.to_string()))?;
    tracing::info!(email = %account.email, "login");

    let jar = jar.add(state.sessions.session_cookie(token));
    Ok((
        jar,
        Json(json!({
            "authenticated": true,
            "name": account.name,
            "email": account.email,
        })),
    ))
}

/// Clears the session cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<Value>) {
    let jar = jar.add(state.sessions.clear_cookie());
    (jar, Json(json!({ "authenticated": false })))
}

/// Reports the current session state without mutating it.
pub async fn session(State(state): State<AppState>, jar: CookieJar) -> Json<Value> {
    let claims = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| state.sessions.verify(cookie.value()).ok());

    match claims {
        Some(claims) => Json(json!({
            "authenticated": true,
            "name": claims.name,
            "email": claims.email,
        })),
        None => Json(json!({ "authenticated": false })),
    }
}
