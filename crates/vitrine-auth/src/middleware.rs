//! Access gate middleware.
//!
//! Runs ahead of every route handler. Exempt paths skip the gate entirely;
//! everything else gets a single synchronous session verification and one
//! of four outcomes: continue, redirect to `/login`, redirect to `/admin`,
//! or a 401 JSON body for the private API.

use std::sync::Arc;

use axum::{
    Json,
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use serde_json::json;

use crate::gate::{GateDecision, RouteTable};
use crate::session::{SESSION_COOKIE, SessionService};

/// State required by the access gate middleware.
#[derive(Clone)]
pub struct GateState {
    /// The immutable route table, built once at startup.
    pub routes: Arc<RouteTable>,
    /// Session verification service.
    pub sessions: Arc<SessionService>,
}

impl GateState {
    /// Creates a new gate state.
    #[must_use]
    pub fn new(routes: Arc<RouteTable>, sessions: Arc<SessionService>) -> Self {
        Self { routes, sessions }
    }
}

/// The access gate.
///
/// Classification and decision logic live in [`RouteTable`]; this function
/// only extracts the session cookie, verifies it and translates the
/// decision into a response. The gate never mutates session state.
pub async fn access_gate(
    State(state): State<GateState>,
    jar: CookieJar,
    req: Request<Body>,
    next: Next,
) -> Response {
    let path = req.uri().path();

    if state.routes.is_exempt(path) {
        return next.run(req).await;
    }

    // Verification failure is the same fact as an absent cookie.
    let authenticated = jar
        .get(SESSION_COOKIE)
        .map(|cookie| state.sessions.verify(cookie.value()).is_ok())
        .unwrap_or(false);

    match state.routes.decide(path, authenticated) {
        GateDecision::Continue => next.run(req).await,
        GateDecision::RedirectToLogin => {
            tracing::debug!(path = %path, "gate: redirecting to login");
            Redirect::to("/login").into_response()
        }
        GateDecision::RedirectToDashboard => {
            tracing::debug!(path = %path, "gate: redirecting to dashboard");
            Redirect::to("/admin").into_response()
        }
        GateDecision::Unauthorized => {
            tracing::debug!(path = %path, "gate: unauthorized private API request");
            unauthorized_response()
        }
    }
}

/// The 401 body for unauthenticated private-API requests.
///
/// Both fields are part of the public contract and must not change.
fn unauthorized_response() -> Response {
    let body = json!({
        "error": "Unauthorized",
        "message": "Autenticação necessária para acessar este recurso.",
    });
    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}
