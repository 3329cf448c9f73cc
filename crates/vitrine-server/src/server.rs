use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, patch, post},
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use vitrine_auth::{GateState, RouteTable, access_gate};
use vitrine_storage::DynStorage;

use crate::{config::AppConfig, handlers, middleware as app_middleware, state::AppState};

pub struct VitrineServer {
    addr: SocketAddr,
    app: Router,
}

pub fn build_app(cfg: &AppConfig, storage: DynStorage) -> Router {
    let state = AppState::new(cfg, storage);
    let gate_state = GateState::new(
        Arc::new(RouteTable::storefront()),
        Arc::clone(&state.sessions),
    );
    build_app_with_state(cfg, state, gate_state)
}

fn build_app_with_state(cfg: &AppConfig, state: AppState, gate_state: GateState) -> Router {
    let body_limit = cfg.server.body_limit_bytes;
    Router::new()
        // Health and info endpoints
        .route("/", get(handlers::root))
        .route("/healthz", get(handlers::healthz))
        .route("/readyz", get(handlers::readyz))
        // Public catalog reads (cached)
        .route("/api/public/banners", get(handlers::public::list_banners))
        .route("/api/public/brands", get(handlers::public::list_brands))
        .route(
            "/api/public/categories",
            get(handlers::public::list_categories),
        )
        .route("/api/public/products", get(handlers::public::list_products))
        .route(
            "/api/public/products/{id}",
            get(handlers::public::get_product),
        )
        .route(
            "/api/public/products/{id}/related",
            get(handlers::public::related_products),
        )
        .route(
            "/api/public/products/slug/{slug}",
            get(handlers::public::get_product_by_slug),
        )
        .route(
            "/api/public/products/slug/{slug}/related",
            get(handlers::public::related_products_by_slug),
        )
        .route(
            "/api/public/social-media",
            get(handlers::public::list_social_media),
        )
        .route(
            "/api/public/store-config",
            get(handlers::public::store_config),
        )
        // Session endpoints
        .route("/api/auth/login", post(handlers::auth::login))
        .route("/api/auth/logout", post(handlers::auth::logout))
        .route("/api/auth/session", get(handlers::auth::session))
        // Back-office writes (behind the gate)
        .route("/api/private/banners", post(handlers::banners::create))
        .route(
            "/api/private/banners/{id}",
            patch(handlers::banners::update).delete(handlers::banners::delete),
        )
        .route("/api/private/brands", post(handlers::brands::create))
        .route(
            "/api/private/brands/{id}",
            patch(handlers::brands::update).delete(handlers::brands::delete),
        )
        .route("/api/private/categories", post(handlers::categories::create))
        .route(
            "/api/private/categories/{id}",
            patch(handlers::categories::update).delete(handlers::categories::delete),
        )
        .route("/api/private/products", post(handlers::products::create))
        .route(
            "/api/private/products/{id}",
            patch(handlers::products::update).delete(handlers::products::delete),
        )
        .route(
            "/api/private/social-media",
            post(handlers::social_media::create),
        )
        .route(
            "/api/private/social-media/{id}",
            patch(handlers::social_media::update).delete(handlers::social_media::delete),
        )
        .route(
            "/api/private/store-config",
            patch(handlers::store_config::update),
        )
        .route(
            "/api/private/team",
            get(handlers::team::list).post(handlers::team::create),
        )
        .route("/api/private/team/{id}", axum::routing::delete(handlers::team::delete))
        .route(
            "/api/private/uploads/{folder}",
            post(handlers::uploads::upload),
        )
        // Static uploads
        .route("/uploads/{*path}", get(handlers::uploads::serve))
        // Page routes pass the gate and land here; rendering is external
        .fallback(handlers::fallback)
        .with_state(state)
        // Middleware stack (request id -> access gate -> cors/compression/trace -> body limit)
        .layer(middleware::from_fn(app_middleware::request_id))
        .layer(middleware::from_fn_with_state(gate_state, access_gate))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    // Skip creating a span for browser favicon requests to avoid noisy logs
                    if req.uri().path() == "/favicon.ico" {
                        return tracing::span!(tracing::Level::TRACE, "noop");
                    }
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    let req_id = req
                        .extensions()
                        .get::<axum::http::HeaderValue>()
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("")
                        .to_string();
                    tracing::info_span!(
                        "http.request",
                        http.method = %method,
                        http.target = %uri,
                        request_id = %req_id
                    )
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &tracing::Span| {
                        if let Some(meta) = span.metadata()
                            && meta.name() != "noop"
                        {
                            tracing::info!(
                                http.status = %res.status().as_u16(),
                                elapsed_ms = %latency.as_millis(),
                                "request handled"
                            );
                        }
                    },
                ),
        )
        .layer(axum::extract::DefaultBodyLimit::max(body_limit))
}

pub struct ServerBuilder {
    addr: SocketAddr,
    config: AppConfig,
    storage: Option<DynStorage>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        let cfg = AppConfig::default();
        Self {
            addr: cfg.addr(),
            config: cfg,
            storage: None,
        }
    }

    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    pub fn with_config(mut self, cfg: AppConfig) -> Self {
        self.addr = cfg.addr();
        self.config = cfg;
        self
    }

    pub fn with_storage(mut self, storage: DynStorage) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn build(self) -> VitrineServer {
        let storage = self
            .storage
            .unwrap_or_else(vitrine_db_memory::create_storage);
        let app = build_app(&self.config, storage);

        VitrineServer {
            addr: self.addr,
            app,
        }
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VitrineServer {
    pub async fn run(self) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        tracing::info!("listening on {}", self.addr);
        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }
}

async fn shutdown_signal() {
    // Wait for Ctrl+C
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
