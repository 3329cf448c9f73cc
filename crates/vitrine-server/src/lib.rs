//! HTTP server for the Vitrine storefront.
//!
//! Wires the access gate, the tag cache and the storage backend into an
//! axum application: public cached reads under `/api/public`, session
//! endpoints under `/api/auth`, gated back-office writes under
//! `/api/private`, and the static uploads route.

pub mod bootstrap;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod server;
pub mod state;

pub use config::AppConfig;
pub use server::{ServerBuilder, VitrineServer, build_app};
pub use state::AppState;
