use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use vitrine_auth::SessionService;
use vitrine_cache::TagCache;
use vitrine_storage::DynStorage;

use crate::config::AppConfig;

/// Shared application state injected into every handler.
///
/// The cache is an explicit capability here rather than ambient framework
/// state, so handlers can only touch it through `get`/`put`/`invalidate`.
#[derive(Clone)]
pub struct AppState {
    pub storage: DynStorage,
    pub cache: TagCache,
    pub sessions: Arc<SessionService>,
    pub cache_ttl: Duration,
    pub uploads_dir: PathBuf,
}

impl AppState {
    pub fn new(cfg: &AppConfig, storage: DynStorage) -> Self {
        Self {
            storage,
            cache: TagCache::new(),
            sessions: Arc::new(SessionService::new(
                &cfg.session.secret,
                cfg.session.ttl_secs,
            )),
            cache_ttl: cfg.cache_ttl(),
            uploads_dir: PathBuf::from(&cfg.uploads.dir),
        }
    }
}
