use std::sync::Arc;

use crate::config::Config;
use crate::models::Catalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup, read-only afterwards.
    pub catalog: Arc<Catalog>,
    pub config: Config,
}

impl AppState {
    pub fn new(catalog: Catalog, config: Config) -> Self {
        Self {
            catalog: Arc::new(catalog),
            config,
        }
    }
}
