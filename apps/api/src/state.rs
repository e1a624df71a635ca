use std::sync::Arc;

use crate::config::Config;
use crate::documents::{DocumentTextExtractor, TextExtractor};
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
    /// Pluggable document reader. Default: DocumentTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let sessions = SessionStore::new(chrono::Duration::minutes(config.session_ttl_minutes));
        AppState {
            config,
            sessions,
            extractor: Arc::new(DocumentTextExtractor),
        }
    }
}
