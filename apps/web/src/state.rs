use std::sync::Arc;

use crate::config::Config;
use crate::store::DocumentStore;
use crate::views::Views;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one resume document for this process. Nothing is persisted.
    pub store: Arc<DocumentStore>,
    pub views: Arc<Views>,
    pub config: Config,
}
