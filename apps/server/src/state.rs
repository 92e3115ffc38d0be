use std::sync::Arc;

use crate::config::Config;
use crate::content::ContentStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The store is behind a trait object so tests can swap in a failing store;
/// everything here is read-only, so clones are cheap and no locking exists.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
    pub config: Config,
}
