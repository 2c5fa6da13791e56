//! Application state.

use std::sync::Arc;

use ventas_model::Scorer;
use ventas_store::Store;

use crate::config::ServiceConfig;

/// Application state shared across handlers.
///
/// The classifier model is an explicitly passed dependency rather than
/// process-global state, so tests can swap in a deterministic scorer.
#[derive(Clone)]
pub struct AppState {
    /// The record store.
    pub store: Arc<dyn Store>,

    /// The tier classifier.
    pub scorer: Arc<dyn Scorer>,

    /// Service configuration.
    pub config: ServiceConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(store: Arc<dyn Store>, scorer: Arc<dyn Scorer>, config: ServiceConfig) -> Self {
        Self {
            store,
            scorer,
            config,
        }
    }
}
