use std::sync::Arc;

use crate::config::Config;
use crate::ner::NameRecognizer;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything here is read-only after startup: the pipeline
/// itself keeps no cross-request mutable state, so concurrent requests
/// need no coordination.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable person-name recognizer. `HttpNerClient` when NER_ENDPOINT
    /// is configured, `DisabledNer` otherwise.
    pub ner: Arc<dyn NameRecognizer>,
}
