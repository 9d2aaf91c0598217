use std::sync::Arc;

use minijinja::Environment;

use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything here is immutable after startup, so concurrent
/// requests need no coordination.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub templates: Arc<Environment<'static>>,
}
