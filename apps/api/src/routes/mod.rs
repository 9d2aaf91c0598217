pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(handlers::handle_index))
        // Form flow: rendered HTML portfolio
        .route("/generate", post(handlers::handle_generate_portfolio))
        // Trait-vector flow: {archetype, content} JSON envelope
        .route("/api/generate", post(handlers::handle_generate_archetype))
        .route("/download", post(handlers::handle_download))
        .with_state(state)
}
