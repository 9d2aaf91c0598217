mod archetype;
mod archive;
mod config;
mod errors;
mod generation;
mod llm_client;
mod render;
mod routes;
mod state;
mod themes;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitrine API v{}", env!("CARGO_PKG_VERSION"));

    // A keyless process still serves every endpoint; generation degrades to
    // fallback content and no outbound calls are made.
    if config.genai_api_key.is_none() {
        warn!("GENAI_API_KEY not set; all generation will serve fallback content");
    }

    let llm = LlmClient::new(config.genai_api_key.clone());
    info!("LLM client initialized");

    let templates = Arc::new(render::build_environment()?);
    info!("Template environment loaded");

    let state = AppState { llm, templates };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
