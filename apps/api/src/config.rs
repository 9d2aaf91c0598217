use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The generation credential is deliberately optional: a missing key means
/// every generation call serves fallback content, never a startup crash.
#[derive(Debug, Clone)]
pub struct Config {
    pub genai_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            genai_api_key: std::env::var("GENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
