//! LLM Client — the single point of entry for all generative-AI calls.
//!
//! ARCHITECTURAL RULE: No other module may call the provider API directly.
//! All LLM interactions MUST go through this module.
//!
//! The client makes exactly one attempt per generation call; every failure
//! routes the caller to fallback content, never to a retry. Model selection
//! happens at most once per process: the first call probes the provider's
//! model listing and caches the result for the process lifetime.

use std::sync::Arc;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Used whenever the model-listing probe fails, returns nothing usable, or
/// cannot run because no credential is configured.
pub const DEFAULT_MODEL: &str = "models/gemini-pro";

const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned no candidate text")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Extracts the text of the first candidate's first text part.
    fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.iter().find_map(|p| p.text.as_deref()))
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ModelListResponse {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

#[derive(Debug, Deserialize)]
struct ModelInfo {
    name: String,
    #[serde(default, rename = "supportedGenerationMethods")]
    supported_generation_methods: Vec<String>,
}

/// The single LLM client shared by both generation pipelines.
///
/// The credential is optional: a keyless client fails every call with
/// `MissingApiKey` before touching the network, which the pipeline turns
/// into fallback content.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
    model: Arc<OnceCell<String>>,
}

impl LlmClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            model: Arc::new(OnceCell::new()),
        }
    }

    /// The model identifier used for generation, probed once per process.
    ///
    /// Concurrent first calls may race; the probe is idempotent and
    /// side-effect-free, so the OnceCell keeps whichever result lands first.
    pub async fn resolve_model(&self) -> &str {
        self.model.get_or_init(|| self.probe_model()).await
    }

    /// Asks the provider which models are available and picks the first one
    /// that supports content generation. Any failure falls back to
    /// `DEFAULT_MODEL` rather than surfacing an error.
    async fn probe_model(&self) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            return DEFAULT_MODEL.to_string();
        };

        let url = format!("{GEMINI_API_BASE}/models");
        let response = self
            .client
            .get(&url)
            .query(&[("key", api_key)])
            .send()
            .await;

        let response = match response {
            Ok(r) if r.status().is_success() => r,
            Ok(r) => {
                warn!("Model probe returned {}; using {DEFAULT_MODEL}", r.status());
                return DEFAULT_MODEL.to_string();
            }
            Err(e) => {
                warn!("Model probe failed: {e}; using {DEFAULT_MODEL}");
                return DEFAULT_MODEL.to_string();
            }
        };

        let listing: ModelListResponse = match response.json().await {
            Ok(l) => l,
            Err(e) => {
                warn!("Model probe returned unreadable listing: {e}; using {DEFAULT_MODEL}");
                return DEFAULT_MODEL.to_string();
            }
        };

        let selected = listing
            .models
            .into_iter()
            .find(|m| {
                m.name.contains("gemini")
                    && m.supported_generation_methods
                        .iter()
                        .any(|method| method == "generateContent")
            })
            .map(|m| m.name)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        info!("Selected generation model: {selected}");
        selected
    }

    /// Makes one generation call and returns the raw candidate text.
    /// Single attempt; any failure is the caller's cue to serve fallback.
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let model = self.resolve_model().await;
        let model = if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{model}")
        };

        let url = format!("{GEMINI_API_BASE}/{model}:generateContent");
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = parsed.text().ok_or(LlmError::EmptyContent)?;

        debug!("LLM call succeeded ({model}, {} chars)", text.len());
        Ok(text.to_string())
    }
}
