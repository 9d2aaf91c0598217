//! The shared generation pipeline.
//!
//! Both request flows differ only in their prompt and content schema; the
//! network call, sanitization, and fallback routing live here once. The
//! per-request state machine is: call → sanitize/parse → content, with every
//! failure edge terminating in the schema's fallback value. There is no
//! retry edge.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::generation::sanitizer::parse_content;
use crate::llm_client::{LlmClient, LlmError};

#[derive(Debug, Error)]
pub enum PipelineError {
    /// Missing credential, transport failure, non-success status, or an
    /// empty response. All mean the generator cannot be used right now.
    #[error("generation unavailable: {0}")]
    GenerationUnavailable(#[from] LlmError),

    /// The generator answered, but not with parseable, schema-complete JSON.
    #[error("malformed content: {0}")]
    MalformedContent(String),
}

/// Seam over the raw text generator so the pipeline can be exercised
/// without a network. `LlmClient` is the production implementation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, LlmError> {
        self.generate(prompt).await
    }
}

/// A content shape the pipeline can produce: parseable from model output
/// and substitutable by a fixed, schema-valid fallback value.
pub trait ContentSchema: Serialize + DeserializeOwned + Send {
    const SCHEMA_NAME: &'static str;

    fn fallback() -> Self;
}

/// One attempt: call the generator, sanitize, parse, validate shape.
pub async fn generate_content<S: ContentSchema>(
    generator: &dyn TextGenerator,
    prompt: &str,
) -> Result<S, PipelineError> {
    let raw = generator.generate_text(prompt).await?;
    parse_content::<S>(&raw)
}

/// Runs one generation attempt and absorbs every failure into the schema's
/// fallback value plus a server-side log line. Callers always get valid
/// content; no error from this path ever reaches the HTTP response.
pub async fn generate_or_fallback<S: ContentSchema>(
    generator: &dyn TextGenerator,
    prompt: &str,
) -> S {
    match generate_content::<S>(generator, prompt).await {
        Ok(content) => content,
        Err(e) => {
            warn!("{} generation degraded to fallback: {e}", S::SCHEMA_NAME);
            S::fallback()
        }
    }
}
