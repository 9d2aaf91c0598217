//! Response sanitization and parsing.
//!
//! Models routinely wrap JSON output in markdown code fences even when told
//! not to. Stripping is unconditional and order-independent: a global
//! removal of the fence markers followed by a trim, a no-op when no fences
//! are present.

use serde::de::DeserializeOwned;

use crate::generation::pipeline::PipelineError;

/// Removes ```json and ``` markers anywhere in the text, then trims.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Sanitizes raw LLM output and parses it into a content schema.
/// A JSON error or a missing required field is a named `MalformedContent`
/// failure carrying the serde message.
pub fn parse_content<T: DeserializeOwned>(raw: &str) -> Result<T, PipelineError> {
    let cleaned = strip_code_fences(raw);
    serde_json::from_str(&cleaned).map_err(|e| PipelineError::MalformedContent(e.to_string()))
}
