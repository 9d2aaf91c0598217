//! Content generation — prompt building, the shared pipeline, response
//! sanitization, and the two content schema variants.

pub mod content;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod sanitizer;
