use thiserror::Error;

use crate::llm_client::LlmError;
use crate::storage::StorageError;

/// Maximum number of characters of a model response kept in a `ResponseFormat` error.
pub const SNIPPET_LIMIT: usize = 200;

/// Error type shared by every stage of the matching pipeline.
/// Nothing is recovered locally; each variant propagates to `main`.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("LLM service call failed: {0}")]
    ServiceCall(#[from] LlmError),

    #[error("Failed to parse JSON from LLM response: {detail}\nResponse: {snippet}...")]
    ResponseFormat { detail: String, snippet: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage write failed: {0}")]
    StorageWrite(#[from] StorageError),
}

impl MatchError {
    /// Builds a `ResponseFormat` error, keeping at most `SNIPPET_LIMIT` chars of `response`.
    pub fn response_format(detail: impl Into<String>, response: &str) -> Self {
        MatchError::ResponseFormat {
            detail: detail.into(),
            snippet: response.chars().take(SNIPPET_LIMIT).collect(),
        }
    }
}
