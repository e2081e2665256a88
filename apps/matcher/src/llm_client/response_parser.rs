//! Recovers a JSON object from free-form model output.
//!
//! Models often wrap JSON in markdown code fences, with or without a `json` tag.
//! Preference order: first ```` ```json ```` block, then first generic fenced block,
//! then the whole trimmed text. Only the first matching block is ever used.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::errors::MatchError;

const FENCE: &str = "```";
const JSON_TAG: &str = "json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenceError {
    #[error("code fence opened at byte {0} is never closed")]
    Unterminated(usize),
}

#[derive(Clone, Copy)]
enum ScanState {
    Outside,
    Inside { opened_at: usize, body_start: usize },
}

/// Returns the substring that should be decoded as JSON.
pub fn extract_json_payload(text: &str) -> Result<&str, FenceError> {
    if let Some(body) = first_fenced_block(text, JSON_TAG)? {
        return Ok(body);
    }
    if let Some(body) = first_fenced_block(text, "")? {
        return Ok(body);
    }
    Ok(text.trim())
}

/// Scans fence markers left to right. An opening marker must be immediately
/// followed by `tag`; the next marker after it closes the block.
fn first_fenced_block<'a>(text: &'a str, tag: &str) -> Result<Option<&'a str>, FenceError> {
    let mut state = ScanState::Outside;

    for (idx, _) in text.match_indices(FENCE) {
        match state {
            ScanState::Outside => {
                let after = idx + FENCE.len();
                if text[after..].starts_with(tag) {
                    state = ScanState::Inside {
                        opened_at: idx,
                        body_start: after + tag.len(),
                    };
                }
            }
            ScanState::Inside { body_start, .. } => {
                return Ok(Some(text[body_start..idx].trim()));
            }
        }
    }

    match state {
        ScanState::Outside => Ok(None),
        ScanState::Inside { opened_at, .. } => Err(FenceError::Unterminated(opened_at)),
    }
}

/// Extracts and decodes the JSON payload of a model response.
/// Any failure becomes `MatchError::ResponseFormat` with a bounded snippet of `text`.
pub fn parse_json_response<T: DeserializeOwned>(text: &str) -> Result<T, MatchError> {
    let payload =
        extract_json_payload(text).map_err(|e| MatchError::response_format(e.to_string(), text))?;
    serde_json::from_str(payload).map_err(|e| MatchError::response_format(e.to_string(), text))
}
