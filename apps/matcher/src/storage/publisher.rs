//! Result Publisher: writes a `MatchResult` as pretty JSON under a timestamp-derived key.
//!
//! Keys have second resolution: two publishes in the same second to the same
//! bucket overwrite each other.

use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::errors::MatchError;
use crate::matching::models::MatchResult;
use crate::storage::BlobStore;

const CONTENT_TYPE: &str = "application/json";

/// `job_match_results_<YYYYMMDD>_<HHMMSS>.json` for the given UTC instant.
pub fn object_key_for(now: DateTime<Utc>) -> String {
    format!("job_match_results_{}.json", now.format("%Y%m%d_%H%M%S"))
}

/// Publishes `result` using the current UTC time for the key. Returns the key.
pub async fn publish(
    result: &MatchResult,
    store: &dyn BlobStore,
    bucket: &str,
) -> Result<String, MatchError> {
    publish_at(result, store, bucket, Utc::now()).await
}

/// Publishes `result` keyed by `now`. One atomic put, no retry.
pub async fn publish_at(
    result: &MatchResult,
    store: &dyn BlobStore,
    bucket: &str,
    now: DateTime<Utc>,
) -> Result<String, MatchError> {
    let key = object_key_for(now);
    // serde_json's pretty printer indents with two spaces.
    let body = serde_json::to_vec_pretty(result)?;

    if let Err(e) = store.put(bucket, &key, body, CONTENT_TYPE).await {
        error!("Error saving to S3: {e}");
        return Err(e.into());
    }

    info!("Successfully saved to S3: s3://{bucket}/{key}");
    Ok(key)
}
