use std::time::Duration;

use crate::errors::MatchError;

const DEFAULT_LLM_TIMEOUT_SECS: u64 = 120;

/// Process configuration, built once in `main` and passed by reference.
/// Stages never read the environment themselves.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub aws_region: String,
    pub s3_bucket: String,
    /// Custom S3 endpoint, e.g. a local MinIO.
    pub s3_endpoint: Option<String>,
    pub llm_timeout: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self, MatchError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MatchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &str| {
            get(key).ok_or_else(|| {
                MatchError::Configuration(format!(
                    "{key} environment variable is required"
                ))
            })
        };

        let llm_timeout = match get("LLM_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                MatchError::Configuration(format!(
                    "LLM_TIMEOUT_SECS must be a whole number of seconds, got '{raw}'"
                ))
            })?,
            None => DEFAULT_LLM_TIMEOUT_SECS,
        };

        Ok(Config {
            anthropic_api_key: require("ANTHROPIC_API_KEY")?,
            aws_access_key_id: require("AWS_ACCESS_KEY_ID")?,
            aws_secret_access_key: require("AWS_SECRET_ACCESS_KEY")?,
            aws_region: require("AWS_REGION")?,
            s3_bucket: require("S3_BUCKET_NAME")?,
            s3_endpoint: get("S3_ENDPOINT"),
            llm_timeout: Duration::from_secs(llm_timeout),
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
