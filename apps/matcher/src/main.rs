mod cli;
mod config;
mod errors;
mod llm_client;
mod matching;
mod pipeline;
mod samples;
mod storage;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{read_input, Cli};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::pipeline::evaluate;
use crate::samples::{SAMPLE_JOB_DESCRIPTION, SAMPLE_RESUME};
use crate::storage::publisher::publish;
use crate::storage::{build_s3_client, S3BlobStore};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configuration is validated as a whole before any work starts.
    let config = Config::from_env()?;

    let level = if cli.verbose {
        "debug"
    } else {
        config.rust_log.as_str()
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting job-matcher v{}", env!("CARGO_PKG_VERSION"));

    let job_description = read_input(cli.job.as_deref(), SAMPLE_JOB_DESCRIPTION)?;
    let resume = read_input(cli.resume.as_deref(), SAMPLE_RESUME)?;

    let llm = LlmClient::new(config.anthropic_api_key.clone(), config.llm_timeout)?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let store = if cli.no_upload {
        None
    } else {
        let store = S3BlobStore::new(build_s3_client(&config).await);
        info!("S3 client initialized (region: {})", config.aws_region);
        Some(store)
    };

    let result = evaluate(&job_description, &resume, &llm).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    match store {
        Some(store) => {
            let key = publish(&result, &store, &config.s3_bucket).await?;
            println!("s3://{}/{}", config.s3_bucket, key);
        }
        None => info!("Upload skipped (--no-upload)"),
    }

    Ok(())
}
