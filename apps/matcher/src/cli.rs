//! Command-line surface for the matcher.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "job-matcher")]
#[command(about = "Match a resume against a job description with Claude and store the result in S3")]
pub struct Cli {
    /// Path to the job description text (defaults to a built-in sample)
    #[arg(short, long)]
    pub job: Option<PathBuf>,

    /// Path to the resume text (defaults to a built-in sample)
    #[arg(short, long)]
    pub resume: Option<PathBuf>,

    /// Print the result without writing it to S3
    #[arg(long)]
    pub no_upload: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Reads `path` if given, otherwise returns the built-in `fallback` text.
pub fn read_input(path: Option<&Path>, fallback: &str) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => Ok(fallback.to_string()),
    }
}
