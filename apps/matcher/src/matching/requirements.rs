//! Requirement Extractor: pulls skills, years of experience and seniority out of a job description.

use tracing::info;

use crate::errors::MatchError;
use crate::llm_client::response_parser::parse_json_response;
use crate::llm_client::CompletionModel;
use crate::matching::models::JobRequirements;
use crate::matching::prompts::REQUIREMENTS_PROMPT_TEMPLATE;
use crate::matching::validation::validate_requirements;

pub const REQUIREMENTS_MAX_TOKENS: u32 = 1024;

pub fn build_requirements_prompt(job_description: &str) -> String {
    REQUIREMENTS_PROMPT_TEMPLATE.replace("{job_description}", job_description)
}

/// Extracts structured requirements from a raw job description with one LLM call.
pub async fn extract_requirements(
    job_description: &str,
    llm: &dyn CompletionModel,
) -> Result<JobRequirements, MatchError> {
    let prompt = build_requirements_prompt(job_description);
    let response = llm.complete(&prompt, REQUIREMENTS_MAX_TOKENS).await?;

    let requirements: JobRequirements = parse_json_response(&response)?;
    validate_requirements(&requirements)
        .map_err(|detail| MatchError::response_format(detail, &response))?;

    info!(
        "Extracted {} skills, {} years, seniority {}",
        requirements.skills.len(),
        requirements.years_of_experience,
        requirements.seniority
    );

    Ok(requirements)
}
