//! Fit Analyzer: asks the model how well one resume matches extracted requirements.
//!
//! Takes `&JobRequirements` so one extraction can be reused across many resumes.

use tracing::info;

use crate::errors::MatchError;
use crate::llm_client::response_parser::parse_json_response;
use crate::llm_client::CompletionModel;
use crate::matching::models::{FitAssessment, JobRequirements};
use crate::matching::prompts::FIT_ANALYSIS_PROMPT_TEMPLATE;
use crate::matching::validation::validate_assessment;

pub const FIT_ANALYSIS_MAX_TOKENS: u32 = 2048;

pub fn build_fit_prompt(requirements: &JobRequirements, resume: &str) -> String {
    FIT_ANALYSIS_PROMPT_TEMPLATE
        .replace("{skills}", &requirements.skills.join(", "))
        .replace(
            "{years_of_experience}",
            &requirements.years_of_experience.to_string(),
        )
        .replace("{seniority}", requirements.seniority.label())
        .replace("{resume}", resume)
}

/// Scores `resume` against `requirements` with one LLM call.
pub async fn analyze_fit(
    requirements: &JobRequirements,
    resume: &str,
    llm: &dyn CompletionModel,
) -> Result<FitAssessment, MatchError> {
    let prompt = build_fit_prompt(requirements, resume);
    let response = llm.complete(&prompt, FIT_ANALYSIS_MAX_TOKENS).await?;

    let decoded: FitAssessment = parse_json_response(&response)?;
    let assessment = validate_assessment(decoded, requirements)
        .map_err(|detail| MatchError::response_format(detail, &response))?;

    info!(
        "Fit analysis complete: score={}, matched {}/{} skills",
        assessment.fit_score,
        assessment.matched_skills.len(),
        requirements.skills.len()
    );

    Ok(assessment)
}
