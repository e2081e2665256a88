use tracing::warn;

use crate::matching::models::{FitAssessment, JobRequirements};

pub const MAX_FIT_SCORE: u8 = 100;
pub const REASONING_POINTS: usize = 3;

/// Checks decoded requirements beyond what their types already enforce.
pub fn validate_requirements(requirements: &JobRequirements) -> Result<(), String> {
    if requirements.skills.is_empty() {
        return Err("'skills' must contain at least one entry".to_string());
    }
    if requirements.skills.iter().any(|s| s.trim().is_empty()) {
        return Err("'skills' must not contain blank entries".to_string());
    }
    let years = requirements.years_of_experience;
    if !years.is_finite() || years < 0.0 {
        return Err(format!(
            "'years_of_experience' must be a non-negative number, got {years}"
        ));
    }
    Ok(())
}

/// Checks a decoded assessment and restricts `matched_skills` to the required skills.
///
/// Matched skills are compared case-insensitively and rewritten to the requirement's
/// spelling; entries the job never asked for are dropped. Model order is preserved.
pub fn validate_assessment(
    mut assessment: FitAssessment,
    requirements: &JobRequirements,
) -> Result<FitAssessment, String> {
    if assessment.fit_score > MAX_FIT_SCORE {
        return Err(format!(
            "'fit_score' must be between 0 and {MAX_FIT_SCORE}, got {}",
            assessment.fit_score
        ));
    }
    if assessment.reasoning.len() != REASONING_POINTS {
        return Err(format!(
            "'reasoning' must have exactly {REASONING_POINTS} entries, got {}",
            assessment.reasoning.len()
        ));
    }

    let mut matched: Vec<String> = Vec::with_capacity(assessment.matched_skills.len());
    for skill in assessment.matched_skills {
        let canonical = requirements
            .skills
            .iter()
            .find(|required| required.eq_ignore_ascii_case(skill.trim()));
        match canonical {
            Some(required) if !matched.contains(required) => matched.push(required.clone()),
            Some(_) => {}
            None => warn!("Dropping matched skill '{skill}' not present in job requirements"),
        }
    }
    assessment.matched_skills = matched;

    Ok(assessment)
}
