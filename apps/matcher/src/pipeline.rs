//! Orchestration: extract → analyze → assemble. Publishing is a separate step
//! so nothing is written unless both model calls succeed.

use chrono::Utc;
use tracing::info;

use crate::errors::MatchError;
use crate::llm_client::CompletionModel;
use crate::matching::fit_analysis::analyze_fit;
use crate::matching::models::MatchResult;
use crate::matching::requirements::extract_requirements;

pub async fn evaluate(
    job_description: &str,
    resume: &str,
    llm: &dyn CompletionModel,
) -> Result<MatchResult, MatchError> {
    if job_description.trim().is_empty() {
        return Err(MatchError::InvalidInput(
            "job description cannot be empty".to_string(),
        ));
    }
    if resume.trim().is_empty() {
        return Err(MatchError::InvalidInput("resume cannot be empty".to_string()));
    }

    info!("Step 1: Extracting job requirements...");
    let requirements = extract_requirements(job_description, llm).await?;

    info!("Step 2: Analyzing candidate fit...");
    let assessment = analyze_fit(&requirements, resume, llm).await?;

    Ok(MatchResult::new(requirements, assessment, Utc::now()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use crate::matching::models::{Recommendation, Seniority};
    use crate::test_support::{
        ScriptedModel, ASSESSMENT_JSON, DJANGO_JD, DJANGO_RESUME, REQUIREMENTS_JSON,
    };

    #[tokio::test]
    async fn test_evaluate_runs_both_stages_in_order() {
        let model = ScriptedModel::replying(&[REQUIREMENTS_JSON, ASSESSMENT_JSON]);

        let result = evaluate(DJANGO_JD, DJANGO_RESUME, &model).await.unwrap();

        assert_eq!(result.job_requirements.seniority, Seniority::Senior);
        assert_eq!(result.assessment.fit_score, 85);
        assert_eq!(result.assessment.recommendation, Recommendation::StrongFit);

        let calls = model.calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert!(calls[0].0.contains("Job Description:"));
        assert!(calls[1].0.contains("- Skills: Python, Django, AWS"));
    }

    #[tokio::test]
    async fn test_extraction_failure_skips_analysis() {
        let model = ScriptedModel::replying(&["{not json", ASSESSMENT_JSON]);

        let err = evaluate(DJANGO_JD, DJANGO_RESUME, &model).await.unwrap_err();

        assert!(matches!(err, MatchError::ResponseFormat { .. }));
        assert_eq!(model.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_analysis_service_error_propagates() {
        let model = ScriptedModel::new(vec![
            Ok(REQUIREMENTS_JSON.to_string()),
            Err(LlmError::Api {
                status: 529,
                message: "overloaded".to_string(),
            }),
        ]);
        let err = evaluate(DJANGO_JD, DJANGO_RESUME, &model).await.unwrap_err();
        assert!(matches!(err, MatchError::ServiceCall(_)));
    }

    #[tokio::test]
    async fn test_blank_inputs_rejected_before_any_call() {
        let model = ScriptedModel::replying(&[]);
        assert!(matches!(
            evaluate("  ", DJANGO_RESUME, &model).await,
            Err(MatchError::InvalidInput(_))
        ));
        assert!(matches!(
            evaluate(DJANGO_JD, "\n", &model).await,
            Err(MatchError::InvalidInput(_))
        ));
        assert!(model.calls.lock().unwrap().is_empty());
    }
}
