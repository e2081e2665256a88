// LLM prompt templates for the matching stages.
// Placeholders are replaced with `str::replace` before sending.

/// Requirement extraction prompt. Replace `{job_description}` before sending.
pub const REQUIREMENTS_PROMPT_TEMPLATE: &str = r#"Analyze the following job description and extract:
1. Key skills required (list them)
2. Years of experience required (as a number)
3. Role seniority level (Junior, Mid-Level, Senior, or Lead)

Job Description:
{job_description}

Provide your response in JSON format with keys: "skills" (array), "years_of_experience" (number), "seniority" (string)."#;

/// Fit analysis prompt.
/// Replace: {skills}, {years_of_experience}, {seniority}, {resume}
pub const FIT_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze how well this candidate matches the job requirements.

Job Requirements:
- Skills: {skills}
- Years of Experience: {years_of_experience}
- Seniority: {seniority}

Candidate Resume:
{resume}

Provide your analysis in JSON format with:
1. "fit_score": A number from 0-100 indicating overall fit
2. "matched_skills": Array of skills from the requirements that the candidate has
3. "recommendation": One of "Strong Fit", "Medium Fit", or "Weak Fit"
4. "reasoning": Array of exactly 3 bullet points explaining the recommendation"#;
