// Matching stages: requirement extraction and fit analysis.
// All LLM calls go through llm_client; stages hold no state between calls.

pub mod fit_analysis;
pub mod models;
pub mod prompts;
pub mod requirements;
pub mod validation;
