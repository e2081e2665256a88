//! Test doubles for the model and storage seams.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use crate::llm_client::{CompletionModel, LlmError};
use crate::matching::models::{
    FitAssessment, JobRequirements, MatchResult, Recommendation, Seniority,
};
use crate::storage::{BlobStore, StorageError};

pub const DJANGO_JD: &str = r#"
    Senior Backend Engineer
    Requirements: 5+ years of professional Python experience, Django, AWS (S3, Lambda).
"#;

pub const DJANGO_RESUME: &str = r#"
    Jane Roe, Backend Engineer
    2018-present: Python/Django services on AWS Lambda and S3.
"#;

pub const REQUIREMENTS_JSON: &str =
    r#"{"skills":["Python","Django","AWS"],"years_of_experience":5,"seniority":"Senior"}"#;

pub const ASSESSMENT_JSON: &str = r#"```json
{
  "fit_score": 85,
  "matched_skills": ["Python", "Django", "AWS"],
  "recommendation": "Strong Fit",
  "reasoning": ["Six years of Python", "Django in production", "Hands-on AWS"]
}
```"#;

/// Replays canned responses in order and records every `(prompt, max_tokens)` it receives.
pub struct ScriptedModel {
    responses: Mutex<Vec<Result<String, LlmError>>>,
    pub calls: Mutex<Vec<(String, u32)>>,
}

impl ScriptedModel {
    pub fn new(responses: Vec<Result<String, LlmError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().rev().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| Ok(t.to_string())).collect())
    }
}

#[async_trait]
impl CompletionModel for ScriptedModel {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String, LlmError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), max_tokens));
        self.responses
            .lock()
            .unwrap()
            .pop()
            .unwrap_or(Err(LlmError::EmptyContent))
    }
}

#[derive(Debug, Clone)]
pub struct StoredObject {
    pub bucket: String,
    pub key: String,
    pub body: Vec<u8>,
    pub content_type: String,
}

#[derive(Default)]
pub struct MemoryStore {
    pub objects: Mutex<Vec<StoredObject>>,
}

#[async_trait]
impl BlobStore for MemoryStore {
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        self.objects.lock().unwrap().push(StoredObject {
            bucket: bucket.to_string(),
            key: key.to_string(),
            body,
            content_type: content_type.to_string(),
        });
        Ok(())
    }
}

/// Simulates a transport failure on every put.
pub struct FailingStore;

#[async_trait]
impl BlobStore for FailingStore {
    async fn put(
        &self,
        bucket: &str,
        key: &str,
        _body: Vec<u8>,
        _content_type: &str,
    ) -> Result<(), StorageError> {
        Err(StorageError::Put {
            bucket: bucket.to_string(),
            key: key.to_string(),
            message: "connection reset by peer".to_string(),
        })
    }
}

pub fn sample_requirements() -> JobRequirements {
    JobRequirements {
        skills: vec!["Python".into(), "Django".into(), "AWS".into()],
        years_of_experience: 5.0,
        seniority: Seniority::Senior,
    }
}

pub fn sample_match_result() -> MatchResult {
    MatchResult::new(
        sample_requirements(),
        FitAssessment {
            fit_score: 85,
            matched_skills: vec!["Python".into(), "AWS".into()],
            recommendation: Recommendation::StrongFit,
            reasoning: vec!["a".into(), "b".into(), "c".into()],
        },
        Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap(),
    )
}
