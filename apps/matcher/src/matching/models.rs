//! Data model for extracted requirements, fit assessments and the persisted match result.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Experience tier a job posting targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seniority {
    Junior,
    #[serde(rename = "Mid-Level")]
    MidLevel,
    Senior,
    Lead,
}

impl Seniority {
    pub fn label(self) -> &'static str {
        match self {
            Seniority::Junior => "Junior",
            Seniority::MidLevel => "Mid-Level",
            Seniority::Senior => "Senior",
            Seniority::Lead => "Lead",
        }
    }
}

impl fmt::Display for Seniority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hiring recommendation label returned by the fit analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "Strong Fit")]
    StrongFit,
    #[serde(rename = "Medium Fit")]
    MediumFit,
    #[serde(rename = "Weak Fit")]
    WeakFit,
}

/// Structured requirements extracted from a job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequirements {
    pub skills: Vec<String>,
    pub years_of_experience: f64,
    pub seniority: Seniority,
}

/// Model-produced assessment of one resume against one set of requirements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitAssessment {
    pub fit_score: u8, // 0 – 100
    pub matched_skills: Vec<String>,
    pub recommendation: Recommendation,
    pub reasoning: Vec<String>, // exactly 3
}

/// The unit of persistence: requirements plus the flattened assessment, stamped once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub timestamp: DateTime<Utc>,
    pub job_requirements: JobRequirements,
    #[serde(flatten)]
    pub assessment: FitAssessment,
}

impl MatchResult {
    pub fn new(
        job_requirements: JobRequirements,
        assessment: FitAssessment,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            job_requirements,
            assessment,
        }
    }
}
