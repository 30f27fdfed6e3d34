//! Wire request/response types for the planner services
//!
//! Field names match the service contract exactly: the generate payload uses
//! camelCase throughout, while the explain payload mixes `userMessage` with
//! snake_case `fail_reason`.

use serde::{Deserialize, Serialize};

use crate::domain::{CourseCode, ScheduleEntry};

/// Payload for `POST /schedule/generate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub selected_courses: Vec<CourseCode>,
    pub locked_courses: Vec<CourseCode>,
    pub constraint_text: String,
}

/// Response from `POST /schedule/generate`
///
/// Both optional fields tolerate omission; the session normalizes them into a
/// [`crate::domain::GenerationOutcome`].
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(default)]
    pub schedule: Option<Vec<ScheduleEntry>>,
    #[serde(default)]
    pub fail_reason: Option<String>,
}

/// Payload for `POST /llm/explain`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplainRequest {
    #[serde(rename = "userMessage")]
    pub user_message: String,
    pub schedule: Vec<ScheduleEntry>,
    pub fail_reason: Option<String>,
}

/// Response from `POST /llm/explain`
#[derive(Debug, Clone, Deserialize)]
pub struct ExplainResponse {
    #[serde(default)]
    pub explanation: Option<String>,
}
