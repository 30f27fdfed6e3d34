//! Generation session
//!
//! Orchestrates calls to the external schedule-generation service and owns the
//! authoritative outcome plus the canonical request summary. Each completed
//! call fully supersedes the previous outcome and summary. There is no
//! concurrency guard here: overlapping generations race and the last call to
//! complete wins.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use super::constraints::join_or_none;
use crate::api::{GenerateRequest, PlannerApi};
use crate::domain::{CourseCode, GenerationOutcome};

/// Fallback reason when the service is unreachable or the response is malformed
pub const SERVER_ERROR_FALLBACK: &str = "Server error.";

/// Fallback reason when a well-formed failure response omits its reason
pub const GENERATION_FAILED_FALLBACK: &str = "Schedule generation failed.";

/// Immutable snapshot of the inputs at the moment generation is invoked
///
/// Drives both the wire payload and the canonical summary, so the two can
/// never describe different requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    selected: Vec<CourseCode>,
    locked: Vec<CourseCode>,
    constraint_text: String,
}

impl GenerationRequest {
    pub fn new(selected: Vec<CourseCode>, locked: Vec<CourseCode>, constraint_text: String) -> Self {
        Self {
            selected,
            locked,
            constraint_text,
        }
    }

    /// Deterministic textual digest of this request
    ///
    /// Selected courses, locked courses, constraints, in that fixed order, one
    /// per line, each falling back to the "(none)" sentinel when empty.
    pub fn summary(&self) -> String {
        format!(
            "Selected courses: {}\nLocked courses: {}\nConstraints: {}",
            join_or_none(&self.selected),
            join_or_none(&self.locked),
            if self.constraint_text.is_empty() {
                "(none)"
            } else {
                &self.constraint_text
            },
        )
    }

    fn payload(&self) -> GenerateRequest {
        GenerateRequest {
            selected_courses: self.selected.clone(),
            locked_courses: self.locked.clone(),
            constraint_text: self.constraint_text.clone(),
        }
    }
}

#[derive(Debug, Default)]
struct GenerationState {
    last_summary: String,
    outcome: Option<GenerationOutcome>,
}

/// Owns the schedule/failure state and the last request summary
pub struct GenerationSession {
    api: Arc<dyn PlannerApi>,
    state: Mutex<GenerationState>,
}

impl GenerationSession {
    pub fn new(api: Arc<dyn PlannerApi>) -> Self {
        Self {
            api,
            state: Mutex::new(GenerationState::default()),
        }
    }

    /// Submit the request and reconcile the result into the session
    ///
    /// The summary is stored before the call completes so it reflects the
    /// request that was sent even if the call fails. Transport and parse
    /// failures become `Failure("Server error.")` without retry.
    pub async fn generate(&self, request: GenerationRequest) -> GenerationOutcome {
        debug!(selected = request.selected.len(), locked = request.locked.len(), "generate: called");
        self.state.lock().last_summary = request.summary();

        let outcome = match self.api.generate(request.payload()).await {
            Ok(response) if response.success => {
                debug!("generate: success response");
                GenerationOutcome::Success(response.schedule.unwrap_or_default())
            }
            Ok(response) => {
                let reason = response
                    .fail_reason
                    .unwrap_or_else(|| GENERATION_FAILED_FALLBACK.to_string());
                debug!(%reason, "generate: failure response");
                GenerationOutcome::Failure(reason)
            }
            Err(e) => {
                warn!(error = %e, "generate: service call failed");
                GenerationOutcome::Failure(SERVER_ERROR_FALLBACK.to_string())
            }
        };

        self.state.lock().outcome = Some(outcome.clone());
        outcome
    }

    /// Summary of the most recently submitted request
    pub fn last_summary(&self) -> String {
        self.state.lock().last_summary.clone()
    }

    /// The most recent outcome; `None` before the first completed generation
    pub fn outcome(&self) -> Option<GenerationOutcome> {
        self.state.lock().outcome.clone()
    }
}
