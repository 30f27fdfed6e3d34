//! Explanation session
//!
//! Orchestrates calls to the external explanation service from a snapshot of
//! the generation session's last summary and outcome. At most one explanation
//! call may be in flight; the in-progress flag is cleared through a drop guard
//! so it cannot be left stuck by any failure branch.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::api::{ExplainRequest, PlannerApi};
use crate::domain::GenerationOutcome;

/// Fallback text when the explanation call fails in any way
pub const EXPLANATION_FALLBACK: &str = "An error occurred while generating the explanation.";

/// Immutable snapshot of the inputs at the moment explanation is invoked
///
/// Captured before the call starts, so later edits or regenerations cannot
/// leak into an outstanding explanation.
#[derive(Debug, Clone)]
pub struct ExplanationContext {
    pub summary: String,
    pub outcome: Option<GenerationOutcome>,
}

impl ExplanationContext {
    fn payload(&self) -> ExplainRequest {
        ExplainRequest {
            user_message: self.summary.clone(),
            schedule: self.outcome.as_ref().map(|o| o.schedule().to_vec()).unwrap_or_default(),
            fail_reason: self
                .outcome
                .as_ref()
                .and_then(|o| o.fail_reason())
                .map(String::from),
        }
    }
}

/// Owns the explanation text and the in-progress flag
pub struct ExplanationSession {
    api: Arc<dyn PlannerApi>,
    in_flight: AtomicBool,
    text: Mutex<String>,
}

impl ExplanationSession {
    pub fn new(api: Arc<dyn PlannerApi>) -> Self {
        Self {
            api,
            in_flight: AtomicBool::new(false),
            text: Mutex::new(String::new()),
        }
    }

    /// Request an explanation for the given context
    ///
    /// Returns `None` immediately, without a second service call, if an
    /// explanation is already in flight. On completion the stored text is
    /// replaced: with the returned explanation (empty if the service sent
    /// none), or with the fixed fallback on any failure.
    pub async fn explain(&self, context: ExplanationContext) -> Option<String> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            debug!("explain: already in flight, ignoring");
            return None;
        }
        let _guard = InFlightGuard(&self.in_flight);

        debug!(has_outcome = context.outcome.is_some(), "explain: called");
        let text = match self.api.explain(context.payload()).await {
            Ok(response) => response.explanation.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "explain: service call failed");
                EXPLANATION_FALLBACK.to_string()
            }
        };

        *self.text.lock() = text.clone();
        Some(text)
    }

    /// The most recent explanation text (empty before the first completion)
    pub fn text(&self) -> String {
        self.text.lock().clone()
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }
}

/// Clears the in-progress flag on every exit path
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
