//! Session controller
//!
//! Composition root: wires the selection, lock, constraint, generation, and
//! explanation components together, routes user actions to the right
//! component, and recomputes the observable snapshot on demand. No independent
//! logic lives here.

use std::sync::Arc;

use tracing::debug;

use super::{
    ConstraintText, CourseSelectionStore, ExplanationContext, ExplanationSession, GenerationRequest, GenerationSession,
    LockSet,
};
use crate::api::PlannerApi;
use crate::domain::{CourseCatalog, CourseCode, GenerationOutcome, ValidationError};

/// Externally observable aggregate state
///
/// Recomputed wholesale from the components, never partially mutated; the
/// presentation layer reads only this.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub selected_courses: Vec<CourseCode>,
    pub locked_courses: Vec<CourseCode>,
    pub constraint_text: String,
    pub outcome: Option<GenerationOutcome>,
    pub last_summary: String,
    pub explanation: String,
    pub explaining: bool,
}

/// The planning session
pub struct SessionController {
    selection: CourseSelectionStore,
    locks: LockSet,
    constraints: ConstraintText,
    generation: GenerationSession,
    explanation: ExplanationSession,
}

impl SessionController {
    pub fn new(catalog: CourseCatalog, api: Arc<dyn PlannerApi>) -> Self {
        Self {
            selection: CourseSelectionStore::new(catalog),
            locks: LockSet::new(),
            constraints: ConstraintText::new(),
            generation: GenerationSession::new(api.clone()),
            explanation: ExplanationSession::new(api),
        }
    }

    pub fn add_course(&mut self, raw: &str) -> Result<CourseCode, ValidationError> {
        self.selection.add(raw)
    }

    pub fn remove_course(&mut self, code: &CourseCode) {
        self.selection.remove(code);
    }

    pub fn toggle_lock(&mut self, code: CourseCode) {
        self.locks.toggle(code);
    }

    pub fn set_constraints(&mut self, text: impl Into<String>) {
        self.constraints.set(text);
    }

    pub fn catalog(&self) -> &CourseCatalog {
        self.selection.catalog()
    }

    /// Generate a schedule from the current selection, locks, and constraints
    ///
    /// The request is snapshotted here, so edits made while the call is
    /// outstanding do not affect it.
    pub async fn generate(&self) -> GenerationOutcome {
        debug!("generate: called");
        let request = GenerationRequest::new(
            self.selection.selected().to_vec(),
            self.locks.current().to_vec(),
            self.constraints.text().to_string(),
        );
        self.generation.generate(request).await
    }

    /// Explain the most recent generation attempt
    ///
    /// Reflects whatever summary and outcome exist right now, even if the user
    /// has edited the selection since the last generation. A no-op while an
    /// explanation is already in flight, returning the current text unchanged.
    pub async fn explain(&self) -> String {
        debug!("explain: called");
        let context = ExplanationContext {
            summary: self.generation.last_summary(),
            outcome: self.generation.outcome(),
        };
        match self.explanation.explain(context).await {
            Some(text) => text,
            None => self.explanation.text(),
        }
    }

    /// Recompute the observable snapshot
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            selected_courses: self.selection.selected().to_vec(),
            locked_courses: self.locks.current().to_vec(),
            constraint_text: self.constraints.text().to_string(),
            outcome: self.generation.outcome(),
            last_summary: self.generation.last_summary(),
            explanation: self.explanation.text(),
            explaining: self.explanation.in_flight(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::mock::MockPlannerApi;
    use crate::api::{ApiError, ExplainResponse, GenerateResponse};
    use crate::domain::{Day, ScheduleEntry};

    fn code(raw: &str) -> CourseCode {
        CourseCode::parse(raw).unwrap()
    }

    fn controller(mock: Arc<MockPlannerApi>) -> SessionController {
        let catalog = CourseCatalog::from_raw(&["ENC1101", "MAC1105", "COP1000"]).unwrap();
        SessionController::new(catalog, mock)
    }

    fn entry(course: &str) -> ScheduleEntry {
        ScheduleEntry {
            course: code(course),
            day: Day::Mon,
            start_time: "10:00".to_string(),
            end_time: "10:50".to_string(),
            location: None,
        }
    }

    #[test]
    fn test_snapshot_starts_empty() {
        let snapshot = controller(Arc::new(MockPlannerApi::new())).snapshot();
        assert!(snapshot.selected_courses.is_empty());
        assert!(snapshot.locked_courses.is_empty());
        assert!(snapshot.constraint_text.is_empty());
        assert!(snapshot.outcome.is_none());
        assert!(snapshot.last_summary.is_empty());
        assert!(snapshot.explanation.is_empty());
        assert!(!snapshot.explaining);
    }

    #[tokio::test]
    async fn test_generate_scenario_success() {
        let mock = Arc::new(MockPlannerApi::new());
        mock.push_generate(Ok(GenerateResponse {
            success: true,
            schedule: Some(vec![entry("ENC1101")]),
            fail_reason: None,
        }));

        let mut session = controller(mock.clone());
        session.add_course("ENC1101").unwrap();
        session.add_course("MAC1105").unwrap();
        session.set_constraints("Avoid mornings.");

        let outcome = session.generate().await;
        assert_eq!(outcome, GenerationOutcome::Success(vec![entry("ENC1101")]));

        let sent = mock.generate_requests();
        assert_eq!(sent[0].selected_courses, vec![code("ENC1101"), code("MAC1105")]);
        assert!(sent[0].locked_courses.is_empty());
        assert_eq!(sent[0].constraint_text, "Avoid mornings.");

        let snapshot = session.snapshot();
        assert_eq!(snapshot.outcome, Some(outcome));
        assert_eq!(
            snapshot.last_summary,
            "Selected courses: ENC1101, MAC1105\nLocked courses: (none)\nConstraints: Avoid mornings."
        );
    }

    #[tokio::test]
    async fn test_summary_reflects_invocation_time_state() {
        let mock = Arc::new(MockPlannerApi::new());
        mock.push_generate(Ok(GenerateResponse {
            success: true,
            schedule: Some(vec![]),
            fail_reason: None,
        }));

        let mut session = controller(mock);
        session.add_course("ENC1101").unwrap();
        session.generate().await;

        // mutate afterwards: the stored summary must not change
        session.add_course("MAC1105").unwrap();
        session.set_constraints("Evenings only");

        let snapshot = session.snapshot();
        assert_eq!(
            snapshot.last_summary,
            "Selected courses: ENC1101\nLocked courses: (none)\nConstraints: (none)"
        );
    }

    #[tokio::test]
    async fn test_explain_uses_failure_outcome() {
        let mock = Arc::new(MockPlannerApi::new());
        mock.push_generate(Ok(GenerateResponse {
            success: false,
            schedule: None,
            fail_reason: Some("X".to_string()),
        }));
        mock.push_explain(Ok(ExplainResponse {
            explanation: Some("The lock on X conflicts.".to_string()),
        }));

        let mut session = controller(mock.clone());
        session.add_course("ENC1101").unwrap();
        session.generate().await;

        let text = session.explain().await;
        assert_eq!(text, "The lock on X conflicts.");

        let sent = mock.explain_requests();
        assert_eq!(sent[0].fail_reason.as_deref(), Some("X"));
        assert!(sent[0].schedule.is_empty());
        assert_eq!(sent[0].user_message, session.snapshot().last_summary);
    }

    #[tokio::test]
    async fn test_explain_before_any_generation() {
        let mock = Arc::new(MockPlannerApi::new());
        mock.push_explain(Ok(ExplainResponse { explanation: None }));

        let session = controller(mock.clone());
        let text = session.explain().await;
        assert_eq!(text, "");

        let sent = mock.explain_requests();
        assert_eq!(sent[0].user_message, "");
        assert!(sent[0].schedule.is_empty());
        assert_eq!(sent[0].fail_reason, None);
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces_server_error() {
        let mock = Arc::new(MockPlannerApi::new());
        mock.push_generate(Err(ApiError::InvalidResponse("connection refused".to_string())));

        let mut session = controller(mock);
        session.add_course("ENC1101").unwrap();
        let outcome = session.generate().await;

        assert_eq!(outcome, GenerationOutcome::Failure("Server error.".to_string()));
    }

    #[tokio::test]
    async fn test_removed_course_may_stay_locked() {
        let mock = Arc::new(MockPlannerApi::new());
        mock.push_generate(Ok(GenerateResponse {
            success: true,
            schedule: Some(vec![]),
            fail_reason: None,
        }));

        let mut session = controller(mock.clone());
        session.add_course("ENC1101").unwrap();
        session.toggle_lock(code("ENC1101"));
        session.remove_course(&code("ENC1101"));

        let snapshot = session.snapshot();
        assert!(snapshot.selected_courses.is_empty());
        assert_eq!(snapshot.locked_courses, vec![code("ENC1101")]);

        // the inert lock is still forwarded; the service decides what to do
        session.generate().await;
        assert_eq!(mock.generate_requests()[0].locked_courses, vec![code("ENC1101")]);
    }
}
