//! classplan - Student Schedule Planning Session Controller
//!
//! classplan drives an interactive session for planning a student's class
//! schedule. The user incrementally selects courses, locks entries of an
//! already-generated schedule, and supplies free-text preferences; the session
//! submits these to an external schedule-generation service and, on demand, to
//! an external explanation service, reconciling results into a consistent
//! snapshot the presentation layer re-renders.
//!
//! # Core Concepts
//!
//! - **Snapshot, not shared state**: all observable state flows through
//!   [`session::SessionSnapshot`], recomputed after each completed operation
//! - **Sum-typed outcomes**: a generation holds a schedule or a failure
//!   reason, never both
//! - **One explanation at a time**: overlapping explanation calls are refused;
//!   overlapping generations race and the last to complete wins
//!
//! # Modules
//!
//! - [`api`] - planner service trait, HTTP client, and wire types
//! - [`domain`] - course codes, catalog, schedule entries, outcomes
//! - [`session`] - the session state machine and controller
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface
//! - [`repl`] - interactive shell presentation

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod repl;
pub mod session;

// Re-export commonly used types
pub use api::{ApiError, HttpPlannerApi, PlannerApi};
pub use config::{ApiConfig, CatalogConfig, Config};
pub use domain::{CourseCatalog, CourseCode, Day, GenerationOutcome, Schedule, ScheduleEntry, ValidationError};
pub use session::{
    ConstraintText, CourseSelectionStore, EXPLANATION_FALLBACK, ExplanationContext, ExplanationSession,
    GENERATION_FAILED_FALLBACK, GenerationRequest, GenerationSession, LockSet, SERVER_ERROR_FALLBACK,
    SessionController, SessionSnapshot,
};
