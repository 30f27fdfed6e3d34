//! Session state machine
//!
//! The components that govern how course selection, locking, constraint text,
//! generation results, and explanation text interact over time:
//!
//! - [`CourseSelectionStore`] - ordered, duplicate-free selected courses
//! - [`LockSet`] - advisory pinned courses for regeneration
//! - [`ConstraintText`] - verbatim free-text preferences
//! - [`GenerationSession`] - owns the authoritative outcome and summary
//! - [`ExplanationSession`] - at-most-one-in-flight explanation calls
//! - [`SessionController`] - composition root exposing [`SessionSnapshot`]

mod constraints;
mod controller;
mod explanation;
mod generation;
mod locks;
mod selection;

pub use constraints::ConstraintText;
pub use controller::{SessionController, SessionSnapshot};
pub use explanation::{EXPLANATION_FALLBACK, ExplanationContext, ExplanationSession};
pub use generation::{GENERATION_FAILED_FALLBACK, GenerationRequest, GenerationSession, SERVER_ERROR_FALLBACK};
pub use locks::LockSet;
pub use selection::CourseSelectionStore;
