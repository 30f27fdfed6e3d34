//! Domain types for the schedule planning session
//!
//! Pure data: course codes, the injected catalog, placed schedule entries,
//! and the sum-typed generation outcome. No service or presentation logic.

mod course;
mod schedule;

pub use course::{CourseCatalog, CourseCode, ValidationError};
pub use schedule::{Day, GenerationOutcome, Schedule, ScheduleEntry};
