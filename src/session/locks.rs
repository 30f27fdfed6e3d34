//! Lock set for pinned courses
//!
//! Advisory input to the next generation request. Toggling is unconditional:
//! no validation against the catalog or the current schedule happens here, and
//! a locked course absent from the schedule is inert. Honoring or rejecting
//! locks is the generation service's responsibility.

use tracing::debug;

use crate::domain::CourseCode;

/// Courses pinned across regeneration, in toggle order
#[derive(Debug, Clone, Default)]
pub struct LockSet {
    locked: Vec<CourseCode>,
}

impl LockSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the code if absent, remove it if present
    pub fn toggle(&mut self, code: CourseCode) {
        debug!(%code, "toggle: called");
        if let Some(pos) = self.locked.iter().position(|c| c == &code) {
            self.locked.remove(pos);
        } else {
            self.locked.push(code);
        }
    }

    pub fn current(&self) -> &[CourseCode] {
        &self.locked
    }

    pub fn is_locked(&self, code: &CourseCode) -> bool {
        self.locked.contains(code)
    }
}
