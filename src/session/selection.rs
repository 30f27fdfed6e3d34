//! Course selection store
//!
//! Ordered, duplicate-free set of course codes the user wants included,
//! validated against the injected catalog at insertion time only.

use tracing::debug;

use crate::domain::{CourseCatalog, CourseCode, ValidationError};

/// Selected courses, insertion order preserved
#[derive(Debug, Clone)]
pub struct CourseSelectionStore {
    catalog: CourseCatalog,
    selected: Vec<CourseCode>,
}

impl CourseSelectionStore {
    pub fn new(catalog: CourseCatalog) -> Self {
        Self {
            catalog,
            selected: Vec::new(),
        }
    }

    /// Validate raw input and append it to the selection
    ///
    /// Failures never mutate the selection. Duplicate entry is rejected, not
    /// silently deduplicated.
    pub fn add(&mut self, raw: &str) -> Result<CourseCode, ValidationError> {
        debug!(%raw, "add: called");
        let code = CourseCode::parse(raw)?;
        if !self.catalog.contains(&code) {
            return Err(ValidationError::UnknownCourse(code.to_string()));
        }
        if self.selected.contains(&code) {
            return Err(ValidationError::DuplicateSelection);
        }
        self.selected.push(code.clone());
        Ok(code)
    }

    /// Remove a course; no-op if it was never selected
    ///
    /// Does not touch the lock set: a removed course may remain locked, where
    /// it is inert until the user re-adds it.
    pub fn remove(&mut self, code: &CourseCode) {
        debug!(%code, "remove: called");
        self.selected.retain(|c| c != code);
    }

    pub fn selected(&self) -> &[CourseCode] {
        &self.selected
    }

    pub fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }
}
