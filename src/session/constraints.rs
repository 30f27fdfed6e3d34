//! Free-text scheduling preferences
//!
//! Stored verbatim and forwarded opaquely to the generation service; the
//! session never interprets the text. Empty means "no constraints".

use crate::domain::CourseCode;

/// Raw preference string, e.g. "Avoid mornings."
#[derive(Debug, Clone, Default)]
pub struct ConstraintText(String);

impl ConstraintText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.0 = text.into();
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Comma-join codes for the canonical summary, with the "(none)" sentinel
pub(crate) fn join_or_none(codes: &[CourseCode]) -> String {
    if codes.is_empty() {
        "(none)".to_string()
    } else {
        codes.iter().map(|c| c.as_str()).collect::<Vec<_>>().join(", ")
    }
}
