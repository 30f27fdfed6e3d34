//! Course code validation and the course catalog

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 3-4 uppercase letters, 3-4 digits, optional trailing alphanumerics
/// (e.g. "ENC1101", "CAI3821C")
static COURSE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3,4}\d{3,4}[A-Z0-9]*$").expect("course code pattern"));

/// Errors surfaced when the user enters a course code
///
/// All of these are recoverable: they are shown as a short message and never
/// mutate the selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter a course code.")]
    EmptyInput,

    #[error("Invalid course code.")]
    MalformedCode,

    #[error("Course '{0}' is not in the catalog.")]
    UnknownCourse(String),

    #[error("Already added.")]
    DuplicateSelection,
}

/// A validated course code token
///
/// Normalized (trimmed, uppercased) and pattern-checked at construction;
/// immutable afterwards. Equality is exact string match.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseCode(String);

impl CourseCode {
    /// Parse raw user input into a course code
    ///
    /// Trims and uppercases before matching, so " enc1101 " is accepted.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let code = raw.trim().to_uppercase();
        if code.is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        if !COURSE_CODE_RE.is_match(&code) {
            return Err(ValidationError::MalformedCode);
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CourseCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CourseCode {
    type Error = ValidationError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<CourseCode> for String {
    fn from(code: CourseCode) -> Self {
        code.0
    }
}

/// The set of course codes available in this deployment
///
/// Injected from configuration; membership is checked only when a course is
/// added to the selection.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    codes: BTreeSet<CourseCode>,
}

impl CourseCatalog {
    pub fn new(codes: impl IntoIterator<Item = CourseCode>) -> Self {
        Self {
            codes: codes.into_iter().collect(),
        }
    }

    /// Build a catalog from raw strings, rejecting any malformed entry
    pub fn from_raw<S: AsRef<str>>(raw: &[S]) -> Result<Self, ValidationError> {
        let codes = raw
            .iter()
            .map(|s| CourseCode::parse(s.as_ref()))
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Self { codes })
    }

    pub fn contains(&self, code: &CourseCode) -> bool {
        self.codes.contains(code)
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate catalog codes in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &CourseCode> {
        self.codes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_valid_codes() {
        for raw in ["ENC1101", "MAC1105", "COP3530", "CAI3821C", "STA2023"] {
            let code = CourseCode::parse(raw).unwrap();
            assert_eq!(code.as_str(), raw);
        }
    }

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        let code = CourseCode::parse("  enc1101 ").unwrap();
        assert_eq!(code.as_str(), "ENC1101");
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(CourseCode::parse(""), Err(ValidationError::EmptyInput));
        assert_eq!(CourseCode::parse("   "), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for raw in ["EN1101", "ENCXX101", "1101ENC", "ENC11", "ENC-1101", "ENCOD1101"] {
            assert_eq!(CourseCode::parse(raw), Err(ValidationError::MalformedCode), "raw={raw}");
        }
    }

    #[test]
    fn test_catalog_membership() {
        let catalog = CourseCatalog::from_raw(&["ENC1101", "MAC1105"]).unwrap();
        assert!(catalog.contains(&CourseCode::parse("ENC1101").unwrap()));
        assert!(!catalog.contains(&CourseCode::parse("COP1000").unwrap()));
    }

    #[test]
    fn test_catalog_rejects_malformed_entry() {
        let result = CourseCatalog::from_raw(&["ENC1101", "bogus!"]);
        assert_eq!(result.unwrap_err(), ValidationError::MalformedCode);
    }

    #[test]
    fn test_serde_roundtrip() {
        let code = CourseCode::parse("ENC1101").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"ENC1101\"");
        let back: CourseCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }

    #[test]
    fn test_deserialize_rejects_malformed() {
        let result: Result<CourseCode, _> = serde_json::from_str("\"not a code\"");
        assert!(result.is_err());
    }
}
