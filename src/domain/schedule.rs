//! Schedule entries and the generation outcome sum type

use serde::{Deserialize, Serialize};

use super::CourseCode;

/// Weekday token as carried on the wire ("Mon".."Sun")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
            Self::Sat => "Sat",
            Self::Sun => "Sun",
        };
        write!(f, "{s}")
    }
}

/// One placed class meeting
///
/// Start/end times are opaque wall-clock strings ("10:00"); the session never
/// computes with them. Overlap-freedom within a schedule is the external
/// generator's guarantee, not enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub course: CourseCode,
    pub day: Day,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Display-ordered sequence of placed meetings
pub type Schedule = Vec<ScheduleEntry>;

/// Result of a completed generation attempt
///
/// Exactly one variant holds: a schedule and a failure reason are never
/// populated together. Replaced wholesale by each completed `generate` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Success(Schedule),
    Failure(String),
}

impl GenerationOutcome {
    /// The generated schedule, empty for failures
    pub fn schedule(&self) -> &[ScheduleEntry] {
        match self {
            Self::Success(schedule) => schedule,
            Self::Failure(_) => &[],
        }
    }

    /// The failure reason, if this outcome is a failure
    pub fn fail_reason(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(reason) => Some(reason),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
