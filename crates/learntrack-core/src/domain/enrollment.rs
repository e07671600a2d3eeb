//! Enrollment record and status.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::LearnTrackError;

/// Lifecycle status of an enrollment.
///
/// `Active` is the only initial state. The generic status update accepts any
/// transition; nothing in the service layer treats the other three states as
/// terminal, they simply have no outgoing transitions of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnrollmentStatus {
    Active,
    Completed,
    Cancelled,
    Dropped,
}

impl EnrollmentStatus {
    /// Storage-layer token, e.g. `"ACTIVE"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::Dropped => "DROPPED",
        }
    }

    /// All recognized statuses, in declaration order.
    pub fn all() -> [Self; 4] {
        [Self::Active, Self::Completed, Self::Cancelled, Self::Dropped]
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnrollmentStatus {
    type Err = LearnTrackError;

    /// Case-sensitive: callers normalize user input to upper case first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(Self::Active),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            "DROPPED" => Ok(Self::Dropped),
            _ => Err(LearnTrackError::InvalidInput(
                "Invalid status. Valid options: ACTIVE, COMPLETED, CANCELLED, DROPPED".into(),
            )),
        }
    }
}

/// A student's enrollment in a course.
///
/// References the student and course by id. Deleting either parent does not
/// retract the enrollment; records are kept as history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    /// Unique identifier, assigned at creation
    pub id: u32,

    /// Id of the enrolled student
    pub student_id: u32,

    /// Id of the course enrolled in
    pub course_id: u32,

    /// Date the enrollment was created; never mutated afterwards
    pub enrolled_on: NaiveDate,

    /// Current lifecycle status
    pub status: EnrollmentStatus,
}

impl Enrollment {
    /// Create an active enrollment dated today.
    pub fn new(id: u32, student_id: u32, course_id: u32) -> Self {
        Self {
            id,
            student_id,
            course_id,
            enrolled_on: chrono::Local::now().date_naive(),
            status: EnrollmentStatus::Active,
        }
    }
}

impl fmt::Display for Enrollment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Enrollment{{id={}, studentId={}, courseId={}, date={}, status={}}}",
            self.id, self.student_id, self.course_id, self.enrolled_on, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_enrollment_starts_active() {
        let e = Enrollment::new(3001, 1001, 2001);
        assert_eq!(e.status, EnrollmentStatus::Active);
    }

    #[test]
    fn test_status_parses_upper_case_tokens_only() {
        assert_eq!(
            "COMPLETED".parse::<EnrollmentStatus>().unwrap(),
            EnrollmentStatus::Completed
        );
        assert!("completed".parse::<EnrollmentStatus>().is_err());
        assert!("PAUSED".parse::<EnrollmentStatus>().is_err());
    }

    #[test]
    fn test_status_round_trips_through_as_str() {
        for status in EnrollmentStatus::all() {
            assert_eq!(status.as_str().parse::<EnrollmentStatus>().unwrap(), status);
        }
    }
}
