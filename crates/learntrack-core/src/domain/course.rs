//! Course record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A course students can enroll in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier, assigned at creation
    pub id: u32,

    /// Course name
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Duration in weeks, bounded 1-52
    pub duration_weeks: u32,

    /// Soft-delete marker; inactive courses stay stored and lookupable
    pub active: bool,
}

impl Course {
    /// Create an active course with the given fields.
    pub fn new(id: u32, name: &str, description: &str, duration_weeks: u32) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            duration_weeks,
            active: true,
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Course{{id={}, name={}, duration={} weeks, active={}}}",
            self.id, self.name, self.duration_weeks, self.active
        )
    }
}
