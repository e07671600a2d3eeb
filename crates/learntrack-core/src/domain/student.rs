//! Student record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A student tracked by the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier, assigned at creation
    pub id: u32,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Optional contact email (empty string means none)
    pub email: String,

    /// Free-text cohort tag, e.g. "Batch-2024-A"
    pub batch: String,

    /// Soft-delete marker; inactive students stay stored and lookupable
    pub active: bool,
}

impl Student {
    /// Create an active student with the given fields.
    pub fn new(id: u32, first_name: &str, last_name: &str, email: &str, batch: &str) -> Self {
        Self {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            batch: batch.to_string(),
            active: true,
        }
    }

    /// Full name with id, used in summaries and stats.
    pub fn display_name(&self) -> String {
        format!("{} {} (ID: {})", self.first_name, self.last_name, self.id)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student{{id={}, name={} {}, email={}, batch={}, active={}}}",
            self.id, self.first_name, self.last_name, self.email, self.batch, self.active
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_student_is_active() {
        let s = Student::new(1001, "Jane", "Doe", "jane@example.com", "Batch-2024-A");
        assert!(s.active);
        assert_eq!(s.display_name(), "Jane Doe (ID: 1001)");
    }
}
