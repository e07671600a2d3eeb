//! Pure input validation predicates.
//!
//! Stateless checks called by the services before any mutation. No side
//! effects; each predicate answers yes or no and the caller decides how to
//! phrase the rejection.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum characters for a first or last name.
pub const MIN_NAME_LENGTH: usize = 2;

/// Maximum characters for a first or last name.
pub const MAX_NAME_LENGTH: usize = 50;

/// Minimum course duration in weeks.
pub const MIN_COURSE_DURATION: u32 = 1;

/// Maximum course duration in weeks.
pub const MAX_COURSE_DURATION: u32 = 52;

/// ASCII local part, domain, and a 2+ letter TLD.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
});

/// Check that a name is non-blank and between 2 and 50 characters.
pub fn is_valid_name(name: &str) -> bool {
    if name.trim().is_empty() {
        return false;
    }
    let len = name.chars().count();
    (MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&len)
}

/// Check that an email matches the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() {
        return false;
    }
    EMAIL_PATTERN.is_match(email)
}

/// Check that a course duration is between 1 and 52 weeks.
pub fn is_valid_duration(weeks: u32) -> bool {
    (MIN_COURSE_DURATION..=MAX_COURSE_DURATION).contains(&weeks)
}
