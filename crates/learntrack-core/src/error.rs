//! Error types for LearnTrack core operations.
//!
//! Two kinds cover everything the core can signal. Both are recoverable: the
//! shell reports the message and keeps the menu loop running. Messages are
//! written for the user and name the specific rule or id involved.

use thiserror::Error;

/// Result type alias for LearnTrack operations.
pub type Result<T> = std::result::Result<T, LearnTrackError>;

/// Core error type for LearnTrack operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LearnTrackError {
    /// No record matches the given id
    #[error("Not found: {0}")]
    NotFound(String),

    /// Supplied data fails a validation or business rule
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl LearnTrackError {
    /// Build a not-found error naming the entity type and id.
    pub fn not_found(entity: &str, id: u32) -> Self {
        Self::NotFound(format!("{entity} with ID {id} not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_entity_and_id() {
        let err = LearnTrackError::not_found("Student", 1001);
        assert_eq!(err.to_string(), "Not found: Student with ID 1001 not found");
    }

    #[test]
    fn test_invalid_input_message() {
        let err = LearnTrackError::InvalidInput("Invalid email format".into());
        assert_eq!(err.to_string(), "Invalid input: Invalid email format");
    }
}
