//! Domain Error Types
//!
//! Validation and business rule failures that don't depend on the store.

use thiserror::Error;

/// Domain-specific errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Required field absent (or zero) in the request
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Feedback rating outside [1, 5]
    #[error("Rating must be between 1 and 5 (got {0})")]
    RatingOutOfRange(i64),

    /// Attendance for a student with no registration, when registration is required
    #[error("Student {student_id} is not registered for event {event_id}")]
    NotRegistered { student_id: i64, event_id: i64 },
}
