//! Command definitions
//!
//! Commands represent validated intentions to write to the store. Each
//! constructor rejects missing ids and out-of-range ratings before any
//! statement is issued.

use serde::{Deserialize, Serialize};

use crate::domain::{require_id, DomainError, Rating};

// =========================================================================
// RegisterCommand
// =========================================================================

/// Command to register a student for an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterCommand {
    pub student_id: i64,
    pub event_id: i64,
}

impl RegisterCommand {
    pub fn new(student_id: i64, event_id: i64) -> Self {
        Self {
            student_id,
            event_id,
        }
    }

    /// Build from optional request fields
    pub fn try_new(student_id: Option<i64>, event_id: Option<i64>) -> Result<Self, DomainError> {
        Ok(Self::new(
            require_id("student_id", student_id)?,
            require_id("event_id", event_id)?,
        ))
    }
}

// =========================================================================
// MarkAttendanceCommand
// =========================================================================

/// Command to record a student's presence at an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkAttendanceCommand {
    pub student_id: i64,
    pub event_id: i64,
}

impl MarkAttendanceCommand {
    pub fn new(student_id: i64, event_id: i64) -> Self {
        Self {
            student_id,
            event_id,
        }
    }

    /// Build from optional request fields
    pub fn try_new(student_id: Option<i64>, event_id: Option<i64>) -> Result<Self, DomainError> {
        Ok(Self::new(
            require_id("student_id", student_id)?,
            require_id("event_id", event_id)?,
        ))
    }
}

// =========================================================================
// SubmitFeedbackCommand
// =========================================================================

/// Command to rate an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitFeedbackCommand {
    pub student_id: i64,
    pub event_id: i64,
    pub rating: Rating,
}

impl SubmitFeedbackCommand {
    pub fn new(student_id: i64, event_id: i64, rating: Rating) -> Self {
        Self {
            student_id,
            event_id,
            rating,
        }
    }

    /// Build from optional request fields.
    ///
    /// Presence of every field is checked before the rating range.
    pub fn try_new(
        student_id: Option<i64>,
        event_id: Option<i64>,
        rating: Option<i64>,
    ) -> Result<Self, DomainError> {
        let student_id = require_id("student_id", student_id)?;
        let event_id = require_id("event_id", event_id)?;
        let rating = rating.ok_or(DomainError::MissingField("rating"))?;

        Ok(Self::new(student_id, event_id, Rating::new(rating)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_command_requires_both_ids() {
        assert_eq!(
            RegisterCommand::try_new(Some(1), Some(2)),
            Ok(RegisterCommand::new(1, 2))
        );
        assert_eq!(
            RegisterCommand::try_new(None, Some(2)),
            Err(DomainError::MissingField("student_id"))
        );
        assert_eq!(
            RegisterCommand::try_new(Some(1), Some(0)),
            Err(DomainError::MissingField("event_id"))
        );
    }

    #[test]
    fn test_attendance_command_requires_both_ids() {
        assert!(MarkAttendanceCommand::try_new(Some(3), Some(4)).is_ok());
        assert_eq!(
            MarkAttendanceCommand::try_new(Some(3), None),
            Err(DomainError::MissingField("event_id"))
        );
    }

    #[test]
    fn test_feedback_command_rating_bounds() {
        assert!(SubmitFeedbackCommand::try_new(Some(1), Some(1), Some(1)).is_ok());
        assert!(SubmitFeedbackCommand::try_new(Some(1), Some(1), Some(5)).is_ok());
        assert_eq!(
            SubmitFeedbackCommand::try_new(Some(1), Some(1), Some(0)),
            Err(DomainError::RatingOutOfRange(0))
        );
        assert_eq!(
            SubmitFeedbackCommand::try_new(Some(1), Some(1), Some(6)),
            Err(DomainError::RatingOutOfRange(6))
        );
    }

    #[test]
    fn test_feedback_command_missing_fields_win_over_range() {
        assert_eq!(
            SubmitFeedbackCommand::try_new(None, Some(1), Some(9)),
            Err(DomainError::MissingField("student_id"))
        );
        assert_eq!(
            SubmitFeedbackCommand::try_new(Some(1), Some(1), None),
            Err(DomainError::MissingField("rating"))
        );
    }
}
