//! Domain module
//!
//! Core domain types and validation rules.

pub mod context;
pub mod error;
pub mod models;
pub mod rating;

pub use context::OperationContext;
pub use error::DomainError;
pub use models::{Attendance, Event, Feedback, Registration, Student};
pub use rating::Rating;

/// Validate a required identifier.
///
/// Absent and zero ids both count as missing; row ids start at 1.
pub fn require_id(field: &'static str, value: Option<i64>) -> Result<i64, DomainError> {
    match value {
        Some(id) if id != 0 => Ok(id),
        _ => Err(DomainError::MissingField(field)),
    }
}
