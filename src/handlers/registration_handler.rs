//! Registration Handler
//!
//! Records a student's registration for an event.

use sqlx::SqlitePool;

use crate::domain::{OperationContext, Registration};
use crate::error::AppError;

use super::RegisterCommand;

pub(crate) const DUPLICATE_REGISTRATION: &str = "Student is already registered for this event.";

/// Handler for event registration
#[derive(Debug, Clone)]
pub struct RegistrationHandler {
    pool: SqlitePool,
}

impl RegistrationHandler {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Execute the register command.
    ///
    /// One INSERT; the (student_id, event_id) unique constraint is the only
    /// duplicate check, so concurrent attempts on the same pair yield exactly one
    /// success.
    pub async fn execute(
        &self,
        command: RegisterCommand,
        context: &OperationContext,
    ) -> Result<Registration, AppError> {
        let result = sqlx::query("INSERT INTO registrations (student_id, event_id) VALUES (?, ?)")
            .bind(command.student_id)
            .bind(command.event_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_insert(e, DUPLICATE_REGISTRATION))?;

        let registration = Registration {
            id: result.last_insert_rowid(),
            student_id: command.student_id,
            event_id: command.event_id,
        };

        tracing::info!(
            registration_id = registration.id,
            student_id = registration.student_id,
            event_id = registration.event_id,
            correlation_id = ?context.correlation_id,
            "Student registered"
        );

        Ok(registration)
    }
}
