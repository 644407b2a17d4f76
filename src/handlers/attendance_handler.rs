//! Attendance Handler
//!
//! Records that a student was present at an event.

use sqlx::SqlitePool;

use crate::domain::{Attendance, DomainError, OperationContext};
use crate::error::AppError;

use super::MarkAttendanceCommand;

pub(crate) const DUPLICATE_ATTENDANCE: &str =
    "Attendance is already marked for this student and event.";

/// Handler for attendance marking
#[derive(Debug, Clone)]
pub struct AttendanceHandler {
    pool: SqlitePool,
    require_registration: bool,
}

impl AttendanceHandler {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            require_registration: false,
        }
    }

    /// Only accept attendance for students registered for the event
    pub fn with_required_registration(mut self, required: bool) -> Self {
        self.require_registration = required;
        self
    }

    /// Execute the mark attendance command
    pub async fn execute(
        &self,
        command: MarkAttendanceCommand,
        context: &OperationContext,
    ) -> Result<Attendance, AppError> {
        // Still a single statement when registration is required: the EXISTS
        // guard and the insert are evaluated together.
        let query = if self.require_registration {
            sqlx::query(
                r#"
                INSERT INTO attendance (student_id, event_id)
                SELECT ?1, ?2
                WHERE EXISTS (
                    SELECT 1 FROM registrations WHERE student_id = ?1 AND event_id = ?2
                )
                "#,
            )
        } else {
            sqlx::query("INSERT INTO attendance (student_id, event_id) VALUES (?1, ?2)")
        };

        let result = query
            .bind(command.student_id)
            .bind(command.event_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_insert(e, DUPLICATE_ATTENDANCE))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotRegistered {
                student_id: command.student_id,
                event_id: command.event_id,
            }
            .into());
        }

        let attendance = Attendance {
            id: result.last_insert_rowid(),
            student_id: command.student_id,
            event_id: command.event_id,
        };

        tracing::info!(
            attendance_id = attendance.id,
            student_id = attendance.student_id,
            event_id = attendance.event_id,
            correlation_id = ?context.correlation_id,
            "Attendance marked"
        );

        Ok(attendance)
    }
}
