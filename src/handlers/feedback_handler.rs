//! Feedback Handler
//!
//! Stores a student's rating for an event.

use sqlx::SqlitePool;

use crate::domain::{Feedback, OperationContext};
use crate::error::AppError;

use super::SubmitFeedbackCommand;

pub(crate) const DUPLICATE_FEEDBACK: &str =
    "Feedback already submitted for this student and event.";

/// Handler for feedback submission
#[derive(Debug, Clone)]
pub struct FeedbackHandler {
    pool: SqlitePool,
}

impl FeedbackHandler {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Execute the submit feedback command.
    ///
    /// The rating range was already enforced by `Rating`; the table's CHECK
    /// constraint backs it up.
    pub async fn execute(
        &self,
        command: SubmitFeedbackCommand,
        context: &OperationContext,
    ) -> Result<Feedback, AppError> {
        let rating = command.rating.value();

        let result =
            sqlx::query("INSERT INTO feedback (student_id, event_id, rating) VALUES (?, ?, ?)")
                .bind(command.student_id)
                .bind(command.event_id)
                .bind(rating)
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::from_insert(e, DUPLICATE_FEEDBACK))?;

        let feedback = Feedback {
            id: result.last_insert_rowid(),
            student_id: command.student_id,
            event_id: command.event_id,
            rating,
        };

        tracing::info!(
            feedback_id = feedback.id,
            student_id = feedback.student_id,
            event_id = feedback.event_id,
            rating,
            correlation_id = ?context.correlation_id,
            "Feedback submitted"
        );

        Ok(feedback)
    }
}
