//! Report Service
//!
//! Every report walks `events` with LEFT JOINs, so each event appears exactly
//! once whether or not any mutation row references it.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Registrations per event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct RegistrationCountRow {
    pub id: i64,
    pub name: String,
    pub total_registrations: i64,
}

/// Share of registered students who attended, per event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AttendanceRateRow {
    pub id: i64,
    pub name: String,
    pub attendance_rate_percent: f64,
}

/// Mean feedback rating per event; `None` when nobody rated it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct FeedbackScoreRow {
    pub id: i64,
    pub name: String,
    pub average_feedback: Option<f64>,
}

/// Report queries over the store
#[derive(Debug, Clone)]
pub struct ReportService {
    pool: SqlitePool,
}

impl ReportService {
    /// Create a new ReportService
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Registration count for every event (0 when none).
    ///
    /// `college_id` narrows the report to one college; `None` covers all events.
    pub async fn registrations(
        &self,
        college_id: Option<i64>,
    ) -> Result<Vec<RegistrationCountRow>, sqlx::Error> {
        let rows = sqlx::query_as::<_, RegistrationCountRow>(
            r#"
            SELECT e.id, e.name, COUNT(r.id) AS total_registrations
            FROM events e
            LEFT JOIN registrations r ON e.id = r.event_id
            WHERE ?1 IS NULL OR e.college_id = ?1
            GROUP BY e.id, e.name
            ORDER BY e.id
            "#,
        )
        .bind(college_id)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(events = rows.len(), ?college_id, "Registrations report");
        Ok(rows)
    }

    /// Attendance rate for every event.
    ///
    /// Attendance counts only when the same student also registered for the
    /// event. The denominator is floored at 1, so events without registrations
    /// report 0.
    pub async fn attendance_rate(
        &self,
        college_id: Option<i64>,
    ) -> Result<Vec<AttendanceRateRow>, sqlx::Error> {
        let rows = sqlx::query_as::<_, AttendanceRateRow>(
            r#"
            SELECT
                e.id,
                e.name,
                CAST(COUNT(a.id) AS REAL) * 100 / MAX(1, COUNT(r.id)) AS attendance_rate_percent
            FROM events e
            LEFT JOIN registrations r ON e.id = r.event_id
            LEFT JOIN attendance a ON e.id = a.event_id AND a.student_id = r.student_id
            WHERE ?1 IS NULL OR e.college_id = ?1
            GROUP BY e.id, e.name
            ORDER BY e.id
            "#,
        )
        .bind(college_id)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(events = rows.len(), ?college_id, "Attendance rate report");
        Ok(rows)
    }

    /// Average rating for every event; events without feedback get `None`
    pub async fn feedback_scores(
        &self,
        college_id: Option<i64>,
    ) -> Result<Vec<FeedbackScoreRow>, sqlx::Error> {
        let rows = sqlx::query_as::<_, FeedbackScoreRow>(
            r#"
            SELECT e.id, e.name, AVG(f.rating) AS average_feedback
            FROM events e
            LEFT JOIN feedback f ON e.id = f.event_id
            WHERE ?1 IS NULL OR e.college_id = ?1
            GROUP BY e.id, e.name
            ORDER BY e.id
            "#,
        )
        .bind(college_id)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(events = rows.len(), ?college_id, "Feedback score report");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_feedback_serializes_as_null() {
        let row = FeedbackScoreRow {
            id: 1,
            name: "Event_1_1".to_string(),
            average_feedback: None,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert!(json["average_feedback"].is_null());
        assert_eq!(json["id"], 1);
    }

    #[test]
    fn test_attendance_row_field_names() {
        let row = AttendanceRateRow {
            id: 2,
            name: "Event_1_2".to_string(),
            attendance_rate_percent: 50.0,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["attendance_rate_percent"], 50.0);
        assert_eq!(json["name"], "Event_1_2");
    }
}
