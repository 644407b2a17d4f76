//! Store row types

use serde::{Deserialize, Serialize};

/// An event hosted by a college
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub college_id: i64,
}

/// A student enrolled at a college
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub college_id: i64,
}

/// A student's intent to attend an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Registration {
    pub id: i64,
    pub student_id: i64,
    pub event_id: i64,
}

/// A student's confirmed presence at an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Attendance {
    pub id: i64,
    pub student_id: i64,
    pub event_id: i64,
}

/// A student's 1-5 rating for an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Feedback {
    pub id: i64,
    pub student_id: i64,
    pub event_id: i64,
    pub rating: i64,
}
