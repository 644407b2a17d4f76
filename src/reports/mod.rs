//! Reports module
//!
//! Read-only aggregations over events and the mutation tables.

mod service;

pub use service::{AttendanceRateRow, FeedbackScoreRow, RegistrationCountRow, ReportService};
