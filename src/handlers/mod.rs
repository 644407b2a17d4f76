//! Command Handlers module
//!
//! Write operations against the store. Each handler issues exactly one
//! constrained INSERT and relies on the store's constraints for duplicate and
//! reference checks.

mod attendance_handler;
mod commands;
mod feedback_handler;
mod registration_handler;


pub use attendance_handler::AttendanceHandler;
pub use commands::*;
pub use feedback_handler::FeedbackHandler;
pub use registration_handler::RegistrationHandler;
