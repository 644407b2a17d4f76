//! campus_events Library
//!
//! Registrations, attendance, feedback and the reports computed over them.
//! Re-exports modules for the binaries and integration tests.

pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod reports;
pub mod seed;
mod error;

pub use config::{Config, SeedPlan};
pub use domain::{DomainError, OperationContext, Rating};
pub use error::AppError;
