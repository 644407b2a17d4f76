//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL
    pub database_url: String,

    /// Maximum database connections in pool
    pub database_max_connections: u32,

    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// Drop and recreate every table at startup
    pub reset_database: bool,

    /// Load fixture colleges/events/students when the store is empty
    pub seed_mock_data: bool,

    /// Fixture sizes
    pub seed: SeedPlan,

    /// Reject attendance for students without a registration
    pub require_registration_for_attendance: bool,
}

/// Size of the deterministic fixture data set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedPlan {
    pub colleges: u32,
    pub events_per_college: u32,
    pub students_per_college: u32,
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self {
            colleges: 5,
            events_per_college: 20,
            students_per_college: 500,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://events.db".to_string());

        let database_max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?;
        if database_max_connections == 0 {
            return Err(ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS"));
        }

        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or(&lookup, "PORT", 5000)?;
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());

        let reset_database = flag_or(&lookup, "RESET_DATABASE", false)?;
        let seed_mock_data = flag_or(&lookup, "SEED_MOCK_DATA", false)?;
        let require_registration_for_attendance =
            flag_or(&lookup, "REQUIRE_REGISTRATION_FOR_ATTENDANCE", false)?;

        let defaults = SeedPlan::default();
        let seed = SeedPlan {
            colleges: parse_or(&lookup, "SEED_COLLEGES", defaults.colleges)?,
            events_per_college: parse_or(
                &lookup,
                "SEED_EVENTS_PER_COLLEGE",
                defaults.events_per_college,
            )?,
            students_per_college: parse_or(
                &lookup,
                "SEED_STUDENTS_PER_COLLEGE",
                defaults.students_per_college,
            )?,
        };

        let config = Self {
            database_url,
            database_max_connections,
            host,
            port,
            environment,
            reset_database,
            seed_mock_data,
            seed,
            require_registration_for_attendance,
        };

        if config.is_production() && config.reset_database {
            return Err(ConfigError::ResetInProduction);
        }

        Ok(config)
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue(key)),
        None => Ok(default),
    }
}

fn flag_or<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidValue(key)),
        None => Ok(default),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),

    #[error("RESET_DATABASE is not allowed when ENVIRONMENT=production")]
    ResetInProduction,
}
