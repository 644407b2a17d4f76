//! Database module
//!
//! Connection setup and schema management for the SQLite store.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::config::Config;

/// Tables owned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Events,
    Students,
    Registrations,
    Attendance,
    Feedback,
}

impl Table {
    /// Every table, parents first
    pub const ALL: [Table; 5] = [
        Table::Events,
        Table::Students,
        Table::Registrations,
        Table::Attendance,
        Table::Feedback,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Table::Events => "events",
            Table::Students => "students",
            Table::Registrations => "registrations",
            Table::Attendance => "attendance",
            Table::Feedback => "feedback",
        }
    }
}

const CREATE_EVENTS: &str = r#"
    CREATE TABLE IF NOT EXISTS events (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        college_id INTEGER NOT NULL
    )
"#;

const CREATE_STUDENTS: &str = r#"
    CREATE TABLE IF NOT EXISTS students (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        college_id INTEGER NOT NULL
    )
"#;

const CREATE_REGISTRATIONS: &str = r#"
    CREATE TABLE IF NOT EXISTS registrations (
        id INTEGER PRIMARY KEY,
        student_id INTEGER NOT NULL,
        event_id INTEGER NOT NULL,
        UNIQUE (student_id, event_id),
        FOREIGN KEY (student_id) REFERENCES students(id),
        FOREIGN KEY (event_id) REFERENCES events(id)
    )
"#;

const CREATE_ATTENDANCE: &str = r#"
    CREATE TABLE IF NOT EXISTS attendance (
        id INTEGER PRIMARY KEY,
        student_id INTEGER NOT NULL,
        event_id INTEGER NOT NULL,
        UNIQUE (student_id, event_id),
        FOREIGN KEY (student_id) REFERENCES students(id),
        FOREIGN KEY (event_id) REFERENCES events(id)
    )
"#;

const CREATE_FEEDBACK: &str = r#"
    CREATE TABLE IF NOT EXISTS feedback (
        id INTEGER PRIMARY KEY,
        student_id INTEGER NOT NULL,
        event_id INTEGER NOT NULL,
        rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
        UNIQUE (student_id, event_id),
        FOREIGN KEY (student_id) REFERENCES students(id),
        FOREIGN KEY (event_id) REFERENCES events(id)
    )
"#;

/// Open a connection pool for the configured database
///
/// Foreign keys are switched on for every connection; SQLite leaves them off
/// by default.
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect_with(options)
        .await
}

/// Simple connectivity check
pub async fn verify_connection(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create every table that does not exist yet. Existing data is left alone.
pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in [
        CREATE_EVENTS,
        CREATE_STUDENTS,
        CREATE_REGISTRATIONS,
        CREATE_ATTENDANCE,
        CREATE_FEEDBACK,
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::debug!("Schema ensured");
    Ok(())
}

/// Drop all tables and recreate them empty. Destroys every row.
pub async fn reset_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::warn!("Resetting database schema, all data will be dropped");

    for table in Table::ALL.iter().rev() {
        sqlx::query(&format!("DROP TABLE IF EXISTS {}", table.name()))
            .execute(pool)
            .await?;
    }

    create_schema(pool).await
}

/// Check if required tables exist
pub async fn check_schema(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    for table in Table::ALL {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?)",
        )
        .bind(table.name())
        .fetch_one(pool)
        .await?;

        if !exists {
            tracing::error!("Required table '{}' does not exist", table.name());
            return Ok(false);
        }
    }

    Ok(true)
}

/// Number of rows currently stored in `table`
pub async fn count_rows(pool: &SqlitePool, table: Table) -> Result<i64, sqlx::Error> {
    let sql = format!("SELECT COUNT(*) FROM {}", table.name());
    sqlx::query_scalar(&sql).fetch_one(pool).await
}
