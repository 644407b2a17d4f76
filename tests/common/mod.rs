//! Common test utilities

#![allow(dead_code)]

use campus_events::{db, seed, Config, SeedPlan};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Fixture size used by the integration tests.
///
/// Event ids 1..=3 belong to college 1 and 4..=6 to college 2; student ids
/// 1..=10 to college 1 and 11..=20 to college 2.
pub const PLAN: SeedPlan = SeedPlan {
    colleges: 2,
    events_per_college: 3,
    students_per_college: 10,
};

/// A seeded database file that lives as long as this value
pub struct TestDb {
    pub pool: SqlitePool,
    pub config: Config,
    _dir: TempDir,
}

/// Setup test database - fresh file, schema reset, fixtures loaded
pub async fn setup_test_db() -> TestDb {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let url = format!("sqlite://{}", dir.path().join("events.db").display());

    let config = Config::from_lookup(|key| match key {
        "DATABASE_URL" => Some(url.clone()),
        "DATABASE_MAX_CONNECTIONS" => Some("8".to_string()),
        _ => None,
    })
    .expect("Failed to build config");

    let pool = db::connect(&config).await.expect("Failed to open DB");
    db::reset_schema(&pool).await.expect("Failed to reset schema");
    seed::seed_mock_data(&pool, PLAN)
        .await
        .expect("Failed to seed fixtures");

    TestDb {
        pool,
        config,
        _dir: dir,
    }
}
