//! Fixture data
//!
//! Deterministic colleges/events/students used for development and demos.

use sqlx::SqlitePool;

use crate::config::SeedPlan;
use crate::db::{self, Table};

/// Outcome of a seeding attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Fixture rows were inserted
    Seeded { events: u64, students: u64 },
    /// The store already held events; nothing was written
    Skipped,
}

pub fn event_name(college: u32, n: u32) -> String {
    format!("Event_{}_{}", college, n)
}

pub fn student_name(college: u32, n: u32) -> String {
    format!("Student_{}_{}", college, n)
}

/// Insert `plan` worth of events and students in one transaction.
///
/// Does nothing when events already exist, so leaving seeding enabled across
/// restarts never duplicates fixtures.
pub async fn seed_mock_data(pool: &SqlitePool, plan: SeedPlan) -> Result<SeedOutcome, sqlx::Error> {
    if db::count_rows(pool, Table::Events).await? > 0 {
        tracing::info!("Events already present, skipping mock data");
        return Ok(SeedOutcome::Skipped);
    }

    let mut tx = pool.begin().await?;
    let mut events = 0u64;
    let mut students = 0u64;

    for college in 1..=plan.colleges {
        for n in 1..=plan.events_per_college {
            sqlx::query("INSERT INTO events (name, college_id) VALUES (?, ?)")
                .bind(event_name(college, n))
                .bind(i64::from(college))
                .execute(&mut *tx)
                .await?;
            events += 1;
        }

        for n in 1..=plan.students_per_college {
            sqlx::query("INSERT INTO students (name, college_id) VALUES (?, ?)")
                .bind(student_name(college, n))
                .bind(i64::from(college))
                .execute(&mut *tx)
                .await?;
            students += 1;
        }
    }

    tx.commit().await?;

    tracing::info!(events, students, "Mock data loaded");
    Ok(SeedOutcome::Seeded { events, students })
}
