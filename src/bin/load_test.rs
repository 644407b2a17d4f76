//! Load Testing Tool
//!
//! Fires concurrent registration attempts at the configured store and checks
//! that exactly one attempt per (student, event) pair succeeds.
//!
//! Run with: cargo run --bin load_test --release -- --requests 2000 --pairs 100

use std::time::Instant;

use campus_events::handlers::{RegisterCommand, RegistrationHandler};
use campus_events::{db, seed, AppError, Config, OperationContext};

fn arg_or(args: &[String], flag: &str, default: u64) -> u64 {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    let requests = arg_or(&args, "--requests", 1000);
    let pairs = arg_or(&args, "--pairs", 50).max(1);

    let config = Config::from_env()?;

    println!("Load Test - {} register attempts over {} pairs", requests, pairs);
    println!("Opening {}...", config.database_url);

    let pool = db::connect(&config).await?;
    db::create_schema(&pool).await?;
    seed::seed_mock_data(&pool, config.seed).await?;

    let student_count = db::count_rows(&pool, db::Table::Students).await?.max(1) as u64;
    let event_count = db::count_rows(&pool, db::Table::Events).await?.max(1) as u64;

    let start = Instant::now();
    let mut tasks = Vec::with_capacity(requests as usize);

    for i in 0..requests {
        let pair = i % pairs;
        let student_id = (pair % student_count) as i64 + 1;
        let event_id = ((pair / student_count) % event_count) as i64 + 1;
        let handler = RegistrationHandler::new(pool.clone());

        tasks.push(tokio::spawn(async move {
            handler
                .execute(
                    RegisterCommand::new(student_id, event_id),
                    &OperationContext::new(),
                )
                .await
        }));
    }

    let (mut success, mut duplicate, mut failed) = (0u64, 0u64, 0u64);
    for task in tasks {
        match task.await? {
            Ok(_) => success += 1,
            Err(AppError::Duplicate(_)) => duplicate += 1,
            Err(e) => {
                failed += 1;
                eprintln!("Request failed: {}", e);
            }
        }
    }

    let elapsed = start.elapsed();
    let rate = requests as f64 / elapsed.as_secs_f64();

    println!("\n=== Load Test Results ===");
    println!("Attempts: {}", requests);
    println!("Successful: {}", success);
    println!("Duplicates: {}", duplicate);
    println!("Failed: {}", failed);
    println!("Time: {:.2}s", elapsed.as_secs_f64());
    println!("Rate: {:.0} attempts/sec", rate);

    pool.close().await;
    Ok(())
}
