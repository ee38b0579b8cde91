//! Database seeding and maintenance.
//!
//! - [`demo`]: the fixed demo requests
//! - [`requests`]: fake request generation, bulk upsert, clearing and
//!   status reconciliation
//! - [`models`]: seeding configuration

pub mod demo;
pub mod models;
pub mod requests;

use sqlx::PgPool;
use std::time::Instant;

pub use demo::demo_requests;
pub use models::{FulfilmentMix, SeedConfig};
pub use requests::{
    clear_requests, generate_requests, insert_requests_batch, load_requests, recompute_statuses,
    seed_requests,
};

/// Upserts the demo requests. Safe to run repeatedly.
pub async fn seed_demo(db: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🌱 Seeding demo requests...");

    let now_ms = chrono::Utc::now().timestamp_millis();
    let written = insert_requests_batch(db, &demo_requests(now_ms)).await?;

    println!(
        "   ✓ Upserted {} demo requests in {:?}",
        written,
        start_time.elapsed()
    );
    Ok(written)
}
