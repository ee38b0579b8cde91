//! # AidConnect CLI
//!
//! Database seeding and maintenance utilities for AidConnect.
//!
//! This library crate provides the functionality used by the CLI binary.
//!
//! ## Usage
//!
//! ```ignore
//! use aidconnect_cli::seeder::{seed_demo, seed_requests, SeedConfig};
//!
//! seed_demo(&pool).await?;
//! seed_requests(&pool, SeedConfig::new(200)).await?;
//! ```

pub mod seeder;
