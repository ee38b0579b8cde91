use aidconnect_cli::seeder::{self, FulfilmentMix, SeedConfig};
use aidconnect_engine::aggregate;
use clap::{Parser, Subcommand};
use dialoguer::Confirm;
use dotenvy::dotenv;
use sqlx::PgPool;

#[derive(Parser)]
#[command(name = "aidconnect-cli")]
#[command(about = "AidConnect CLI - Administrative tools for AidConnect", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upsert the three demo requests
    SeedDemo,
    /// Seed the database with fake aid requests
    Seed {
        /// Number of requests to create
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Maximum number of items per request
        #[arg(long, default_value = "4")]
        max_items: usize,

        /// Percentage of requests created fully received
        #[arg(long, default_value = "20")]
        fulfilled: u8,

        /// Percentage of requests created partially received
        #[arg(long, default_value = "35")]
        partial: u8,
    },
    /// Delete every aid request
    Clear {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Re-derive stored statuses from item quantities and fix any drift
    RecomputeStatus,
    /// Print the dashboard statistics for the stored requests
    Stats {
        /// Keywords to leave out of the keyword ranking (comma-separated)
        #[arg(short = 'i', long, value_delimiter = ',')]
        ignore: Vec<String>,

        /// Print raw JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let pool = aidconnect_db::init_db_pool().await;
    if let Err(e) = aidconnect_db::run_migrations(&pool).await {
        eprintln!("❌ Failed to run migrations: {}", e);
        std::process::exit(1);
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::SeedDemo => handle_seed_demo(&pool).await,
        Commands::Seed {
            count,
            max_items,
            fulfilled,
            partial,
        } => handle_seed(&pool, count, max_items, fulfilled, partial).await,
        Commands::Clear { yes } => handle_clear(&pool, yes).await,
        Commands::RecomputeStatus => handle_recompute_status(&pool).await,
        Commands::Stats { ignore, json } => handle_stats(&pool, ignore, json).await,
    }
}

async fn handle_seed_demo(pool: &PgPool) {
    if let Err(e) = seeder::seed_demo(pool).await {
        eprintln!("\n❌ Error seeding demo requests: {}", e);
        std::process::exit(1);
    }
}

async fn handle_seed(pool: &PgPool, count: usize, max_items: usize, fulfilled: u8, partial: u8) {
    let config = SeedConfig::new(count)
        .with_max_items(max_items)
        .with_mix(FulfilmentMix { fulfilled, partial });

    if let Err(e) = seeder::seed_requests(pool, config).await {
        eprintln!("\n❌ Error seeding database: {}", e);
        std::process::exit(1);
    }
}

async fn handle_clear(pool: &PgPool, yes: bool) {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Delete ALL aid requests?")
            .default(false)
            .interact()
            .unwrap_or(false);
        if !confirmed {
            println!("Aborted.");
            return;
        }
    }

    if let Err(e) = seeder::clear_requests(pool).await {
        eprintln!("\n❌ Error clearing requests: {}", e);
        std::process::exit(1);
    }
}

async fn handle_recompute_status(pool: &PgPool) {
    match seeder::recompute_statuses(pool).await {
        Ok((checked, corrected)) => {
            println!("✅ Checked {} requests, corrected {}", checked, corrected);
        }
        Err(e) => {
            eprintln!("\n❌ Error recomputing statuses: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_stats(pool: &PgPool, ignore: Vec<String>, json: bool) {
    let requests = match seeder::load_requests(pool).await {
        Ok(requests) => requests,
        Err(e) => {
            eprintln!("\n❌ Error loading requests: {}", e);
            std::process::exit(1);
        }
    };

    let stats = aggregate(&requests, &ignore);

    if json {
        match serde_json::to_string_pretty(&stats) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("\n❌ Error encoding stats: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("📊 Requests: {} total, {} fulfilled, {} open", stats.total_requests, stats.fulfilled_requests, stats.pending_requests);

    println!("\nMost needed categories:");
    for need in &stats.top_needed_items {
        println!("   {:<18} {:>3}% unfulfilled", need.category.label(), need.unfulfilled_percentage);
    }

    println!("\nMost urgent locations:");
    for need in &stats.top_urgent_regions {
        println!("   {:<40} {:>6} outstanding", need.location, need.unfulfilled_count);
    }

    println!("\nTop keywords:");
    for keyword in &stats.keyword_stats {
        println!("   {:<30} {:>4}", keyword.keyword, keyword.frequency);
    }
}
