//! Fake request generation and bulk storage helpers.

use aidconnect_engine::{refresh_status, set_received};
use aidconnect_models::geography::{self, DISTRICTS};
use aidconnect_models::{AidCategory, AidItem, AidRequest, AidRequestRow, RequestId, RequestStatus};
use fake::Fake;
use fake::faker::name::en::Name;
use rayon::prelude::*;
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::time::Instant;

use super::models::{FulfilmentMix, ItemTemplate, SeedConfig};

const BATCH_SIZE: usize = 500;
const DAY_MS: i64 = 24 * 60 * 60 * 1000;

pub static ITEM_CATALOG: &[ItemTemplate] = &[
    ItemTemplate {
        name: "Water Bottles",
        category: AidCategory::Water,
        unit: "liters",
        keywords: &["Drinking Water", "Bottled", "Hydration"],
    },
    ItemTemplate {
        name: "Water Purification Tablets",
        category: AidCategory::Water,
        unit: "packs",
        keywords: &["Purification", "Drinking Water", "Sanitation"],
    },
    ItemTemplate {
        name: "Rice",
        category: AidCategory::Food,
        unit: "kg",
        keywords: &["Dry Rations", "Carbohydrates", "Staple Food"],
    },
    ItemTemplate {
        name: "Dhal",
        category: AidCategory::Food,
        unit: "kg",
        keywords: &["Dry Rations", "Protein", "Staple Food"],
    },
    ItemTemplate {
        name: "Milk Powder",
        category: AidCategory::Food,
        unit: "packs",
        keywords: &["Infant", "Dairy", "Nutrition", "Dry Rations"],
    },
    ItemTemplate {
        name: "Bandages",
        category: AidCategory::MedicalSupplies,
        unit: "packs",
        keywords: &["First Aid", "Sterile", "Wound Care", "Medical"],
    },
    ItemTemplate {
        name: "Paracetamol",
        category: AidCategory::MedicalSupplies,
        unit: "packs",
        keywords: &["Fever", "Pain Relief", "Medicine"],
    },
    ItemTemplate {
        name: "Tarpaulin Sheets",
        category: AidCategory::Shelter,
        unit: "units",
        keywords: &["Waterproof", "Temporary Roofing", "Rain Cover"],
    },
    ItemTemplate {
        name: "Sleeping Mats",
        category: AidCategory::Shelter,
        unit: "units",
        keywords: &["Bedding", "Sleeping", "Camp"],
    },
    ItemTemplate {
        name: "Children's Clothing",
        category: AidCategory::Clothing,
        unit: "sets",
        keywords: &["Children", "Garments", "School Uniform"],
    },
    ItemTemplate {
        name: "Slippers",
        category: AidCategory::Clothing,
        unit: "pairs",
        keywords: &["Footwear", "Rubber", "Everyday"],
    },
    ItemTemplate {
        name: "Baby Soap",
        category: AidCategory::Hygiene,
        unit: "units",
        keywords: &["Infant Care", "Sanitation", "Cleaning"],
    },
    ItemTemplate {
        name: "Sanitary Pads",
        category: AidCategory::Hygiene,
        unit: "packs",
        keywords: &["Feminine Hygiene", "Sanitation", "Personal Care"],
    },
    ItemTemplate {
        name: "Torch",
        category: AidCategory::Other,
        unit: "units",
        keywords: &["Lighting", "Battery", "Night"],
    },
];

fn pick<T>(items: &[T]) -> &T {
    &items[(0..items.len()).fake::<usize>()]
}

fn fake_nic() -> String {
    if (0..2).fake::<u8>() == 0 {
        let digits: u64 = (100_000_000..1_000_000_000u64).fake();
        let suffix = if (0..2).fake::<u8>() == 0 { 'V' } else { 'X' };
        format!("{digits}{suffix}")
    } else {
        let digits: u64 = (100_000_000_000..1_000_000_000_000u64).fake();
        digits.to_string()
    }
}

fn fake_phone() -> String {
    let operator: u8 = (0..9).fake();
    let subscriber: u32 = (0..10_000_000).fake();
    format!("07{operator}-{subscriber:07}")
}

fn fake_location() -> String {
    let (district, regions) = pick(DISTRICTS);
    geography::compose_location(district, pick::<&str>(regions))
}

fn fake_items(max_items: usize, mix: FulfilmentMix) -> Vec<AidItem> {
    let count = (1..=max_items.max(1)).fake::<usize>();
    let roll: u8 = (0..100).fake();

    (0..count)
        .map(|i| {
            let template = pick(ITEM_CATALOG);
            let mut item = AidItem {
                id: format!("item-{}", i + 1),
                name: template.name.to_string(),
                category: template.category,
                quantity_needed: (1..=50).fake(),
                quantity_received: 0,
                unit: template.unit.to_string(),
                keywords: template.keywords.iter().map(|k| k.to_string()).collect(),
            };
            if roll < mix.fulfilled {
                let needed = i64::from(item.quantity_needed);
                set_received(&mut item, needed);
            } else if roll < mix.fulfilled + mix.partial && i == 0 {
                let needed = i64::from(item.quantity_needed);
                let received = (1..=needed).fake::<i64>();
                // keep the first item short so the request stays partial
                set_received(&mut item, received.min(needed - 1).max(1));
            }
            item
        })
        .collect()
}

/// Generates fake requests in parallel using Rayon.
pub fn generate_requests(config: &SeedConfig, now_ms: i64) -> Vec<AidRequest> {
    let spread_ms = i64::from(config.spread_days.max(1)) * DAY_MS;

    (0..config.num_requests)
        .into_par_iter()
        .map(|_| {
            let created_at = now_ms - (0..spread_ms).fake::<i64>();
            let mut request = AidRequest {
                id: RequestId::new(),
                nic: fake_nic(),
                full_name: Name().fake(),
                contact_number: fake_phone(),
                extra_contact_number: None,
                location: fake_location(),
                items: fake_items(config.max_items_per_request, config.mix),
                status: RequestStatus::Pending,
                notes: None,
                created_at,
                updated_at: created_at,
            };
            refresh_status(&mut request);
            request
        })
        .collect()
}

/// Upserts requests by id in batches inside one transaction.
pub async fn insert_requests_batch(
    db: &PgPool,
    requests: &[AidRequest],
) -> Result<u64, Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;
    let mut written = 0;

    for chunk in requests.chunks(BATCH_SIZE) {
        let mut query: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO aid_requests (id, nic, full_name, contact_number, extra_contact_number, \
             location, items, status, notes, created_at, updated_at) ",
        );
        query.push_values(chunk, |mut row, request| {
            row.push_bind(request.id)
                .push_bind(&request.nic)
                .push_bind(&request.full_name)
                .push_bind(&request.contact_number)
                .push_bind(&request.extra_contact_number)
                .push_bind(&request.location)
                .push_bind(Json(&request.items))
                .push_bind(request.status)
                .push_bind(&request.notes)
                .push_bind(request.created_at)
                .push_bind(request.updated_at);
        });
        query.push(
            " ON CONFLICT (id) DO UPDATE SET nic = EXCLUDED.nic, full_name = EXCLUDED.full_name, \
             contact_number = EXCLUDED.contact_number, \
             extra_contact_number = EXCLUDED.extra_contact_number, location = EXCLUDED.location, \
             items = EXCLUDED.items, status = EXCLUDED.status, notes = EXCLUDED.notes, \
             created_at = EXCLUDED.created_at, updated_at = EXCLUDED.updated_at",
        );

        written += query.build().execute(&mut *tx).await?.rows_affected();
    }

    tx.commit().await?;
    Ok(written)
}

/// Seeds `config.num_requests` fake requests.
pub async fn seed_requests(
    db: &PgPool,
    config: SeedConfig,
) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("📦 Seeding {} aid requests...", config.num_requests);

    let now_ms = chrono::Utc::now().timestamp_millis();
    let requests = generate_requests(&config, now_ms);
    let written = insert_requests_batch(db, &requests).await?;

    println!(
        "   ✓ Inserted {} requests in {:?}",
        written,
        start_time.elapsed()
    );
    Ok(written)
}

/// Loads every stored request in submission order.
pub async fn load_requests(db: &PgPool) -> Result<Vec<AidRequest>, sqlx::Error> {
    let rows = sqlx::query_as::<_, AidRequestRow>(
        "SELECT id, nic, full_name, contact_number, extra_contact_number, location, items, \
         status, notes, created_at, updated_at \
         FROM aid_requests ORDER BY created_at ASC, id ASC",
    )
    .fetch_all(db)
    .await?;

    Ok(rows.into_iter().map(AidRequest::from).collect())
}

/// Re-derives every stored status and writes back the ones that drifted.
///
/// Returns `(checked, corrected)`.
pub async fn recompute_statuses(db: &PgPool) -> Result<(usize, usize), Box<dyn std::error::Error>> {
    let requests = load_requests(db).await?;
    let mut tx = db.begin().await?;
    let mut corrected = 0;

    for mut request in requests.iter().cloned() {
        let stored = request.status;
        if refresh_status(&mut request) != stored {
            sqlx::query("UPDATE aid_requests SET status = $1 WHERE id = $2")
                .bind(request.status)
                .bind(request.id)
                .execute(&mut *tx)
                .await?;
            println!(
                "   • {} ({}): {} → {}",
                request.id, request.location, stored, request.status
            );
            corrected += 1;
        }
    }

    tx.commit().await?;
    Ok((requests.len(), corrected))
}

/// Clears all requests from the database.
pub async fn clear_requests(db: &PgPool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing aid requests...");

    let result = sqlx::query("DELETE FROM aid_requests")
        .execute(db)
        .await?
        .rows_affected();

    println!(
        "   ✓ Deleted {} requests in {:?}",
        result,
        start_time.elapsed()
    );
    Ok(result)
}
