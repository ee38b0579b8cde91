//! The three demo requests the dashboard ships with.
//!
//! Ids are fixed so re-seeding overwrites rather than duplicates them.
//! Contact numbers and NICs are kept as originally recorded even where they
//! would not pass today's submission checks.

use aidconnect_engine::refresh_status;
use aidconnect_models::{AidCategory, AidItem, AidRequest, RequestId, RequestStatus};

const HOUR_MS: i64 = 60 * 60 * 1000;

fn item(
    id: &str,
    name: &str,
    category: AidCategory,
    needed: u32,
    received: u32,
    unit: &str,
    keywords: &[&str],
) -> AidItem {
    AidItem {
        id: id.to_string(),
        name: name.to_string(),
        category,
        quantity_needed: needed,
        quantity_received: received,
        unit: unit.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

#[allow(clippy::too_many_arguments)]
fn request(
    id: u128,
    nic: &str,
    full_name: &str,
    contact_number: &str,
    location: &str,
    items: Vec<AidItem>,
    created_at: i64,
    updated_at: i64,
) -> AidRequest {
    let mut request = AidRequest {
        id: RequestId::from_u128(id),
        nic: nic.to_string(),
        full_name: full_name.to_string(),
        contact_number: contact_number.to_string(),
        extra_contact_number: None,
        location: location.to_string(),
        items,
        status: RequestStatus::Pending,
        notes: None,
        created_at,
        updated_at,
    };
    refresh_status(&mut request);
    request
}

/// Builds the demo requests relative to `now_ms`, statuses derived.
pub fn demo_requests(now_ms: i64) -> Vec<AidRequest> {
    vec![
        request(
            123,
            "90001V",
            "Sarah Connor",
            "555-0101",
            "Colombo - Dehiwala",
            vec![
                item(
                    "i1",
                    "Water Bottles",
                    AidCategory::Water,
                    20,
                    5,
                    "liters",
                    &["Drinking Water", "Bottled", "Hydration"],
                ),
                item(
                    "i2",
                    "Rice",
                    AidCategory::Food,
                    10,
                    0,
                    "kg",
                    &["Dry Rations", "Carbohydrates", "Staple Food"],
                ),
            ],
            now_ms - 24 * HOUR_MS,
            now_ms,
        ),
        request(
            124,
            "90002V",
            "John Smith",
            "555-0102",
            "Kandy - Peradeniya",
            vec![item(
                "i3",
                "Bandages",
                AidCategory::MedicalSupplies,
                5,
                0,
                "packs",
                &["First Aid", "Sterile", "Wound Care", "Medical"],
            )],
            now_ms - 48 * HOUR_MS,
            now_ms,
        ),
        request(
            125,
            "90003V",
            "Kamal Perera",
            "077-1234567",
            "Gampaha - Negombo",
            vec![
                item(
                    "i4",
                    "Milk Powder",
                    AidCategory::Food,
                    5,
                    1,
                    "packs",
                    &["Infant", "Dairy", "Nutrition", "Dry Rations"],
                ),
                item(
                    "i5",
                    "Baby Soap",
                    AidCategory::Hygiene,
                    2,
                    0,
                    "units",
                    &["Infant Care", "Sanitation", "Cleaning"],
                ),
            ],
            now_ms - 12 * HOUR_MS,
            now_ms,
        ),
    ]
}
