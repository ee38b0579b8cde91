mod common;

use aidconnect::ai::testing::StubAssistant;
use aidconnect::ai::{ExtractedItem, ExtractedRequest};
use common::{post, setup_test_app, setup_test_app_with_assistant};
use serde_json::json;
use sqlx::PgPool;

fn extraction() -> ExtractedRequest {
    ExtractedRequest {
        full_name: Some("Kamala Silva".to_string()),
        nic: Some("851234567V".to_string()),
        contact_number: Some(" 0712345678 ".to_string()),
        notes: Some("".to_string()),
        district: Some("kandy".to_string()),
        region: Some("peradeniya".to_string()),
        items: vec![
            ExtractedItem {
                name: "Drinking water".to_string(),
                quantity: json!("12"),
                unit: Some("liters".to_string()),
                category: Some("water".to_string()),
                keywords: vec!["bottled".to_string(), "potable".to_string()],
            },
            ExtractedItem {
                name: "Blankets".to_string(),
                quantity: json!(null),
                unit: None,
                category: Some("bedding".to_string()),
                keywords: vec![],
            },
        ],
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_extract_normalises_assistant_output(pool: PgPool) {
    let app = setup_test_app_with_assistant(pool, StubAssistant::default().with_extraction(extraction()));

    let (status, body) = post(
        app,
        "/api/assist/extract",
        json!({ "text": "Kamala from Peradeniya needs 12 liters of water and blankets" }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["full_name"], "Kamala Silva");
    assert_eq!(body["contact_number"], "0712345678");
    assert!(body["notes"].is_null());
    assert_eq!(body["district"], "Kandy");
    assert_eq!(body["region"], "Peradeniya");

    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], "item-1");
    assert_eq!(items[0]["category"], "Water");
    assert_eq!(items[0]["quantity_needed"], 12);
    assert_eq!(items[1]["id"], "item-2");
    assert_eq!(items[1]["category"], "Other");
    assert_eq!(items[1]["quantity_needed"], 1);
    assert_eq!(items[1]["unit"], "units");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_extract_fails_with_bad_gateway_when_assistant_unavailable(pool: PgPool) {
    let app = setup_test_app(pool);

    let (status, body) = post(app, "/api/assist/extract", json!({ "text": "need rice" })).await;
    assert_eq!(status, 502);
    assert!(body["error"].as_str().unwrap().contains("Could not extract"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_extract_rejects_empty_text(pool: PgPool) {
    let app = setup_test_app(pool);
    let (status, _) = post(app, "/api/assist/extract", json!({ "text": "" })).await;
    assert_eq!(status, 422);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_keyword_suggestions(pool: PgPool) {
    let assistant = StubAssistant::default()
        .with_keywords(&["infant formula", "Infant Formula", "powdered milk", " ", "baby food"]);
    let app = setup_test_app_with_assistant(pool, assistant);

    let (status, body) = post(
        app,
        "/api/assist/keywords",
        json!({ "name": "Baby formula", "category": "Food" }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(
        body["keywords"],
        json!(["infant formula", "powdered milk", "baby food"])
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_keyword_suggestions_degrade_to_empty_list(pool: PgPool) {
    let app = setup_test_app(pool);

    let (status, body) = post(
        app,
        "/api/assist/keywords",
        json!({ "name": "Tarpaulin", "category": "Shelter" }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["keywords"], json!([]));
}
