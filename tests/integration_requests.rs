mod common;

use aidconnect_models::{AidCategory, RequestStatus};
use common::{
    get, insert_request, item, patch, post, send, setup_test_app, stored_request, submission,
};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_create_request_starts_pending(pool: PgPool) {
    let app = setup_test_app(pool);

    let (status, body) = post(
        app,
        "/api/requests",
        submission(
            "901234567V",
            "Colombo",
            "Dehiwala",
            &[("Rice", "Food", 10), ("Bandages", "Medical Supplies", 5)],
        ),
    )
    .await;

    assert_eq!(status, 201);
    assert_eq!(body["status"], "Pending");
    assert_eq!(body["location"], "Colombo - Dehiwala");
    assert_eq!(body["items"][0]["id"], "item-1");
    assert_eq!(body["items"][1]["id"], "item-2");
    assert_eq!(body["items"][1]["category"], "Medical Supplies");
    assert_eq!(body["items"][0]["quantity_received"], 0);
    assert_eq!(body["created_at"], body["updated_at"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_request_rejects_invalid_submission(pool: PgPool) {
    let app = setup_test_app(pool);

    let mut body = submission("12345", "Colombo", "Dehiwala", &[("Rice", "Food", 10)]);
    body["full_name"] = json!("  ");
    let (status, error) = post(app.clone(), "/api/requests", body).await;
    assert_eq!(status, 422);
    let message = error["error"].as_str().unwrap();
    assert!(message.contains("Full Name is required"));
    assert!(message.contains("Invalid NIC"));

    let body = submission("901234567V", "Colombo", "Dehiwala", &[]);
    let (status, error) = post(app.clone(), "/api/requests", body).await;
    assert_eq!(status, 422);
    assert!(error["error"].as_str().unwrap().contains("At least one item is required"));

    let body = submission("901234567V", "Colombo", "Kandy City", &[("Rice", "Food", 1)]);
    let (status, _) = post(app.clone(), "/api/requests", body).await;
    assert_eq!(status, 422);

    let body = submission("901234567V", "Colombo", "Dehiwala", &[("Rice", "Food", 0)]);
    let (status, error) = post(app, "/api/requests", body).await;
    assert_eq!(status, 422);
    assert!(error["error"].as_str().unwrap().contains("at least 1"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_request_rejects_unknown_category(pool: PgPool) {
    let app = setup_test_app(pool);
    let body = submission("901234567V", "Colombo", "Dehiwala", &[("Radio", "Electronics", 1)]);
    let (status, _) = post(app, "/api/requests", body).await;
    assert_eq!(status, 400);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_and_delete_request(pool: PgPool) {
    let app = setup_test_app(pool);

    let (_, created) = post(
        app.clone(),
        "/api/requests",
        submission("200012345678", "Kandy", "Peradeniya", &[("Water", "Water", 24)]),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, body) = get(app.clone(), &format!("/api/requests/{}", id)).await;
    assert_eq!(status, 200);
    assert_eq!(body, created);

    let (status, _) = send(app.clone(), "DELETE", &format!("/api/requests/{}", id), None).await;
    assert_eq!(status, 204);

    let (status, body) = get(app.clone(), &format!("/api/requests/{}", id)).await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Aid request not found");

    let (status, _) = send(app, "DELETE", &format!("/api/requests/{}", id), None).await;
    assert_eq!(status, 404);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_request_with_malformed_id_is_bad_request(pool: PgPool) {
    let app = setup_test_app(pool);
    let (status, _) = get(app, "/api/requests/not-a-uuid").await;
    assert_eq!(status, 400);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_item_quantity_update_derives_status_from_sums(pool: PgPool) {
    let app = setup_test_app(pool);

    let (_, created) = post(
        app.clone(),
        "/api/requests",
        submission(
            "901234567V",
            "Colombo",
            "Dehiwala",
            &[("Rice", "Food", 10), ("Water", "Water", 10)],
        ),
    )
    .await;
    let id = created["id"].as_str().unwrap();
    let item_uri = |item: &str| format!("/api/requests/{}/items/{}", id, item);

    let (status, body) = patch(app.clone(), &item_uri("item-1"), json!({ "quantity_received": 5 })).await;
    assert_eq!(status, 200);
    assert_eq!(body["quantity_received"], 5);
    assert_eq!(body["status"], "Partially Fulfilled");

    // clamped to the 10 needed
    let (_, body) = patch(app.clone(), &item_uri("item-2"), json!({ "quantity_received": 25 })).await;
    assert_eq!(body["quantity_received"], 10);
    assert_eq!(body["status"], "Partially Fulfilled");

    let (_, body) = patch(app.clone(), &item_uri("item-1"), json!({ "quantity_received": "10" })).await;
    assert_eq!(body["status"], "Fulfilled");

    let (_, stored) = get(app.clone(), &format!("/api/requests/{}", id)).await;
    assert_eq!(stored["status"], "Fulfilled");
    assert_eq!(stored["items"][1]["quantity_received"], 10);
    assert!(stored["updated_at"].as_i64().unwrap() >= stored["created_at"].as_i64().unwrap());

    let (_, body) = patch(app.clone(), &item_uri("item-1"), json!({ "quantity_received": -3 })).await;
    assert_eq!(body["quantity_received"], 0);
    assert_eq!(body["status"], "Partially Fulfilled");

    let (_, body) = patch(app.clone(), &item_uri("item-2"), json!({ "quantity_received": "lots" })).await;
    assert_eq!(body["quantity_received"], 0);
    assert_eq!(body["status"], "Pending");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_sum_rule_marks_request_fulfilled_with_short_item(pool: PgPool) {
    // Status is a request-level signal. A legacy row with an over-received
    // item still meets the summed need while item "a" is short.
    let request = stored_request(
        1,
        "901234567V",
        "Colombo - Dehiwala",
        RequestStatus::Pending,
        1_000,
        vec![
            item("a", AidCategory::Food, 10, 5, &[]),
            item("b", AidCategory::Water, 10, 20, &[]),
        ],
    );
    insert_request(&pool, &request).await;
    let app = setup_test_app(pool);

    let (status, body) = patch(
        app,
        &format!("/api/requests/{}/items/a", request.id),
        json!({ "quantity_received": 0 }),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["quantity_received"], 0);
    assert_eq!(body["status"], "Fulfilled");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_item_quantity_update_unknown_targets(pool: PgPool) {
    let app = setup_test_app(pool);

    let (_, created) = post(
        app.clone(),
        "/api/requests",
        submission("901234567V", "Colombo", "Dehiwala", &[("Rice", "Food", 10)]),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = patch(
        app.clone(),
        &format!("/api/requests/{}/items/item-99", id),
        json!({ "quantity_received": 1 }),
    )
    .await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Item not found in this request");

    let (status, _) = patch(
        app.clone(),
        "/api/requests/00000000-0000-0000-0000-000000000001/items/item-1",
        json!({ "quantity_received": 1 }),
    )
    .await;
    assert_eq!(status, 404);

    let (_, stored) = get(app, &format!("/api/requests/{}", id)).await;
    assert_eq!(stored["updated_at"], created["updated_at"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_lookup_by_nic_is_case_insensitive(pool: PgPool) {
    insert_request(
        &pool,
        &stored_request(1, "901234567V", "Colombo - Dehiwala", RequestStatus::Pending, 1_000, vec![
            item("a", AidCategory::Food, 1, 0, &[]),
        ]),
    )
    .await;
    insert_request(
        &pool,
        &stored_request(2, "901234567v", "Kandy - Peradeniya", RequestStatus::Pending, 2_000, vec![
            item("a", AidCategory::Food, 1, 0, &[]),
        ]),
    )
    .await;
    insert_request(
        &pool,
        &stored_request(3, "90001V", "Kandy - Peradeniya", RequestStatus::Pending, 3_000, vec![
            item("a", AidCategory::Food, 1, 0, &[]),
        ]),
    )
    .await;
    let app = setup_test_app(pool);

    let (status, body) = get(app.clone(), "/api/requests/by-nic/901234567V").await;
    assert_eq!(status, 200);
    let found = body.as_array().unwrap();
    assert_eq!(found.len(), 2);
    // newest first
    assert_eq!(found[0]["location"], "Kandy - Peradeniya");

    // Identities that predate format checks still resolve.
    let (status, body) = get(app.clone(), "/api/requests/by-nic/90001v").await;
    assert_eq!(status, 200);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = get(app.clone(), "/api/requests/by-nic/000000000V").await;
    assert_eq!(status, 200);
    assert!(body.as_array().unwrap().is_empty());

    let (status, _) = get(app, "/api/requests/by-nic/%20%20").await;
    assert_eq!(status, 400);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_requests_filters_and_paginates(pool: PgPool) {
    let statuses = [
        RequestStatus::Pending,
        RequestStatus::PartiallyFulfilled,
        RequestStatus::Fulfilled,
        RequestStatus::Pending,
        RequestStatus::Fulfilled,
    ];
    for (i, status) in statuses.iter().enumerate() {
        let location = if i % 2 == 0 { "Colombo - Dehiwala" } else { "Kandy - Peradeniya" };
        insert_request(
            &pool,
            &stored_request(i as u128 + 1, "901234567V", location, *status, i as i64 * 1_000, vec![
                item("a", AidCategory::Food, 1, 0, &[]),
            ]),
        )
        .await;
    }
    let app = setup_test_app(pool);

    let (status, body) = get(app.clone(), "/api/requests?limit=2").await;
    assert_eq!(status, 200);
    assert_eq!(body["meta"]["total"], 5);
    assert_eq!(body["meta"]["has_more"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let (_, body) = get(app.clone(), "/api/requests?limit=2&page=3").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["meta"]["page"], 3);
    assert_eq!(body["meta"]["has_more"], false);

    let (_, body) = get(app.clone(), "/api/requests?active_only=true").await;
    assert_eq!(body["meta"]["total"], 3);

    let (_, body) = get(app.clone(), "/api/requests?status=Fulfilled").await;
    assert_eq!(body["meta"]["total"], 2);

    let (_, body) = get(app.clone(), "/api/requests?status=partially_fulfilled").await;
    assert_eq!(body["meta"]["total"], 1);

    let (_, body) = get(app.clone(), "/api/requests?location=Kandy%20-%20Peradeniya&active_only=1").await;
    assert_eq!(body["meta"]["total"], 2);

    let (status, _) = get(app, "/api/requests?status=Lost").await;
    assert_eq!(status, 400);
}
