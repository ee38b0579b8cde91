mod common;

use aidconnect::aidconnect_engine::{aggregate, apply_received, derive_status, set_received};
use aidconnect_models::{AidCategory, RequestStatus};
use common::{item, stored_request};

#[test]
fn test_empty_request_is_pending() {
    let request = stored_request(1, "901234567V", "Colombo - Dehiwala", RequestStatus::Pending, 0, vec![]);
    assert_eq!(derive_status(&request), RequestStatus::Pending);
}

#[test]
fn test_status_ignores_item_order() {
    let items = vec![
        item("a", AidCategory::Food, 10, 10, &[]),
        item("b", AidCategory::Water, 5, 0, &[]),
        item("c", AidCategory::Hygiene, 3, 2, &[]),
    ];
    let mut reversed = items.clone();
    reversed.reverse();

    let forward = stored_request(1, "n", "L", RequestStatus::Pending, 0, items);
    let backward = stored_request(1, "n", "L", RequestStatus::Pending, 0, reversed);
    assert_eq!(derive_status(&forward), derive_status(&backward));
}

#[test]
fn test_set_received_always_lands_in_range() {
    for needed in [0u32, 1, 7, 100] {
        for quantity in [i64::MIN, -1, 0, 1, 6, 7, 99, 100, 101, i64::MAX] {
            let mut target = item("a", AidCategory::Food, needed, 0, &[]);
            let stored = set_received(&mut target, quantity);
            assert!(stored <= needed, "{} > {} for input {}", stored, needed, quantity);
            assert_eq!(target.quantity_received, stored);
        }
    }
}

#[test]
fn test_single_item_extremes() {
    let mut request = stored_request(1, "n", "L", RequestStatus::Pending, 0, vec![
        item("a", AidCategory::Food, 8, 3, &[]),
    ]);

    let update = apply_received(&mut request, "a", 8, 10).unwrap();
    assert_eq!(update.status, RequestStatus::Fulfilled);

    let update = apply_received(&mut request, "a", 0, 20).unwrap();
    assert_eq!(update.status, RequestStatus::Pending);
    assert_eq!(request.updated_at, 20);
}

#[test]
fn test_scenario_a_partial_then_fulfilled() {
    let mut request = stored_request(1, "n", "L", RequestStatus::Pending, 0, vec![
        item("a", AidCategory::Food, 20, 5, &[]),
    ]);
    assert_eq!(derive_status(&request), RequestStatus::PartiallyFulfilled);

    let update = apply_received(&mut request, "a", 20, 1).unwrap();
    assert_eq!(update.quantity_received, 20);
    assert_eq!(update.status, RequestStatus::Fulfilled);
    assert_eq!(request.status, RequestStatus::Fulfilled);
}

#[test]
fn test_scenario_b_category_percentage() {
    let requests = vec![
        stored_request(1, "n", "Colombo - Dehiwala", RequestStatus::Fulfilled, 0, vec![
            item("a", AidCategory::Food, 10, 10, &[]),
        ]),
        stored_request(2, "n", "Colombo - Dehiwala", RequestStatus::Pending, 1, vec![
            item("b", AidCategory::Food, 10, 0, &[]),
        ]),
    ];

    let stats = aggregate(&requests, &[]);
    assert_eq!(stats.top_needed_items.len(), 1);
    assert_eq!(stats.top_needed_items[0].category, AidCategory::Food);
    assert_eq!(stats.top_needed_items[0].unfulfilled_percentage, 50);
    assert_eq!(stats.needs_by_location[0].unfulfilled_count, 10);
}

#[test]
fn test_scenario_c_fulfilled_request_contributes_no_keywords() {
    // Stored as Fulfilled with a short item; the filter follows the request status.
    let requests = vec![stored_request(1, "n", "L", RequestStatus::Fulfilled, 0, vec![
        item("a", AidCategory::Food, 10, 20, &["surplus"]),
        item("b", AidCategory::Food, 10, 0, &["rice"]),
    ])];

    let stats = aggregate(&requests, &[]);
    assert!(stats.keyword_stats.is_empty());
}

#[test]
fn test_scenario_d_urgent_regions_keep_encounter_order_on_ties() {
    let requests: Vec<_> = [("A", 5), ("B", 5), ("C", 3), ("D", 1)]
        .iter()
        .enumerate()
        .map(|(i, (location, remaining))| {
            stored_request(i as u128, "n", location, RequestStatus::Pending, i as i64, vec![
                item("x", AidCategory::Other, *remaining, 0, &[]),
            ])
        })
        .collect();

    let stats = aggregate(&requests, &[]);
    let urgent: Vec<_> = stats
        .top_urgent_regions
        .iter()
        .map(|l| l.location.as_str())
        .collect();
    assert_eq!(urgent, vec!["A", "B", "C"]);
}

#[test]
fn test_aggregate_is_repeatable() {
    let requests = vec![
        stored_request(1, "n", "Colombo - Dehiwala", RequestStatus::Pending, 0, vec![
            item("a", AidCategory::Food, 10, 2, &["rice", "grain"]),
            item("b", AidCategory::Water, 4, 1, &["water"]),
        ]),
        stored_request(2, "n", "Kandy - Peradeniya", RequestStatus::PartiallyFulfilled, 1, vec![
            item("c", AidCategory::Shelter, 2, 1, &["tent", "rice"]),
        ]),
    ];
    let ignored = vec!["grain".to_string()];

    assert_eq!(aggregate(&requests, &ignored), aggregate(&requests, &ignored));
}

#[test]
fn test_receiving_more_never_raises_percentages() {
    let mut requests = vec![stored_request(1, "n", "L", RequestStatus::Pending, 0, vec![
        item("a", AidCategory::Food, 10, 0, &[]),
        item("b", AidCategory::Food, 7, 0, &[]),
    ])];

    let mut previous = aggregate(&requests, &[]);
    for quantity in 1..=10 {
        apply_received(&mut requests[0], "a", quantity, quantity);
        let current = aggregate(&requests, &[]);
        assert!(
            current.top_needed_items[0].unfulfilled_percentage
                <= previous.top_needed_items[0].unfulfilled_percentage
        );
        assert!(
            current.location_stats[0].unfulfilled_percentage
                <= previous.location_stats[0].unfulfilled_percentage
        );
        previous = current;
    }
}

#[test]
fn test_ignored_keywords_never_reported() {
    let requests = vec![stored_request(1, "n", "L", RequestStatus::Pending, 0, vec![
        item("a", AidCategory::Food, 10, 0, &["Urgent", "urgent", "URGENT", "rice"]),
    ])];

    let stats = aggregate(&requests, &["uRgEnT".to_string()]);
    assert!(stats.keyword_stats.iter().all(|k| k.keyword != "urgent"));
    assert_eq!(stats.keyword_stats.len(), 1);
}
