// src/tests/router_tests/inventory_tests.rs
use crate::errors::ServerError;
use crate::inventory::fixtures::forecourt;
use crate::router::handle;
use crate::tests::utils::{body_json, get, test_state, MemoryContentSource};
use serde_json::{json, Value};

fn forecourt_state() -> crate::app::AppState {
    test_state(MemoryContentSource::default().with_inventory(forecourt()))
}

fn ids(body: &Value) -> Vec<&str> {
    body["records"]
        .as_array()
        .map(|records| records.iter().filter_map(|r| r["id"].as_str()).collect())
        .unwrap_or_default()
}

#[test]
fn health_reports_vehicle_count() -> Result<(), Box<dyn std::error::Error>> {
    let state = forecourt_state();
    let resp = handle(get("/health"), &state)?;
    assert_eq!(resp.status(), 200);
    assert_eq!(body_json(resp), json!({ "status": "ok", "vehicles": 12 }));
    Ok(())
}

#[test]
fn default_view_lists_available_vehicles_newest_first() -> Result<(), Box<dyn std::error::Error>> {
    let state = forecourt_state();
    let resp = handle(get("/inventory"), &state)?;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").and_then(|v| v.to_str().ok()),
        Some("application/json")
    );

    let body = body_json(resp);
    assert_eq!(body["availableCount"], 9);
    assert_eq!(body["filteredCount"], 9);
    assert_eq!(body["totalPages"], 1);
    assert_eq!(body["paginationWindow"], json!([1]));
    assert_eq!(body["hasActiveFilters"], false);
    assert_eq!(body["facets"]["makes"], json!(["all", "Audi", "BMW"]));
    assert_eq!(body["facets"]["priceExtent"], json!([12000.0, 62000.0]));
    assert_eq!(body["query"]["sort"], "newest");
    assert_eq!(
        ids(&body),
        ["b3", "b2", "a1", "b1", "a4", "a2", "a5", "a3", "b4"]
    );
    assert_eq!(body["records"][0]["canonicalPath"], "/used/b3");
    Ok(())
}

#[test]
fn make_filter_narrows_results_and_models() -> Result<(), Box<dyn std::error::Error>> {
    let state = forecourt_state();
    let body = body_json(handle(get("/inventory?make=BMW"), &state)?);

    assert_eq!(body["filteredCount"], 4);
    assert_eq!(body["facets"]["models"], json!(["all", "M3", "M4", "M5", "X5"]));
    assert_eq!(body["hasActiveFilters"], true);
    assert_eq!(ids(&body), ["b3", "b2", "b1", "b4"]);
    Ok(())
}

#[test]
fn price_sort_places_poa_last_on_low_to_high() -> Result<(), Box<dyn std::error::Error>> {
    let state = forecourt_state();
    let body = body_json(handle(get("/inventory?make=BMW&sort=price-low-high"), &state)?);
    assert_eq!(ids(&body), ["b4", "b1", "b2", "b3"]);
    Ok(())
}

#[test]
fn price_range_keeps_poa_vehicles() -> Result<(), Box<dyn std::error::Error>> {
    let state = forecourt_state();
    let body = body_json(handle(get("/inventory?maxPrice=30000"), &state)?);
    assert_eq!(ids(&body), ["b3", "a5", "a3", "b4"]);
    assert_eq!(body["query"]["priceRange"], json!([12000.0, 30000.0]));
    Ok(())
}

#[test]
fn single_price_bound_outside_extent_keeps_poa() -> Result<(), Box<dyn std::error::Error>> {
    let state = forecourt_state();

    let body = body_json(handle(get("/inventory?maxPrice=10000"), &state)?);
    assert_eq!(ids(&body), ["b3"]);
    assert_eq!(body["query"]["priceRange"], json!([10000.0, 10000.0]));

    let body = body_json(handle(get("/inventory?minPrice=70000"), &state)?);
    assert_eq!(ids(&body), ["b3"]);

    let body = body_json(handle(get("/inventory?minPrice=40000"), &state)?);
    assert_eq!(ids(&body), ["b3", "b2", "a1", "b1", "a2"]);
    Ok(())
}

#[test]
fn search_is_case_insensitive() -> Result<(), Box<dyn std::error::Error>> {
    let state = forecourt_state();
    let body = body_json(handle(get("/inventory?q=rs"), &state)?);
    assert_eq!(ids(&body), ["a1", "a4", "a2"]);
    assert_eq!(body["query"]["searchTerm"], "rs");
    Ok(())
}

#[test]
fn model_outside_make_falls_back_to_all() -> Result<(), Box<dyn std::error::Error>> {
    let state = forecourt_state();
    let body = body_json(handle(get("/inventory?make=BMW&model=A3"), &state)?);
    assert_eq!(body["query"]["model"], "all");
    assert_eq!(body["filteredCount"], 4);
    Ok(())
}

#[test]
fn out_of_range_page_is_clamped() -> Result<(), Box<dyn std::error::Error>> {
    let state = forecourt_state();
    let body = body_json(handle(get("/inventory?page=7"), &state)?);
    assert_eq!(body["currentPage"], 1);
    assert_eq!(ids(&body).len(), 9);
    Ok(())
}

#[test]
fn bad_parameters_are_rejected() {
    let state = forecourt_state();
    for uri in [
        "/inventory?sort=cheapest",
        "/inventory?page=two",
        "/inventory?minPrice=lots",
        "/inventory?minPrice=50000&maxPrice=10000",
    ] {
        assert!(
            matches!(handle(get(uri), &state), Err(ServerError::BadRequest(_))),
            "{uri} should be a bad request"
        );
    }
}

#[test]
fn sold_lists_only_sold_vehicles() -> Result<(), Box<dyn std::error::Error>> {
    let state = forecourt_state();
    let body = body_json(handle(get("/inventory/sold"), &state)?);
    assert_eq!(body["count"], 3);
    assert_eq!(ids(&body), ["s1", "s3", "s2"]);
    assert_eq!(body["records"][0]["canonicalStatus"], "sold");
    Ok(())
}

#[test]
fn empty_inventory_uses_default_extent() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(MemoryContentSource::default());
    let body = body_json(handle(get("/inventory"), &state)?);
    assert_eq!(body["availableCount"], 0);
    assert_eq!(body["totalPages"], 1);
    assert_eq!(body["records"], json!([]));
    assert_eq!(body["facets"]["priceExtent"], json!([0.0, 1000000.0]));
    Ok(())
}

#[test]
fn unknown_route_is_not_found() {
    let state = forecourt_state();
    assert!(matches!(handle(get("/nowhere"), &state), Err(ServerError::NotFound)));
    assert!(matches!(handle(get("/inventory/sold/extra"), &state), Err(ServerError::NotFound)));
}
