// src/tests/router_tests/vehicle_tests.rs
use crate::domain::VehicleKind;
use crate::errors::ServerError;
use crate::inventory::fixtures::{car, forecourt, priced};
use crate::router::handle;
use crate::tests::utils::{body_json, get, location, test_state, MemoryContentSource};

#[test]
fn detail_returns_vehicle() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(MemoryContentSource::default().with_inventory(forecourt()));
    let resp = handle(get("/used/b1"), &state)?;
    assert_eq!(resp.status(), 200);

    let body = body_json(resp);
    assert_eq!(body["vehicle"]["id"], "b1");
    assert_eq!(body["vehicle"]["make"], "BMW");
    assert_eq!(body["vehicle"]["price"], 42000.0);
    assert_eq!(body["vehicle"]["canonicalPath"], "/used/b1");
    assert_eq!(body["available"], true);
    Ok(())
}

#[test]
fn sold_vehicle_still_has_a_page() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(MemoryContentSource::default().with_inventory(forecourt()));
    let body = body_json(handle(get("/used/s1"), &state)?);
    assert_eq!(body["available"], false);
    assert_eq!(body["vehicle"]["canonicalStatus"], "sold");
    Ok(())
}

#[test]
fn wrong_kind_redirects_to_canonical_path() -> Result<(), Box<dyn std::error::Error>> {
    let mut gt = priced(car("gt", "Porsche", "911 GT3", 2022), 150_000.0);
    gt.kind = VehicleKind::Luxury;
    let state = test_state(MemoryContentSource::default().with_inventory(vec![gt]));

    let resp = handle(get("/used/gt"), &state)?;
    assert_eq!(resp.status(), 301);
    assert_eq!(location(&resp), "/luxury/gt");

    let resp = handle(get("/luxury/gt"), &state)?;
    assert_eq!(resp.status(), 200);
    Ok(())
}

#[test]
fn unknown_vehicle_is_not_found() {
    let state = test_state(MemoryContentSource::default().with_inventory(forecourt()));
    assert!(matches!(handle(get("/used/zz"), &state), Err(ServerError::NotFound)));
    assert!(matches!(handle(get("/boats/b1"), &state), Err(ServerError::NotFound)));
}
