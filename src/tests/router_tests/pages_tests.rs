// src/tests/router_tests/pages_tests.rs
use crate::content::PageSlug;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_json, get, test_state, MemoryContentSource};
use serde_json::json;

#[test]
fn page_without_cms_content_uses_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let state = test_state(MemoryContentSource::default());
    let resp = handle(get("/pages/finance"), &state)?;
    assert_eq!(resp.status(), 200);

    let body = body_json(resp);
    assert_eq!(body["slug"], "finance");
    assert_eq!(body["title"], "Vehicle Finance");
    assert_eq!(body["features"].as_array().map(Vec::len), Some(3));
    assert_eq!(body["features"][0]["icon"], "percent");
    Ok(())
}

#[test]
fn cms_overrides_are_merged_over_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let content = MemoryContentSource::default().with_page(
        PageSlug::Detailing,
        json!({
            "title": "Detailing Studio",
            "features": null,
            "seo": { "metaTitle": "Detailing Studio | Showroom" }
        }),
    );
    let state = test_state(content);
    let body = body_json(handle(get("/pages/detailing"), &state)?);

    assert_eq!(body["title"], "Detailing Studio");
    assert_eq!(body["subtitle"], "Showroom finish, inside and out");
    assert_eq!(body["features"].as_array().map(Vec::len), Some(3));
    assert_eq!(body["seo"]["metaTitle"], "Detailing Studio | Showroom");
    assert_eq!(body["seo"]["metaDescription"], "Professional detailing services.");
    Ok(())
}

#[test]
fn unknown_icon_gets_fallback_asset() -> Result<(), Box<dyn std::error::Error>> {
    let content = MemoryContentSource::default().with_page(
        PageSlug::Transportation,
        json!({ "features": [{ "icon": "rocket", "title": "Same-day delivery" }] }),
    );
    let state = test_state(content);
    let body = body_json(handle(get("/pages/transportation"), &state)?);

    assert_eq!(body["features"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["features"][0]["icon"], "unknown");
    assert_eq!(body["features"][0]["iconAsset"], "/static/icons/circle.svg");
    Ok(())
}

#[test]
fn unknown_page_is_not_found() {
    let state = test_state(MemoryContentSource::default());
    assert!(matches!(handle(get("/pages/valeting"), &state), Err(ServerError::NotFound)));
}
