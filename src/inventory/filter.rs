// src/inventory/filter.rs

use crate::domain::VehicleRecord;
use crate::inventory::record;
use crate::inventory::state::{QueryState, ALL};

/// Everything still for sale. Sold vehicles belong to the "recently sold" view.
pub fn derive_available<R: AsRef<VehicleRecord> + Clone>(records: &[R]) -> Vec<R> {
    records
        .iter()
        .filter(|r| !record(*r).is_sold())
        .cloned()
        .collect()
}

pub fn derive_sold<R: AsRef<VehicleRecord> + Clone>(records: &[R]) -> Vec<R> {
    records
        .iter()
        .filter(|r| record(*r).is_sold())
        .cloned()
        .collect()
}

/// Applies search, make, model and price filters. All must pass;
/// input order is kept.
pub fn filter<R: AsRef<VehicleRecord> + Clone>(available: &[R], state: &QueryState) -> Vec<R> {
    let needle = state.search_term().to_lowercase();

    available
        .iter()
        .filter(|r| {
            let rec = record(*r);
            matches_search(rec, &needle)
                && matches_exact(rec.make.as_deref(), state.selected_make())
                && matches_exact(rec.model.as_deref(), state.selected_model())
                && matches_price(rec, state)
        })
        .cloned()
        .collect()
}

fn matches_search(rec: &VehicleRecord, needle: &str) -> bool {
    needle.is_empty() || rec.search_haystack().contains(needle)
}

fn matches_exact(value: Option<&str>, selected: &str) -> bool {
    selected == ALL || value == Some(selected)
}

// POA always passes; a vehicle without a numeric price never does.
fn matches_price(rec: &VehicleRecord, state: &QueryState) -> bool {
    if rec.price_on_application {
        return true;
    }
    match rec.price {
        Some(price) if price.is_finite() => state.price_range().contains(price),
        _ => false,
    }
}
