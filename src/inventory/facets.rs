// src/inventory/facets.rs

use crate::domain::VehicleRecord;
use crate::inventory::record;
use crate::inventory::state::{PriceRange, ALL};
use std::collections::BTreeSet;

/// Price extents are widened to whole thousands for the slider.
const PRICE_STEP: f64 = 1000.0;

/// Sorted distinct non-empty values, with `"all"` in front.
fn facet<'a, I>(values: I) -> Vec<String>
where
    I: Iterator<Item = Option<&'a str>>,
{
    let distinct: BTreeSet<&str> = values
        .flatten()
        .filter(|v| !v.trim().is_empty())
        .collect();

    std::iter::once(ALL)
        .chain(distinct)
        .map(str::to_string)
        .collect()
}

pub fn derive_make_facet<R: AsRef<VehicleRecord>>(available: &[R]) -> Vec<String> {
    facet(available.iter().map(|r| record(r).make.as_deref()))
}

/// Models of the selected make, or of every make when `selected_make` is `"all"`.
pub fn derive_model_facet<R: AsRef<VehicleRecord>>(
    available: &[R],
    selected_make: &str,
) -> Vec<String> {
    facet(
        available
            .iter()
            .map(record)
            .filter(|r| selected_make == ALL || r.make.as_deref() == Some(selected_make))
            .map(|r| r.model.as_deref()),
    )
}

/// Observed price span rounded outward to the nearest thousand; POA and
/// unpriced vehicles do not count. Falls back to `default` when nothing is priced.
pub fn derive_price_extent<R: AsRef<VehicleRecord>>(
    available: &[R],
    default: PriceRange,
) -> PriceRange {
    let mut prices = available.iter().filter_map(|r| record(r).filterable_price());

    let Some(first) = prices.next() else {
        return default;
    };
    let (min, max) = prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));

    PriceRange::new(
        (min / PRICE_STEP).floor() * PRICE_STEP,
        (max / PRICE_STEP).ceil() * PRICE_STEP,
    )
}
