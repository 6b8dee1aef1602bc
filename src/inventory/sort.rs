// src/inventory/sort.rs

use crate::domain::VehicleRecord;
use crate::inventory::record;
use crate::inventory::state::{PoaPlacement, SortOption};
use std::cmp::Ordering;

// Missing year, price and mileage all compare as 0, so an undated car ranks
// as the oldest and an unpriced (non-POA) car as the cheapest.

fn year_key(rec: &VehicleRecord) -> i64 {
    rec.year.unwrap_or(0)
}

fn mileage_key(rec: &VehicleRecord) -> u64 {
    rec.mileage.unwrap_or(0)
}

fn price_key(rec: &VehicleRecord, poa: PoaPlacement) -> f64 {
    if rec.price_on_application {
        return match poa {
            PoaPlacement::High => f64::INFINITY,
            PoaPlacement::Low => f64::NEG_INFINITY,
        };
    }
    rec.price.unwrap_or(0.0)
}

fn compare(a: &VehicleRecord, b: &VehicleRecord, option: SortOption, poa: PoaPlacement) -> Ordering {
    match option {
        SortOption::Newest => year_key(b).cmp(&year_key(a)),
        SortOption::Oldest => year_key(a).cmp(&year_key(b)),
        SortOption::PriceHighLow => price_key(b, poa).total_cmp(&price_key(a, poa)),
        SortOption::PriceLowHigh => price_key(a, poa).total_cmp(&price_key(b, poa)),
        SortOption::MileageHighLow => mileage_key(b).cmp(&mileage_key(a)),
        SortOption::MileageLowHigh => mileage_key(a).cmp(&mileage_key(b)),
    }
}

/// Stable: vehicles with equal keys keep their input order.
pub fn sort<R: AsRef<VehicleRecord> + Clone>(
    filtered: &[R],
    option: SortOption,
    poa: PoaPlacement,
) -> Vec<R> {
    let mut out = filtered.to_vec();
    out.sort_by(|a, b| compare(record(a), record(b), option, poa));
    out
}
