//! Inventory query engine: availability, facets, filters, sorting and
//! pagination over the vehicle list.
//!
//! The free functions are pure and work on any slice of things that can be
//! viewed as a [`VehicleRecord`] (owned records, `&VehicleRecord`,
//! `Arc<VehicleRecord>`). [`InventoryQueryEngine`] chains them and caches
//! each stage.

pub mod engine;
pub mod facets;
pub mod filter;
pub mod paginate;
pub mod sort;
pub mod state;

#[cfg(test)]
pub(crate) mod fixtures;

use crate::domain::VehicleRecord;

pub use engine::{EngineConfig, InventoryQueryEngine, InventoryView};
pub use filter::derive_sold;
pub use paginate::PageToken;
pub use state::{PoaPlacement, PriceRange, SortOption};

pub(crate) fn record<R: AsRef<VehicleRecord>>(r: &R) -> &VehicleRecord {
    r.as_ref()
}
