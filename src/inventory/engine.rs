// src/inventory/engine.rs

use crate::domain::VehicleRecord;
use crate::inventory::facets::{derive_make_facet, derive_model_facet, derive_price_extent};
use crate::inventory::filter::{derive_available, filter};
use crate::inventory::paginate::{
    compute_pagination_window, paginate, total_pages, PageToken, DEFAULT_PAGE_SIZE,
};
use crate::inventory::sort::sort;
use crate::inventory::state::{PoaPlacement, PriceRange, QueryState, SortOption, ALL};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub page_size: usize,
    /// Price extent used when no vehicle has a filterable price.
    pub default_price_range: PriceRange,
    pub poa_placement: PoaPlacement,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            default_price_range: PriceRange::new(0.0, 1_000_000.0),
            poa_placement: PoaPlacement::High,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Facets<'a> {
    pub makes: &'a [String],
    pub models: &'a [String],
    pub price_extent: PriceRange,
}

/// Everything the inventory page needs for one render.
#[derive(Debug)]
pub struct InventoryView<'a> {
    pub available_count: usize,
    pub filtered_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub records: &'a [Arc<VehicleRecord>],
    pub facets: Facets<'a>,
    pub pagination_window: Vec<PageToken>,
    pub has_active_filters: bool,
    pub state: &'a QueryState,
}

/// Holds the inventory and the shopper's query, and keeps the derived views
/// (available set, facets, filtered and sorted results) current.
///
/// Each setter recomputes only the views downstream of what it changed:
/// sorting does not re-run the filters, paging touches nothing.
#[derive(Debug)]
pub struct InventoryQueryEngine {
    config: EngineConfig,
    state: QueryState,

    available: Vec<Arc<VehicleRecord>>,
    makes: Vec<String>,
    models: Vec<String>,
    price_extent: PriceRange,

    filtered: Vec<Arc<VehicleRecord>>,
    results: Vec<Arc<VehicleRecord>>,
}

impl InventoryQueryEngine {
    pub fn new(records: &[Arc<VehicleRecord>], config: EngineConfig) -> Self {
        let extent = config.default_price_range;
        let mut engine = Self {
            state: QueryState::new(extent),
            available: Vec::new(),
            makes: vec![ALL.to_string()],
            models: vec![ALL.to_string()],
            price_extent: extent,
            filtered: Vec::new(),
            results: Vec::new(),
            config,
        };
        engine.set_records(records);
        engine
    }

    /// Swaps in a new inventory. A make or model that no longer exists falls
    /// back to `"all"`, the price range resets to the new extent and the
    /// shopper returns to page 1.
    pub fn set_records(&mut self, records: &[Arc<VehicleRecord>]) {
        self.available = derive_available(records);
        self.makes = derive_make_facet(&self.available);
        self.price_extent = derive_price_extent(&self.available, self.config.default_price_range);

        if !self.makes.iter().any(|m| m == self.state.selected_make()) {
            self.state.select_make(ALL);
        }
        self.refresh_models();
        self.state.set_price_range(self.price_extent);
        self.refresh_filtered();
        self.state.set_page(1);

        debug!(
            total = records.len(),
            available = self.available.len(),
            makes = self.makes.len() - 1,
            "inventory loaded into query engine"
        );
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        if self.state.set_search_term(term) {
            self.refresh_filtered();
        }
    }

    pub fn select_make(&mut self, make: impl Into<String>) {
        if self.state.select_make(make) {
            self.refresh_models();
            self.refresh_filtered();
        }
    }

    /// A model the current make does not offer selects `"all"` instead.
    pub fn select_model(&mut self, model: impl Into<String>) {
        let mut model = model.into();
        if !self.models.contains(&model) {
            debug!(%model, make = self.state.selected_make(), "model not offered, using all");
            model = ALL.to_string();
        }
        if self.state.select_model(model) {
            self.refresh_filtered();
        }
    }

    pub fn set_price_range(&mut self, range: PriceRange) {
        if self.state.set_price_range(range) {
            self.refresh_filtered();
        }
    }

    pub fn set_sort(&mut self, option: SortOption) {
        if self.state.set_sort(option) {
            self.refresh_results();
        }
    }

    /// Clamped into `1..=total_pages`.
    pub fn set_page(&mut self, page: usize) {
        let last = self.total_pages();
        self.state.set_page(page.clamp(1, last));
    }

    /// Back to no search, all makes and models, and the full price extent.
    /// The sort order is kept.
    pub fn reset_filters(&mut self) {
        let mut changed = self.state.set_search_term("");
        changed |= self.state.select_make(ALL);
        changed |= self.state.select_model(ALL);
        changed |= self.state.set_price_range(self.price_extent);
        if changed {
            self.refresh_models();
            self.refresh_filtered();
        }
        self.state.set_page(1);
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn available(&self) -> &[Arc<VehicleRecord>] {
        &self.available
    }

    /// Filtered and sorted, all pages.
    pub fn results(&self) -> &[Arc<VehicleRecord>] {
        &self.results
    }

    pub fn makes(&self) -> &[String] {
        &self.makes
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    pub fn price_extent(&self) -> PriceRange {
        self.price_extent
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.results.len(), self.config.page_size)
    }

    pub fn current_page_records(&self) -> &[Arc<VehicleRecord>] {
        paginate(&self.results, self.state.current_page(), self.config.page_size).records
    }

    /// Sort order is not a filter.
    pub fn has_active_filters(&self) -> bool {
        !self.state.search_term().is_empty()
            || self.state.selected_make() != ALL
            || self.state.selected_model() != ALL
            || self.state.price_range() != self.price_extent
    }

    pub fn view(&self) -> InventoryView<'_> {
        let page = paginate(self.results(), self.state.current_page(), self.config.page_size);

        InventoryView {
            available_count: self.available().len(),
            filtered_count: self.results().len(),
            current_page: self.state.current_page(),
            total_pages: page.total_pages,
            page_size: self.config.page_size,
            records: page.records,
            facets: Facets {
                makes: self.makes(),
                models: self.models(),
                price_extent: self.price_extent(),
            },
            pagination_window: compute_pagination_window(
                self.state.current_page(),
                page.total_pages,
            ),
            has_active_filters: self.has_active_filters(),
            state: &self.state,
        }
    }

    fn refresh_models(&mut self) {
        self.models = derive_model_facet(&self.available, self.state.selected_make());
        if !self.models.iter().any(|m| m == self.state.selected_model()) {
            self.state.select_model(ALL);
        }
    }

    fn refresh_filtered(&mut self) {
        self.filtered = filter(&self.available, &self.state);
        self.refresh_results();
    }

    fn refresh_results(&mut self) {
        self.results = sort(
            &self.filtered,
            self.state.sort_option(),
            self.config.poa_placement,
        );
    }
}
