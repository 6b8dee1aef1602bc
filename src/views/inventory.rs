use crate::inventory::engine::Facets;
use crate::inventory::{InventoryView, PageToken, PriceRange, SortOption};
use crate::views::vehicle::VehicleSummary;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryEcho<'a> {
    pub search_term: &'a str,
    pub make: &'a str,
    pub model: &'a str,
    pub price_range: PriceRange,
    pub sort: SortOption,
    pub page: usize,
}

/// Response body of `GET /inventory`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryPayload<'a> {
    pub available_count: usize,
    pub filtered_count: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub has_active_filters: bool,
    pub query: QueryEcho<'a>,
    pub facets: Facets<'a>,
    pub pagination_window: Vec<PageToken>,
    pub records: Vec<VehicleSummary<'a>>,
}

impl<'a> From<InventoryView<'a>> for InventoryPayload<'a> {
    fn from(view: InventoryView<'a>) -> Self {
        let state = view.state;
        Self {
            available_count: view.available_count,
            filtered_count: view.filtered_count,
            current_page: view.current_page,
            total_pages: view.total_pages,
            page_size: view.page_size,
            has_active_filters: view.has_active_filters,
            query: QueryEcho {
                search_term: state.search_term(),
                make: state.selected_make(),
                model: state.selected_model(),
                price_range: state.price_range(),
                sort: state.sort_option(),
                page: state.current_page(),
            },
            facets: view.facets,
            pagination_window: view.pagination_window,
            records: view
                .records
                .iter()
                .map(|r| VehicleSummary::new(r))
                .collect(),
        }
    }
}

/// Response body of `GET /inventory/sold`.
#[derive(Debug, Serialize)]
pub struct SoldPayload<'a> {
    pub count: usize,
    pub records: Vec<VehicleSummary<'a>>,
}
