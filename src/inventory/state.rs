// src/inventory/state.rs

use serde::Serialize;

/// Sentinel for "no make/model selected".
pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(into = "&'static str")]
pub enum SortOption {
    #[default]
    Newest,
    Oldest,
    PriceHighLow,
    PriceLowHigh,
    MileageHighLow,
    MileageLowHigh,
}

impl SortOption {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "newest" => Some(SortOption::Newest),
            "oldest" => Some(SortOption::Oldest),
            "price-high-low" => Some(SortOption::PriceHighLow),
            "price-low-high" => Some(SortOption::PriceLowHigh),
            "mileage-high-low" => Some(SortOption::MileageHighLow),
            "mileage-low-high" => Some(SortOption::MileageLowHigh),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOption::Newest => "newest",
            SortOption::Oldest => "oldest",
            SortOption::PriceHighLow => "price-high-low",
            SortOption::PriceLowHigh => "price-low-high",
            SortOption::MileageHighLow => "mileage-high-low",
            SortOption::MileageLowHigh => "mileage-low-high",
        }
    }
}

impl From<SortOption> for &'static str {
    fn from(option: SortOption) -> Self {
        option.as_str()
    }
}

/// Which end of a price sort "price on application" vehicles land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PoaPlacement {
    /// Treated as the most expensive: first on high-low, last on low-high.
    #[default]
    High,
    /// Treated as the cheapest: last on high-low, first on low-high.
    Low,
}

impl PoaPlacement {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "high" => Some(PoaPlacement::High),
            "low" => Some(PoaPlacement::Low),
            _ => None,
        }
    }
}

/// Inclusive price bounds. Serialized as `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "[f64; 2]")]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    /// Bounds given the wrong way round are swapped.
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

impl From<PriceRange> for [f64; 2] {
    fn from(r: PriceRange) -> Self {
        [r.min, r.max]
    }
}

/// What the shopper has asked for. Fields only change through the setters,
/// which keep the invariants:
/// - any filter or sort change sends the shopper back to page 1
/// - changing make clears the model
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    search_term: String,
    selected_make: String,
    selected_model: String,
    price_range: PriceRange,
    sort_option: SortOption,
    current_page: usize,
}

impl QueryState {
    pub fn new(price_range: PriceRange) -> Self {
        Self {
            search_term: String::new(),
            selected_make: ALL.to_string(),
            selected_model: ALL.to_string(),
            price_range,
            sort_option: SortOption::default(),
            current_page: 1,
        }
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn selected_make(&self) -> &str {
        &self.selected_make
    }

    pub fn selected_model(&self) -> &str {
        &self.selected_model
    }

    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    pub fn sort_option(&self) -> SortOption {
        self.sort_option
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns whether the state changed.
    pub fn set_search_term(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if term == self.search_term {
            return false;
        }
        self.search_term = term;
        self.current_page = 1;
        true
    }

    pub fn select_make(&mut self, make: impl Into<String>) -> bool {
        let make = make.into();
        if make == self.selected_make {
            return false;
        }
        self.selected_make = make;
        self.selected_model = ALL.to_string();
        self.current_page = 1;
        true
    }

    pub fn select_model(&mut self, model: impl Into<String>) -> bool {
        let model = model.into();
        if model == self.selected_model {
            return false;
        }
        self.selected_model = model;
        self.current_page = 1;
        true
    }

    pub fn set_price_range(&mut self, range: PriceRange) -> bool {
        if range == self.price_range {
            return false;
        }
        self.price_range = range;
        self.current_page = 1;
        true
    }

    pub fn set_sort(&mut self, option: SortOption) -> bool {
        if option == self.sort_option {
            return false;
        }
        self.sort_option = option;
        self.current_page = 1;
        true
    }

    /// Not clamped against the page count; pages start at 1.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }
}
