use crate::app::AppState;
use crate::content::{resolve_page, PageSlug};
use crate::domain::VehicleKind;
use crate::errors::ServerError;
use crate::inventory::sort::sort;
use crate::inventory::{derive_sold, PriceRange, SortOption};
use crate::responses::{json_response, redirect_response, ResultResp};
use crate::views::{InventoryPayload, SoldPayload, VehicleDetail, VehicleSummary};
use astra::Request;
use serde_json::json;
use std::collections::HashMap;
use tracing::debug;

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let path = req.uri().path();

    if let Some(rule) = state.find_redirect(path)? {
        debug!(from = path, to = %rule.destination, status = rule.status(), "redirect rule matched");
        return redirect_response(&rule.destination, rule.status());
    }

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (req.method().as_str(), segments.as_slice()) {
        ("GET", ["health"]) => json_response(
            200,
            &json!({ "status": "ok", "vehicles": state.inventory.len() }),
        ),
        ("GET", ["inventory"]) => inventory(state, parse_query(&req)),
        ("GET", ["inventory", "sold"]) => sold(state),
        ("GET", ["pages", slug]) => service_page(state, slug),
        ("GET", [kind, id]) if VehicleKind::parse(kind).is_some() => vehicle_detail(state, path, id),
        _ => Err(ServerError::NotFound),
    }
}

fn inventory(state: &AppState, params: HashMap<String, String>) -> ResultResp {
    let query = InventoryQuery::from_params(&params)?;
    let mut engine = state.engine();

    // make before model: selecting a make clears the model
    if let Some(make) = &query.make {
        engine.select_make(make.as_str());
    }
    if let Some(model) = &query.model {
        engine.select_model(model.as_str());
    }
    if let Some(term) = &query.search {
        engine.set_search_term(term.as_str());
    }
    if let Some(range) = query.price_range(engine.price_extent())? {
        engine.set_price_range(range);
    }
    if let Some(option) = query.sort {
        engine.set_sort(option);
    }
    if let Some(page) = query.page {
        engine.set_page(page);
    }

    json_response(200, &InventoryPayload::from(engine.view()))
}

fn sold(state: &AppState) -> ResultResp {
    let sold = sort(
        &derive_sold(&state.inventory),
        SortOption::Newest,
        state.config.engine.poa_placement,
    );
    let payload = SoldPayload {
        count: sold.len(),
        records: sold.iter().map(|r| VehicleSummary::new(r)).collect(),
    };
    json_response(200, &payload)
}

fn service_page(state: &AppState, slug: &str) -> ResultResp {
    let slug = PageSlug::parse(slug).ok_or(ServerError::NotFound)?;
    let page = resolve_page(state.content.as_ref(), slug)?;
    json_response(200, &page)
}

fn vehicle_detail(state: &AppState, path: &str, id: &str) -> ResultResp {
    let vehicle = state.find_vehicle(id).ok_or(ServerError::NotFound)?;

    let canonical = vehicle.canonical_path();
    if canonical != path {
        return redirect_response(&canonical, 301);
    }

    // sold vehicles keep their page
    json_response(
        200,
        &VehicleDetail {
            vehicle: VehicleSummary::new(vehicle),
            available: !vehicle.is_sold(),
        },
    )
}

/// Inventory query-string parameters, validated but not yet applied.
#[derive(Debug, Default, PartialEq)]
pub struct InventoryQuery {
    pub search: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort: Option<SortOption>,
    pub page: Option<usize>,
}

impl InventoryQuery {
    /// Empty values count as absent.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ServerError> {
        let get = |key: &str| {
            params
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };

        let sort = get("sort")
            .map(|raw| {
                SortOption::parse(raw)
                    .ok_or_else(|| ServerError::BadRequest(format!("unknown sort `{raw}`")))
            })
            .transpose()?;

        let page = get("page")
            .map(|raw| {
                raw.parse::<usize>()
                    .map_err(|_| ServerError::BadRequest(format!("page `{raw}` is not a page number")))
            })
            .transpose()?;

        Ok(Self {
            search: get("q").map(str::to_string),
            make: get("make").map(str::to_string),
            model: get("model").map(str::to_string),
            min_price: get("minPrice").map(|raw| parse_price("minPrice", raw)).transpose()?,
            max_price: get("maxPrice").map(|raw| parse_price("maxPrice", raw)).transpose()?,
            sort,
            page,
        })
    }

    /// A bound that was not sent comes from the extent, moved past the one
    /// that was so the range never inverts. Only two explicit bounds can
    /// conflict.
    pub fn price_range(&self, extent: PriceRange) -> Result<Option<PriceRange>, ServerError> {
        let (min, max) = match (self.min_price, self.max_price) {
            (None, None) => return Ok(None),
            (Some(min), Some(max)) if min > max => {
                return Err(ServerError::BadRequest(format!(
                    "minPrice {min} is greater than maxPrice {max}"
                )))
            }
            (Some(min), Some(max)) => (min, max),
            (Some(min), None) => (min, extent.max.max(min)),
            (None, Some(max)) => (extent.min.min(max), max),
        };
        Ok(Some(PriceRange::new(min, max)))
    }
}

fn parse_price(name: &str, raw: &str) -> Result<f64, ServerError> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(ServerError::BadRequest(format!("{name} `{raw}` is not a price"))),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}
