// src/content/pages.rs

use crate::content::merge::deep_merge;
use crate::content::source::ContentSource;
use crate::errors::ContentError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

/// Service pages whose copy is managed in the CMS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlug {
    Finance,
    Detailing,
    Transportation,
}

impl PageSlug {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "finance" => Some(PageSlug::Finance),
            "detailing" => Some(PageSlug::Detailing),
            "transportation" => Some(PageSlug::Transportation),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PageSlug::Finance => "finance",
            PageSlug::Detailing => "detailing",
            PageSlug::Transportation => "transportation",
        }
    }
}

/// Icons the page copy may name. Unknown names map to [`Icon::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Icon {
    Car,
    CreditCard,
    Percent,
    Shield,
    Sparkles,
    Droplets,
    Truck,
    MapPin,
    Clock,
    Unknown,
}

// name, asset
const ICONS: &[(Icon, &str, &str)] = &[
    (Icon::Car, "car", "/static/icons/car.svg"),
    (Icon::CreditCard, "credit-card", "/static/icons/credit-card.svg"),
    (Icon::Percent, "percent", "/static/icons/percent.svg"),
    (Icon::Shield, "shield", "/static/icons/shield.svg"),
    (Icon::Sparkles, "sparkles", "/static/icons/sparkles.svg"),
    (Icon::Droplets, "droplets", "/static/icons/droplets.svg"),
    (Icon::Truck, "truck", "/static/icons/truck.svg"),
    (Icon::MapPin, "map-pin", "/static/icons/map-pin.svg"),
    (Icon::Clock, "clock", "/static/icons/clock.svg"),
    (Icon::Unknown, "unknown", "/static/icons/circle.svg"),
];

impl Icon {
    fn entry(self) -> &'static (Icon, &'static str, &'static str) {
        ICONS
            .iter()
            .find(|(icon, _, _)| *icon == self)
            .unwrap_or(&ICONS[ICONS.len() - 1])
    }

    pub fn name(self) -> &'static str {
        self.entry().1
    }

    pub fn asset_path(self) -> &'static str {
        self.entry().2
    }
}

impl From<String> for Icon {
    fn from(name: String) -> Self {
        let name = name.trim().to_lowercase().replace(['_', ' '], "-");
        ICONS
            .iter()
            .find(|(_, n, _)| *n == name)
            .map(|(icon, _, _)| *icon)
            .unwrap_or(Icon::Unknown)
    }
}

impl From<Icon> for &'static str {
    fn from(icon: Icon) -> Self {
        icon.name()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub icon: Icon,
    /// Filled from the icon lookup table; never read from content.
    #[serde(skip_deserializing)]
    pub icon_asset: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToAction {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    pub meta_title: String,
    #[serde(default)]
    pub meta_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePage {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub intro: Option<String>,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub cta: Option<CallToAction>,
    #[serde(default)]
    pub seo: Option<Seo>,
}

/// Built-in copy shown when the CMS has nothing (or only part) for a page.
pub fn default_content(slug: PageSlug) -> Value {
    match slug {
        PageSlug::Finance => json!({
            "slug": "finance",
            "title": "Vehicle Finance",
            "subtitle": "Flexible finance on every car we sell",
            "intro": "We work with a panel of lenders to find a plan that suits you.",
            "features": [
                { "icon": "percent", "title": "Competitive rates", "description": "Quotes from several lenders, side by side." },
                { "icon": "credit-card", "title": "PCP and HP", "description": "Choose lower monthly payments or outright ownership." },
                { "icon": "clock", "title": "Fast decisions", "description": "Most applications are answered the same day." }
            ],
            "cta": { "label": "Apply for finance", "href": "/finance/apply" },
            "seo": { "metaTitle": "Car Finance", "metaDescription": "Flexible car finance options." }
        }),
        PageSlug::Detailing => json!({
            "slug": "detailing",
            "title": "Detailing",
            "subtitle": "Showroom finish, inside and out",
            "intro": "Paint correction, ceramic coating and interior valeting.",
            "features": [
                { "icon": "sparkles", "title": "Paint correction", "description": "Swirls and light scratches removed by machine polish." },
                { "icon": "shield", "title": "Ceramic coating", "description": "Long-lasting protection with a deep gloss." },
                { "icon": "droplets", "title": "Interior valet", "description": "Deep clean of upholstery, carpets and trim." }
            ],
            "cta": { "label": "Book a detail", "href": "/contact?service=detailing" },
            "seo": { "metaTitle": "Car Detailing", "metaDescription": "Professional detailing services." }
        }),
        PageSlug::Transportation => json!({
            "slug": "transportation",
            "title": "Vehicle Transportation",
            "subtitle": "Enclosed and open transport, nationwide",
            "intro": "Fully insured delivery to your door.",
            "features": [
                { "icon": "truck", "title": "Enclosed transport", "description": "Ideal for prestige and modified vehicles." },
                { "icon": "map-pin", "title": "Door to door", "description": "Collection and delivery at a time that suits you." },
                { "icon": "shield", "title": "Fully insured", "description": "Goods-in-transit cover on every journey." }
            ],
            "cta": { "label": "Get a quote", "href": "/contact?service=transportation" },
            "seo": { "metaTitle": "Vehicle Transportation", "metaDescription": "Insured vehicle transport." }
        }),
    }
}

/// CMS copy merged over the defaults, then checked against the page shape.
pub fn resolve_page(source: &dyn ContentSource, slug: PageSlug) -> Result<ServicePage, ContentError> {
    let defaults = default_content(slug);
    let merged = match source.fetch_page(slug)? {
        Some(overrides) => deep_merge(&defaults, &overrides),
        None => {
            debug!(page = slug.as_str(), "no CMS content, using defaults");
            defaults
        }
    };

    let mut page: ServicePage = serde_json::from_value(merged).map_err(|e| {
        ContentError::UnexpectedShape(format!("page {}: {e}", slug.as_str()))
    })?;
    for feature in &mut page.features {
        feature.icon_asset = feature.icon.asset_path().to_string();
    }
    Ok(page)
}
