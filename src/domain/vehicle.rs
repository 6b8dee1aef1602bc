// src/domain/vehicle.rs

use crate::domain::status::{derive_canonical_status, is_sold_marker, VehicleStatus};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// vehicle
//  ├── id, kind
//  ├── title, make, model, year, extendedInfo
//  ├── price, priceOnApplication, mileage
//  ├── status
//  ├── specifications
//  │    └── vehicle
//  │         ├── status
//  │         └── ... (carried through)
//  └── mainImage (opaque)

/// Which section of the site a vehicle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Modified,
    Luxury,
    #[default]
    Used,
}

impl VehicleKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "modified" => Some(VehicleKind::Modified),
            "luxury" => Some(VehicleKind::Luxury),
            "used" => Some(VehicleKind::Used),
            _ => None,
        }
    }

    /// First path segment of the vehicle's canonical URL.
    pub fn path_segment(self) -> &'static str {
        match self {
            VehicleKind::Modified => "modified",
            VehicleKind::Luxury => "luxury",
            VehicleKind::Used => "used",
        }
    }
}

/// A vehicle as delivered by the CMS.
///
/// Every field but `id` is optional, and a field holding the wrong JSON type
/// is read as absent instead of rejecting the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub id: String,

    #[serde(default, deserialize_with = "lenient_kind")]
    pub kind: VehicleKind,

    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64", skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub extended_info: Option<String>,

    #[serde(default, deserialize_with = "lenient_price", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub price_on_application: bool,
    #[serde(default, deserialize_with = "lenient_u64", skip_serializing_if = "Option::is_none")]
    pub mileage: Option<u64>,

    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_specifications", skip_serializing_if = "Option::is_none")]
    pub specifications: Option<Specifications>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_image: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Specifications {
    #[serde(default, deserialize_with = "lenient_vehicle_specs", skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<VehicleSpecs>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleSpecs {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl AsRef<VehicleRecord> for VehicleRecord {
    fn as_ref(&self) -> &VehicleRecord {
        self
    }
}

impl VehicleRecord {
    /// Minimal record, mostly useful for building fixtures.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: VehicleKind::default(),
            title: None,
            make: None,
            model: None,
            year: None,
            extended_info: None,
            price: None,
            price_on_application: false,
            mileage: None,
            status: None,
            specifications: None,
            main_image: None,
        }
    }

    pub fn nested_status(&self) -> Option<&str> {
        self.specifications
            .as_ref()
            .and_then(|s| s.vehicle.as_ref())
            .and_then(|v| v.status.as_deref())
    }

    /// Sold if either status location says so.
    pub fn is_sold(&self) -> bool {
        is_sold_marker(self.status.as_deref()) || is_sold_marker(self.nested_status())
    }

    pub fn canonical_status(&self) -> VehicleStatus {
        derive_canonical_status(self.status.as_deref(), self.nested_status())
    }

    pub fn canonical_path(&self) -> String {
        format!("/{}/{}", self.kind.path_segment(), self.id)
    }

    /// Price usable for range filtering and extents: not POA and numeric.
    pub fn filterable_price(&self) -> Option<f64> {
        if self.price_on_application {
            return None;
        }
        self.price.filter(|p| p.is_finite())
    }

    /// Lower-cased concatenation of the text fields the search box looks at.
    pub fn search_haystack(&self) -> String {
        [&self.title, &self.make, &self.model, &self.extended_info]
            .iter()
            .map(|field| field.as_deref().unwrap_or(""))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

fn lenient_string<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_kind<'de, D>(d: D) -> Result<VehicleKind, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(d)?
        .as_deref()
        .and_then(VehicleKind::parse)
        .unwrap_or_default())
}

fn lenient_bool<'de, D>(d: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(d)?, Value::Bool(true)))
}

fn lenient_i64<'de, D>(d: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        _ => None,
    })
}

fn lenient_u64<'de, D>(d: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.trunc() as u64)
        }),
        _ => None,
    })
}

fn lenient_price<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite() && *f >= 0.0),
        _ => None,
    })
}

fn lenient_specifications<'de, D>(d: D) -> Result<Option<Specifications>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(d)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_vehicle_specs<'de, D>(d: D) -> Result<Option<VehicleSpecs>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(d)?;
    Ok(serde_json::from_value(value).ok())
}
