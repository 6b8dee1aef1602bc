// src/domain/status.rs

use serde::Serialize;

/// Lifecycle of a vehicle on the forecourt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "&'static str")]
pub enum VehicleStatus {
    Available,
    Sold,
    Reserved,
    PendingCollection,
    ComingSoon,
}

impl VehicleStatus {
    /// Case-insensitive; accepts `pending collection` and `pending_collection` too.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase().replace([' ', '_'], "-");
        match normalized.as_str() {
            "available" => Some(VehicleStatus::Available),
            "sold" => Some(VehicleStatus::Sold),
            "reserved" => Some(VehicleStatus::Reserved),
            "pending-collection" => Some(VehicleStatus::PendingCollection),
            "coming-soon" => Some(VehicleStatus::ComingSoon),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::Sold => "sold",
            VehicleStatus::Reserved => "reserved",
            VehicleStatus::PendingCollection => "pending-collection",
            VehicleStatus::ComingSoon => "coming-soon",
        }
    }
}

impl From<VehicleStatus> for &'static str {
    fn from(status: VehicleStatus) -> Self {
        status.as_str()
    }
}

/// True when a raw status value spells "sold", ignoring case and padding.
pub fn is_sold_marker(raw: Option<&str>) -> bool {
    raw.map(|s| s.trim().eq_ignore_ascii_case("sold"))
        .unwrap_or(false)
}

/// Resolves the status a vehicle should be shown with when the top-level
/// field and `specifications.vehicle.status` disagree.
///
/// The order of checks is the precedence:
/// - "sold" in either location wins, so the catalog and the status badge agree
///   with the availability filter.
/// - otherwise the nested value wins when it parses.
/// - otherwise the top-level value, when it parses.
/// - a vehicle with no recognisable status is treated as available.
pub fn derive_canonical_status(top_level: Option<&str>, nested: Option<&str>) -> VehicleStatus {
    if is_sold_marker(top_level) || is_sold_marker(nested) {
        return VehicleStatus::Sold;
    }
    if let Some(status) = nested.and_then(VehicleStatus::parse) {
        return status;
    }
    if let Some(status) = top_level.and_then(VehicleStatus::parse) {
        return status;
    }
    VehicleStatus::Available
}
