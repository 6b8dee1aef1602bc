use crate::domain::{VehicleRecord, VehicleStatus};
use serde::Serialize;

/// A vehicle as sent to clients: the CMS record plus the fields derived from it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSummary<'a> {
    #[serde(flatten)]
    pub record: &'a VehicleRecord,
    pub canonical_path: String,
    pub canonical_status: VehicleStatus,
}

impl<'a> VehicleSummary<'a> {
    pub fn new(record: &'a VehicleRecord) -> Self {
        Self {
            record,
            canonical_path: record.canonical_path(),
            canonical_status: record.canonical_status(),
        }
    }
}

/// Response body of `GET /{kind}/{id}`.
#[derive(Debug, Serialize)]
pub struct VehicleDetail<'a> {
    pub vehicle: VehicleSummary<'a>,
    pub available: bool,
}
