pub mod inventory;
pub mod vehicle;

pub use inventory::{InventoryPayload, SoldPayload};
pub use vehicle::{VehicleDetail, VehicleSummary};
