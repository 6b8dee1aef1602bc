pub mod status;
pub mod vehicle;

pub use status::VehicleStatus;
pub use vehicle::{VehicleKind, VehicleRecord};
