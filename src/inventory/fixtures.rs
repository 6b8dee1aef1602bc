// Shared builders for inventory tests.

use crate::domain::VehicleRecord;

pub fn car(id: &str, make: &str, model: &str, year: i64) -> VehicleRecord {
    let mut rec = VehicleRecord::new(id);
    rec.title = Some(format!("{year} {make} {model}"));
    rec.make = Some(make.to_string());
    rec.model = Some(model.to_string());
    rec.year = Some(year);
    rec
}

pub fn priced(mut rec: VehicleRecord, price: f64) -> VehicleRecord {
    rec.price = Some(price);
    rec
}

pub fn poa(mut rec: VehicleRecord) -> VehicleRecord {
    rec.price = None;
    rec.price_on_application = true;
    rec
}

pub fn with_mileage(mut rec: VehicleRecord, miles: u64) -> VehicleRecord {
    rec.mileage = Some(miles);
    rec
}

pub fn sold(mut rec: VehicleRecord) -> VehicleRecord {
    rec.status = Some("Sold".to_string());
    rec
}

pub fn ids<R: AsRef<VehicleRecord>>(records: &[R]) -> Vec<&str> {
    records.iter().map(|r| r.as_ref().id.as_str()).collect()
}

/// 12 vehicles: 3 sold, then 4 BMWs and 5 Audis still for sale.
pub fn forecourt() -> Vec<VehicleRecord> {
    vec![
        sold(priced(car("s1", "BMW", "M3", 2018), 30_000.0)),
        priced(car("b1", "BMW", "M3", 2020), 42_000.0),
        priced(car("a1", "Audi", "RS3", 2021), 45_500.0),
        sold(priced(car("s2", "Porsche", "911", 2015), 60_000.0)),
        priced(car("b2", "BMW", "M4", 2022), 61_250.0),
        priced(car("a2", "Audi", "RS6", 2019), 58_000.0),
        priced(car("a3", "Audi", "A3", 2017), 12_995.0),
        poa(car("b3", "BMW", "M5", 2023)),
        sold(priced(car("s3", "Audi", "R8", 2016), 80_000.0)),
        priced(car("a4", "Audi", "RS3", 2020), 39_000.0),
        priced(car("b4", "BMW", "X5", 2016), 18_750.0),
        priced(car("a5", "Audi", "Q7", 2018), 27_400.0),
    ]
}
