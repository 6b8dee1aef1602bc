mod inventory_tests;
mod pages_tests;
mod vehicle_tests;
