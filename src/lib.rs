//! Dealership inventory service.
//!
//! The [`inventory`] module is the query engine (availability, facets,
//! filters, sorting, pagination). [`content`] resolves service pages by deep
//! merging CMS overrides over built-in defaults, and [`redirects`] holds the
//! editor-managed redirect rules. The rest wires these into an astra server.

pub mod app;
pub mod config;
pub mod content;
pub mod domain;
pub mod errors;
pub mod inventory;
pub mod logging;
pub mod redirects;
pub mod responses;
pub mod router;
pub mod views;

#[cfg(test)]
mod tests;

pub use app::AppState;
pub use config::AppConfig;
