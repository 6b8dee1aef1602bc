// src/content/source.rs

use crate::content::pages::PageSlug;
use crate::domain::VehicleRecord;
use crate::errors::ContentError;
use crate::redirects::RedirectRule;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where CMS content comes from.
pub trait ContentSource: Send + Sync {
    /// Every vehicle, sold ones included.
    fn fetch_inventory(&self) -> Result<Vec<VehicleRecord>, ContentError>;

    /// Editor overrides for a service page, if any.
    fn fetch_page(&self, slug: PageSlug) -> Result<Option<Value>, ContentError>;

    fn fetch_redirects(&self) -> Result<Vec<RedirectRule>, ContentError>;
}

/// Content exported from the CMS as JSON files:
///
/// ```text
/// <root>/inventory.json        array of vehicles (or {"result": [...]})
/// <root>/pages/<slug>.json     page overrides
/// <root>/redirects.json        array of redirect rules
/// ```
#[derive(Debug, Clone)]
pub struct FileContentSource {
    root: PathBuf,
}

impl FileContentSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `Ok(None)` when the file does not exist.
    fn read_json(&self, path: &Path) -> Result<Option<Value>, ContentError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "content file not found");
                return Ok(None);
            }
            Err(source) => {
                return Err(ContentError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| ContentError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }
}

impl ContentSource for FileContentSource {
    fn fetch_inventory(&self) -> Result<Vec<VehicleRecord>, ContentError> {
        let path = self.root.join("inventory.json");
        let Some(doc) = self.read_json(&path)? else {
            warn!(path = %path.display(), "no inventory file, starting with zero vehicles");
            return Ok(Vec::new());
        };
        extract_vehicles(doc)
    }

    fn fetch_page(&self, slug: PageSlug) -> Result<Option<Value>, ContentError> {
        let path = self
            .root
            .join("pages")
            .join(format!("{}.json", slug.as_str()));
        self.read_json(&path)
    }

    fn fetch_redirects(&self) -> Result<Vec<RedirectRule>, ContentError> {
        let path = self.root.join("redirects.json");
        let Some(doc) = self.read_json(&path)? else {
            return Ok(Vec::new());
        };
        serde_json::from_value(doc).map_err(|source| ContentError::Parse { path, source })
    }
}

/// Accepts a bare array or a query-API style `{"result": [...]}` envelope.
/// Entries that are not vehicles (no `id`) are skipped with a warning.
pub fn extract_vehicles(doc: Value) -> Result<Vec<VehicleRecord>, ContentError> {
    let items = match doc {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("result") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(ContentError::UnexpectedShape(
                    "inventory object has no `result` array".to_string(),
                ))
            }
        },
        _ => {
            return Err(ContentError::UnexpectedShape(
                "inventory is not an array".to_string(),
            ))
        }
    };

    let total = items.len();
    let vehicles: Vec<VehicleRecord> = items
        .into_iter()
        .enumerate()
        .filter_map(|(i, item)| match serde_json::from_value(item) {
            Ok(vehicle) => Some(vehicle),
            Err(e) => {
                warn!(index = i, error = %e, "skipping malformed vehicle");
                None
            }
        })
        .collect();

    debug!(total, loaded = vehicles.len(), "inventory parsed");
    Ok(vehicles)
}
