// src/app.rs

use crate::config::AppConfig;
use crate::content::ContentSource;
use crate::domain::VehicleRecord;
use crate::errors::{ContentError, ServerError};
use crate::inventory::InventoryQueryEngine;
use crate::redirects::{RedirectCache, RedirectRule};
use chrono::Utc;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{info, warn};

/// Shared by every worker. The inventory is read-only after start-up; only
/// the redirect cache is mutated.
pub struct AppState {
    pub config: AppConfig,
    pub inventory: Vec<Arc<VehicleRecord>>,
    pub content: Box<dyn ContentSource>,
    redirects: Mutex<RedirectCache>,
}

impl AppState {
    pub fn load(config: AppConfig, content: Box<dyn ContentSource>) -> Result<Self, ContentError> {
        let inventory: Vec<Arc<VehicleRecord>> = content
            .fetch_inventory()?
            .into_iter()
            .map(Arc::new)
            .collect();
        info!(vehicles = inventory.len(), "inventory loaded");

        let redirects = Mutex::new(RedirectCache::new(config.redirect_ttl));
        Ok(Self {
            config,
            inventory,
            content,
            redirects,
        })
    }

    /// A fresh engine over the shared inventory.
    pub fn engine(&self) -> InventoryQueryEngine {
        InventoryQueryEngine::new(&self.inventory, self.config.engine.clone())
    }

    pub fn find_vehicle(&self, id: &str) -> Option<&Arc<VehicleRecord>> {
        self.inventory.iter().find(|v| v.id == id)
    }

    /// The content source is read with the cache unlocked, so workers are
    /// not held up by a slow refresh; they match against the previous rules
    /// in the meantime.
    pub fn find_redirect(&self, path: &str) -> Result<Option<RedirectRule>, ServerError> {
        if self.lock_redirects()?.claim_refresh(Utc::now()) {
            match self.content.fetch_redirects() {
                Ok(rules) => self.lock_redirects()?.replace(rules),
                Err(e) => warn!(error = %e, "redirect refresh failed, keeping previous rules"),
            }
        }
        Ok(self.lock_redirects()?.lookup(path))
    }

    fn lock_redirects(&self) -> Result<MutexGuard<'_, RedirectCache>, ServerError> {
        self.redirects
            .lock()
            .map_err(|_| ServerError::Internal("redirect cache lock poisoned".into()))
    }
}
