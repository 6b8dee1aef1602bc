// src/redirects/cache.rs

use crate::content::ContentSource;
use crate::errors::ContentError;
use crate::redirects::RedirectRule;
use chrono::{DateTime, Duration, Utc};
use tracing::{info, warn};

/// Redirect rules with the time they were fetched.
///
/// The cache is handed to whoever needs it; refreshing is explicit and takes
/// the content source and the current time as arguments.
#[derive(Debug)]
pub struct RedirectCache {
    value: Vec<RedirectRule>,
    last_fetched_at: Option<DateTime<Utc>>,
    ttl: Duration,
}

impl RedirectCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            value: Vec::new(),
            last_fetched_at: None,
            ttl,
        }
    }

    pub fn last_fetched_at(&self) -> Option<DateTime<Utc>> {
        self.last_fetched_at
    }

    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        match self.last_fetched_at {
            None => true,
            Some(at) => now - at >= self.ttl,
        }
    }

    /// Marks a refresh as started when the rules are stale. Only the caller
    /// that gets `true` fetches; everyone else keeps using the current rules
    /// until [`RedirectCache::replace`] is called.
    pub fn claim_refresh(&mut self, now: DateTime<Utc>) -> bool {
        if !self.is_stale(now) {
            return false;
        }
        self.last_fetched_at = Some(now);
        true
    }

    pub fn replace(&mut self, rules: Vec<RedirectRule>) {
        info!(count = rules.len(), "redirect rules refreshed");
        self.value = rules;
    }

    /// Fetches the rules again. The fetch time is recorded even on failure,
    /// and the previous rules are kept, so a broken source is retried once
    /// per TTL rather than on every request.
    pub fn refresh(
        &mut self,
        source: &dyn ContentSource,
        now: DateTime<Utc>,
    ) -> Result<(), ContentError> {
        self.last_fetched_at = Some(now);
        let rules = source.fetch_redirects()?;
        self.replace(rules);
        Ok(())
    }

    /// Current rules, refreshed first when stale.
    pub fn rules(&mut self, source: &dyn ContentSource, now: DateTime<Utc>) -> &[RedirectRule] {
        if self.is_stale(now) {
            if let Err(e) = self.refresh(source, now) {
                warn!(error = %e, stale = self.value.len(), "redirect refresh failed, keeping previous rules");
            }
        }
        &self.value
    }

    /// Match against the current rules without refreshing.
    pub fn lookup(&self, path: &str) -> Option<RedirectRule> {
        self.value.iter().find(|rule| rule.matches(path)).cloned()
    }

    pub fn find(
        &mut self,
        path: &str,
        source: &dyn ContentSource,
        now: DateTime<Utc>,
    ) -> Option<RedirectRule> {
        self.rules(source, now);
        self.lookup(path)
    }
}
