use crate::app::AppState;
use crate::config::AppConfig;
use crate::content::{ContentSource, PageSlug};
use crate::domain::VehicleRecord;
use crate::errors::ContentError;
use crate::redirects::RedirectRule;
use astra::{Body, Request, Response};
use http::Method;
use serde_json::Value;
use std::collections::HashMap;
use std::io::Read;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory content for tests. Redirects can be swapped or made to fail
/// after construction, and fetches are counted.
#[derive(Default)]
pub struct MemoryContentSource {
    inventory: Vec<VehicleRecord>,
    pages: HashMap<&'static str, Value>,
    redirects: Mutex<Vec<RedirectRule>>,
    fail_redirects: AtomicBool,
    redirect_fetches: AtomicUsize,
}

impl MemoryContentSource {
    pub fn with_inventory(mut self, inventory: Vec<VehicleRecord>) -> Self {
        self.inventory = inventory;
        self
    }

    pub fn with_page(mut self, slug: PageSlug, overrides: Value) -> Self {
        self.pages.insert(slug.as_str(), overrides);
        self
    }

    pub fn with_redirects(self, rules: Vec<RedirectRule>) -> Self {
        self.set_redirects(rules);
        self
    }

    pub fn set_redirects(&self, rules: Vec<RedirectRule>) {
        *self.redirects.lock().unwrap() = rules;
    }

    pub fn fail_redirects(&self, fail: bool) {
        self.fail_redirects.store(fail, Ordering::SeqCst);
    }

    pub fn redirect_fetches(&self) -> usize {
        self.redirect_fetches.load(Ordering::SeqCst)
    }
}

impl ContentSource for MemoryContentSource {
    fn fetch_inventory(&self) -> Result<Vec<VehicleRecord>, ContentError> {
        Ok(self.inventory.clone())
    }

    fn fetch_page(&self, slug: PageSlug) -> Result<Option<Value>, ContentError> {
        Ok(self.pages.get(slug.as_str()).cloned())
    }

    fn fetch_redirects(&self) -> Result<Vec<RedirectRule>, ContentError> {
        self.redirect_fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_redirects.load(Ordering::SeqCst) {
            return Err(ContentError::UnexpectedShape("redirects unavailable".into()));
        }
        Ok(self.redirects.lock().unwrap().clone())
    }
}

/// App state over in-memory content with default config.
pub fn test_state(content: MemoryContentSource) -> AppState {
    AppState::load(AppConfig::default(), Box::new(content))
        .unwrap_or_else(|e| panic!("test state failed to load: {e}"))
}

pub fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn body_json(resp: Response) -> Value {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    serde_json::from_str(&body).unwrap_or_else(|e| panic!("body is not JSON ({e}): {body}"))
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}
