pub mod cache;

pub use cache::RedirectCache;

use serde::Deserialize;

/// An editor-managed redirect, e.g. an old listing URL to its replacement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectRule {
    pub source: String,
    pub destination: String,
    #[serde(default)]
    pub permanent: bool,
}

impl RedirectRule {
    /// Exact path match; a trailing slash on either side is ignored.
    pub fn matches(&self, path: &str) -> bool {
        normalize_path(&self.source) == normalize_path(path)
    }

    pub fn status(&self) -> u16 {
        if self.permanent {
            301
        } else {
            302
        }
    }
}

fn normalize_path(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}
