//! WordPress fetch client
//!
//! Thin wrapper over reqwest that requests a resource from the CMS with a
//! declared cache lifetime and tag set. Any network error or non-2xx status
//! is logged and resolved to `None` — callers must treat `None` as
//! "unavailable" and degrade to empty collections or fallback content, never
//! crash a page render.

use crate::cache::{ResponseCache, DEFAULT_TTL_SECS};
use crate::wordpress::types::WpItem;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("atrium/", env!("CARGO_PKG_VERSION"));

/// Cache lifetime and tag set for one fetch.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub ttl_secs: u64,
    pub tags: Vec<String>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_TTL_SECS,
            tags: Vec::new(),
        }
    }
}

impl FetchOptions {
    /// Default TTL with the given cache tags.
    pub fn tagged(tags: &[&str]) -> Self {
        Self {
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Self::default()
        }
    }
}

/// HTTP client for the WordPress REST API.
pub struct WordPressClient {
    http: reqwest::Client,
    base_url: String,
    cache: Arc<ResponseCache>,
}

impl WordPressClient {
    pub fn new(base_url: &str, cache: Arc<ResponseCache>) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            // Builder only fails on TLS backend misconfiguration
            .unwrap_or_default();

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            cache,
        }
    }

    pub fn cache(&self) -> &Arc<ResponseCache> {
        &self.cache
    }

    /// GET `{base_url}{endpoint}` with caching.
    ///
    /// Within the TTL window, repeat requests are served from the cache until
    /// a purge removes the entry. Failures are logged and resolved to `None`;
    /// failed responses are never cached.
    pub async fn fetch_json(&self, endpoint: &str, opts: FetchOptions) -> Option<Value> {
        if let Some(cached) = self.cache.get(endpoint) {
            debug!(endpoint, "Serving WordPress response from cache");
            return Some(cached);
        }

        let url = format!("{}{}", self.base_url, endpoint);
        debug!(endpoint, url = %url, "Fetching from WordPress");

        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(endpoint, error = %e, "WordPress request failed");
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint, status = %status, "WordPress returned error status");
            return None;
        }

        let value: Value = match response.json().await {
            Ok(value) => value,
            Err(e) => {
                warn!(endpoint, error = %e, "WordPress response was not valid JSON");
                return None;
            }
        };

        self.cache.insert(
            endpoint,
            value.clone(),
            Duration::from_secs(opts.ttl_secs),
            &opts.tags,
        );
        Some(value)
    }

    /// Fetch a collection endpoint and decode its JSON array of items.
    /// Unavailable upstream or an unexpected shape resolves to an empty vec.
    pub async fn fetch_items(&self, endpoint: &str, opts: FetchOptions) -> Vec<WpItem> {
        let Some(value) = self.fetch_json(endpoint, opts).await else {
            return Vec::new();
        };

        match serde_json::from_value(value) {
            Ok(items) => items,
            Err(e) => {
                warn!(endpoint, error = %e, "Unexpected WordPress collection shape");
                Vec::new()
            }
        }
    }
}
