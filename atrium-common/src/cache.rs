//! Tagged TTL response cache
//!
//! In-process cache backing both the WordPress fetch layer and assembled page
//! view-models. Entries carry a TTL and an optional set of cache tags;
//! invalidation happens either by TTL expiry or by an explicit purge keyed by
//! tag or by page path. Purging an absent tag or path is a no-op, so
//! concurrent invalidation calls are idempotent.
//!
//! Key namespaces:
//! - CMS fetch responses are stored under their endpoint string;
//! - assembled page view-models under `page:{path}` (see [`page_key`]).

use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Default cache lifetime for fetched content, in seconds.
pub const DEFAULT_TTL_SECS: u64 = 3600;

struct CacheEntry {
    value: Value,
    expires_at: Instant,
    tags: HashSet<String>,
}

/// Cache key for an assembled page view-model.
pub fn page_key(path: &str) -> String {
    format!("page:{path}")
}

/// Shared response cache with tag-based invalidation.
#[derive(Default)]
pub struct ResponseCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a live (non-expired) entry. Expired entries read as misses and
    /// are dropped on the next insert or purge touching them.
    pub fn get(&self, key: &str) -> Option<Value> {
        let entries = self.entries.read().expect("cache lock poisoned");
        let entry = entries.get(key)?;
        if entry.expires_at <= Instant::now() {
            return None;
        }
        Some(entry.value.clone())
    }

    /// Store a value under `key` for `ttl`, labeled with `tags`.
    /// Overwrites any previous entry under the same key.
    pub fn insert(&self, key: &str, value: Value, ttl: Duration, tags: &[String]) {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + ttl,
            tags: tags.iter().cloned().collect(),
        };
        let mut entries = self.entries.write().expect("cache lock poisoned");
        entries.insert(key.to_string(), entry);
    }

    /// Remove every entry labeled with `tag`. Returns the number removed.
    pub fn purge_tag(&self, tag: &str) -> usize {
        let mut entries = self.entries.write().expect("cache lock poisoned");
        let before = entries.len();
        entries.retain(|_, entry| !entry.tags.contains(tag));
        before - entries.len()
    }

    /// Remove the cached page view-model for `path`. Returns the number
    /// removed (0 or 1).
    pub fn purge_path(&self, path: &str) -> usize {
        let mut entries = self.entries.write().expect("cache lock poisoned");
        match entries.remove(&page_key(path)) {
            Some(_) => 1,
            None => 0,
        }
    }

    /// Number of entries currently held, expired or not.
    pub fn len(&self) -> usize {
        self.entries.read().expect("cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
