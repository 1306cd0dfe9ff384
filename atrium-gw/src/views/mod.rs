//! Per-route view-model assembly
//!
//! Each route module fetches the entities its page needs concurrently,
//! normalizes them, substitutes built-in defaults for missing page fields and
//! fallback datasets for empty collections, and produces the JSON view-model
//! handed to presentation. Assembled view-models are cached under
//! `page:{path}` until purged or expired.

pub mod about;
pub mod blog;
pub mod careers;
pub mod catalog;
pub mod contact;
pub mod home;

use crate::AppState;
use atrium_common::cache::{page_key, DEFAULT_TTL_SECS};
use atrium_common::normalize::strip_html;
use atrium_common::wordpress::WpItem;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::future::Future;
use std::time::Duration;

/// Placeholder shown when a post has no featured image.
pub const BLOG_IMAGE_PLACEHOLDER: &str = "/images/blog-placeholder.jpg";

/// Default read time when the editor did not provide one.
pub const DEFAULT_READ_TIME: &str = "5 min read";

/// Normalized blog post view-model.
///
/// `content` is the one pass-through rich-text field; everything else is
/// entity-decoded plain text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostView {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub date: String,
    pub read_time: String,
    pub image: String,
}

/// Normalized catalog item (product, service, solution, industry).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItemView {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub icon: String,
    pub features: Vec<String>,
}

/// Shape a raw post item into its view-model.
pub fn post_view(item: &WpItem) -> PostView {
    PostView {
        slug: item.slug_str().to_string(),
        title: item.title_text(),
        excerpt: strip_html(&item.excerpt.as_ref().map(|e| e.rendered.clone()).unwrap_or_default()),
        content: item
            .content
            .as_ref()
            .map(|c| c.rendered.clone())
            .unwrap_or_default(),
        category: item
            .embedded_term_name()
            .unwrap_or_else(|| "Insights".to_string()),
        date: format_post_date(item.date.as_deref()),
        read_time: item
            .acf_text("read_time")
            .unwrap_or_else(|| DEFAULT_READ_TIME.to_string()),
        image: item
            .acf_text("featured_image")
            .unwrap_or_else(|| BLOG_IMAGE_PLACEHOLDER.to_string()),
    }
}

/// Shape a raw catalog item into its view-model.
pub fn catalog_view(item: &WpItem) -> CatalogItemView {
    CatalogItemView {
        slug: item.slug_str().to_string(),
        title: item.title_text(),
        summary: strip_html(item.acf_str("description").unwrap_or_default()),
        icon: item.acf_text("icon").unwrap_or_default(),
        features: item.acf_lines("features"),
    }
}

/// Page ACF field with a built-in default for absence.
pub(crate) fn page_field(page: Option<&WpItem>, key: &str, default: &str) -> String {
    page.and_then(|p| p.acf_text(key))
        .unwrap_or_else(|| default.to_string())
}

/// WordPress dates arrive as `2024-05-01T10:30:00`; render them as
/// `May 1, 2024`. Unparseable input passes through unchanged.
pub fn format_post_date(date: Option<&str>) -> String {
    let Some(raw) = date else {
        return String::new();
    };
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        Ok(parsed) => parsed.format("%B %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Serve the view-model for `path` from the page cache, assembling and
/// storing it on a miss. `tags` label the cached entry so tag purges drop
/// dependent view-models along with the raw fetches.
pub(crate) async fn cached<Fut>(
    state: &AppState,
    path: &str,
    tags: &[&str],
    assemble: Fut,
) -> Option<Value>
where
    Fut: Future<Output = Option<Value>>,
{
    let key = page_key(path);
    if let Some(cached) = state.cache.get(&key) {
        return Some(cached);
    }

    let value = assemble.await?;
    let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
    state.cache.insert(
        &key,
        value.clone(),
        Duration::from_secs(DEFAULT_TTL_SECS),
        &tags,
    );
    Some(value)
}
