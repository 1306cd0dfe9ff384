//! Per-entity content repositories
//!
//! One accessor group per CMS content type, each wrapping the WordPress
//! client with a type-specific query and a stable sort order. Failure
//! handling is uniform: an unavailable upstream resolves to an empty
//! collection (list accessors) or `None` (single-item accessors), never an
//! error.

pub mod catalog;
pub mod pages;
pub mod posts;
pub mod sections;

use atrium_common::wordpress::{sort_by_display_order, FetchOptions, WordPressClient, WpItem};

/// Fetch a full collection and sort it ascending by `display_order`.
/// The stable sort keeps CMS response order on ties.
pub(crate) async fn collection(
    wp: &WordPressClient,
    endpoint: &str,
    tags: &[&str],
) -> Vec<WpItem> {
    let mut items = wp.fetch_items(endpoint, FetchOptions::tagged(tags)).await;
    sort_by_display_order(&mut items);
    items
}

/// Fetch a slug-filtered query and pick the first match.
/// Slug uniqueness is not assumed to be enforced upstream; if the CMS
/// returns several matches the first one wins, deterministically.
pub(crate) async fn first_match(
    wp: &WordPressClient,
    endpoint: &str,
    tags: &[&str],
) -> Option<WpItem> {
    wp.fetch_items(endpoint, FetchOptions::tagged(tags))
        .await
        .into_iter()
        .next()
}
