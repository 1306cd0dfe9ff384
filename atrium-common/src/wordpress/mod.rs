//! WordPress REST integration
//!
//! The CMS is treated as an opaque upstream content provider: this module
//! holds the item types its REST API returns and the fetch client that
//! tolerates upstream failure by resolving to `None`/empty.

pub mod client;
pub mod types;

pub use client::{FetchOptions, WordPressClient};
pub use types::{sort_by_display_order, WpItem, WpRendered};
