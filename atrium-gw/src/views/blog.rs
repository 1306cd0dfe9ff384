//! Blog index and post detail view-models

use super::{cached, page_field, post_view, PostView};
use crate::{fallback, repos, AppState};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct BlogIndexView {
    pub heading: String,
    pub intro: String,
    pub posts: Vec<PostView>,
}

pub async fn index(state: &AppState) -> Option<Value> {
    cached(state, "/blog", &["page-blog", "blog-posts"], assemble_index(state)).await
}

async fn assemble_index(state: &AppState) -> Option<Value> {
    let wp = &state.wp;
    let (page, posts) = tokio::join!(
        repos::pages::get_page(wp, "blog"),
        repos::posts::get_posts(wp),
    );
    let page = page.as_ref();

    let posts: Vec<PostView> = if posts.is_empty() {
        fallback::POSTS.clone()
    } else {
        posts.iter().map(post_view).collect()
    };

    let view = BlogIndexView {
        heading: page_field(page, "heading", "Blog"),
        intro: page_field(
            page,
            "intro",
            "Notes from the field on building and running digital platforms.",
        ),
        posts,
    };

    serde_json::to_value(view).ok()
}

/// Post detail: live lookup by slug first, static fallback second,
/// `None` (a 404 to the routing layer) when both miss.
pub async fn post(state: &AppState, slug: &str) -> Option<Value> {
    let path = format!("/blog/{slug}");
    let post_tag = format!("post-{slug}");
    cached(
        state,
        &path,
        &["blog-posts", &post_tag],
        assemble_post(state, slug),
    )
    .await
}

async fn assemble_post(state: &AppState, slug: &str) -> Option<Value> {
    let view = match repos::posts::get_post_by_slug(&state.wp, slug).await {
        Some(item) => post_view(&item),
        None => fallback::post_by_slug(slug)?,
    };
    serde_json::to_value(view).ok()
}
