//! Blog post repository
//!
//! Posts embed their category taxonomy (`_embed=wp:term`) so the view layer
//! can resolve a category name without a second request.

use atrium_common::wordpress::{WordPressClient, WpItem};

const POST_FIELDS: &str = "id,slug,date,title,excerpt,content,acf,_links";

pub async fn get_posts(wp: &WordPressClient) -> Vec<WpItem> {
    let endpoint = format!(
        "/posts?per_page=100&_embed=wp:term&_fields={POST_FIELDS}&orderby=date&order=asc"
    );
    super::collection(wp, &endpoint, &["blog-posts"]).await
}

pub async fn get_post_by_slug(wp: &WordPressClient, slug: &str) -> Option<WpItem> {
    if slug.is_empty() {
        return None;
    }
    let endpoint =
        format!("/posts?per_page=1&_embed=wp:term&_fields={POST_FIELDS}&slug={slug}");
    let post_tag = format!("post-{slug}");
    super::first_match(wp, &endpoint, &["blog-posts", &post_tag]).await
}
