//! ContentPage repository
//!
//! Pages are singleton-per-slug bags of named ACF fields (headlines, CTA
//! text, section headings). Absent fields resolve to built-in defaults at the
//! view layer, so a page missing from the CMS entirely is not an error.

use atrium_common::wordpress::{WordPressClient, WpItem};

const PAGE_FIELDS: &str = "id,slug,title,acf";

/// Fetch the content page for a site slug (`home`, `about`, ...).
pub async fn get_page(wp: &WordPressClient, slug: &str) -> Option<WpItem> {
    if slug.is_empty() {
        return None;
    }
    let endpoint = format!("/pages?per_page=1&_fields={PAGE_FIELDS}&slug={slug}");
    let tag = format!("page-{slug}");
    super::first_match(wp, &endpoint, &[&tag]).await
}
