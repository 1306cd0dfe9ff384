//! Catalog repositories: products, services, solutions, industries
//!
//! The four URL-addressable catalog types share one REST shape, so the
//! accessors delegate to a pair of helpers parameterized by resource name
//! and cache tag.

use atrium_common::wordpress::{WordPressClient, WpItem};

const CATALOG_FIELDS: &str = "id,slug,title,acf";

async fn list(wp: &WordPressClient, resource: &str, tag: &str) -> Vec<WpItem> {
    let endpoint = format!(
        "/{resource}?per_page=100&_fields={CATALOG_FIELDS}&orderby=date&order=asc"
    );
    super::collection(wp, &endpoint, &[tag]).await
}

async fn by_slug(wp: &WordPressClient, resource: &str, tag: &str, slug: &str) -> Option<WpItem> {
    if slug.is_empty() {
        return None;
    }
    let endpoint = format!("/{resource}?per_page=1&_fields={CATALOG_FIELDS}&slug={slug}");
    super::first_match(wp, &endpoint, &[tag]).await
}

pub async fn get_products(wp: &WordPressClient) -> Vec<WpItem> {
    list(wp, "product", "products").await
}

pub async fn get_product_by_slug(wp: &WordPressClient, slug: &str) -> Option<WpItem> {
    by_slug(wp, "product", "products", slug).await
}

pub async fn get_services(wp: &WordPressClient) -> Vec<WpItem> {
    list(wp, "service", "services").await
}

pub async fn get_service_by_slug(wp: &WordPressClient, slug: &str) -> Option<WpItem> {
    by_slug(wp, "service", "services", slug).await
}

pub async fn get_solutions(wp: &WordPressClient) -> Vec<WpItem> {
    list(wp, "solution", "solutions").await
}

pub async fn get_solution_by_slug(wp: &WordPressClient, slug: &str) -> Option<WpItem> {
    by_slug(wp, "solution", "solutions", slug).await
}

pub async fn get_industries(wp: &WordPressClient) -> Vec<WpItem> {
    list(wp, "industry", "industries").await
}

pub async fn get_industry_by_slug(wp: &WordPressClient, slug: &str) -> Option<WpItem> {
    by_slug(wp, "industry", "industries", slug).await
}
