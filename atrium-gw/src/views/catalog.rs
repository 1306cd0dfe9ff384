//! Catalog index and detail view-models
//!
//! Services, solutions, products, and industries share one index shape; the
//! products page additionally carries testimonials. Detail pages resolve
//! live-then-fallback by slug.

use super::{cached, catalog_view, page_field, CatalogItemView};
use crate::{fallback, repos, AppState};
use atrium_common::normalize::strip_html;
use atrium_common::wordpress::WpItem;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct CatalogIndexView {
    pub heading: String,
    pub intro: String,
    pub items: Vec<CatalogItemView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<Vec<Testimonial>>,
}

#[derive(Debug, Serialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
    pub company: String,
}

fn testimonial_view(item: &WpItem) -> Testimonial {
    Testimonial {
        quote: strip_html(item.acf_str("quote").unwrap_or_default()),
        author: item.title_text(),
        role: item.acf_text("role").unwrap_or_default(),
        company: item.acf_text("company").unwrap_or_default(),
    }
}

#[derive(Clone, Copy)]
enum CatalogKind {
    Services,
    Solutions,
    Products,
    Industries,
}

impl CatalogKind {
    fn page_slug(self) -> &'static str {
        match self {
            Self::Services => "services",
            Self::Solutions => "solutions",
            Self::Products => "products",
            Self::Industries => "industries",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Self::Services => "/services",
            Self::Solutions => "/solutions",
            Self::Products => "/products",
            Self::Industries => "/industries",
        }
    }

    fn tags(self) -> &'static [&'static str] {
        match self {
            Self::Services => &["page-services", "services"],
            Self::Solutions => &["page-solutions", "solutions"],
            Self::Products => &["page-products", "products", "testimonials"],
            Self::Industries => &["page-industries", "industries"],
        }
    }

    fn default_heading(self) -> &'static str {
        match self {
            Self::Services => "Services",
            Self::Solutions => "Solutions",
            Self::Products => "Products",
            Self::Industries => "Industries",
        }
    }

    fn default_intro(self) -> &'static str {
        match self {
            Self::Services => "Senior teams for the work between idea and production.",
            Self::Solutions => "Packaged engagements for the problems we solve most often.",
            Self::Products => "Software we build, run, and stand behind.",
            Self::Industries => "Domain experience where the constraints are the product.",
        }
    }

    fn fallback_items(self) -> Vec<CatalogItemView> {
        match self {
            Self::Services => fallback::SERVICES.clone(),
            Self::Solutions => fallback::SOLUTIONS.clone(),
            Self::Products => fallback::PRODUCTS.clone(),
            Self::Industries => fallback::INDUSTRIES.clone(),
        }
    }
}

async fn resolve_index(state: &AppState, kind: CatalogKind) -> Option<Value> {
    cached(state, kind.path(), kind.tags(), assemble_index(state, kind)).await
}

async fn assemble_index(state: &AppState, kind: CatalogKind) -> Option<Value> {
    let wp = &state.wp;
    let with_testimonials = matches!(kind, CatalogKind::Products);

    let (page, items, testimonials) = tokio::join!(
        repos::pages::get_page(wp, kind.page_slug()),
        async {
            match kind {
                CatalogKind::Services => repos::catalog::get_services(wp).await,
                CatalogKind::Solutions => repos::catalog::get_solutions(wp).await,
                CatalogKind::Products => repos::catalog::get_products(wp).await,
                CatalogKind::Industries => repos::catalog::get_industries(wp).await,
            }
        },
        async {
            if with_testimonials {
                repos::sections::get_testimonials(wp).await
            } else {
                Vec::new()
            }
        },
    );
    let page = page.as_ref();

    let items: Vec<CatalogItemView> = if items.is_empty() {
        kind.fallback_items()
    } else {
        items.iter().map(catalog_view).collect()
    };

    let view = CatalogIndexView {
        heading: page_field(page, "heading", kind.default_heading()),
        intro: page_field(page, "intro", kind.default_intro()),
        items,
        testimonials: with_testimonials
            .then(|| testimonials.iter().map(testimonial_view).collect()),
    };

    serde_json::to_value(view).ok()
}

pub async fn services_index(state: &AppState) -> Option<Value> {
    resolve_index(state, CatalogKind::Services).await
}

pub async fn solutions_index(state: &AppState) -> Option<Value> {
    resolve_index(state, CatalogKind::Solutions).await
}

pub async fn products_index(state: &AppState) -> Option<Value> {
    resolve_index(state, CatalogKind::Products).await
}

pub async fn industries_index(state: &AppState) -> Option<Value> {
    resolve_index(state, CatalogKind::Industries).await
}

async fn detail(
    state: &AppState,
    path: &str,
    tag: &str,
    live: Option<WpItem>,
    fallback_item: Option<CatalogItemView>,
) -> Option<Value> {
    cached(state, path, &[tag], async {
        let view = match live {
            Some(item) => catalog_view(&item),
            None => fallback_item?,
        };
        serde_json::to_value(view).ok()
    })
    .await
}

pub async fn product_detail(state: &AppState, slug: &str) -> Option<Value> {
    let live = repos::catalog::get_product_by_slug(&state.wp, slug).await;
    detail(
        state,
        &format!("/products/{slug}"),
        "products",
        live,
        fallback::product_by_slug(slug),
    )
    .await
}

pub async fn service_detail(state: &AppState, slug: &str) -> Option<Value> {
    let live = repos::catalog::get_service_by_slug(&state.wp, slug).await;
    detail(
        state,
        &format!("/services/{slug}"),
        "services",
        live,
        fallback::service_by_slug(slug),
    )
    .await
}

pub async fn solution_detail(state: &AppState, slug: &str) -> Option<Value> {
    let live = repos::catalog::get_solution_by_slug(&state.wp, slug).await;
    detail(
        state,
        &format!("/solutions/{slug}"),
        "solutions",
        live,
        fallback::solution_by_slug(slug),
    )
    .await
}

pub async fn industry_detail(state: &AppState, slug: &str) -> Option<Value> {
    let live = repos::catalog::get_industry_by_slug(&state.wp, slug).await;
    detail(
        state,
        &format!("/industries/{slug}"),
        "industries",
        live,
        fallback::industry_by_slug(slug),
    )
    .await
}
