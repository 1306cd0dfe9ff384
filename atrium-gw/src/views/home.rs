//! Home page view-model

use super::{cached, catalog_view, page_field, CatalogItemView};
use crate::{fallback, repos, AppState};
use atrium_common::normalize::strip_html;
use atrium_common::wordpress::WpItem;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct HomeView {
    pub hero: Hero,
    pub stats: Vec<Stat>,
    pub products_heading: String,
    pub products: Vec<CatalogItemView>,
    pub steps_heading: String,
    pub steps: Vec<Step>,
    pub process_heading: String,
    pub process_steps: Vec<Step>,
    pub faq_heading: String,
    pub faq: Vec<FaqItem>,
    pub logos_heading: String,
    pub client_logos: Vec<ClientLogo>,
}

#[derive(Debug, Serialize)]
pub struct Hero {
    pub headline: String,
    pub subheadline: String,
    pub cta_text: String,
    pub cta_link: String,
    pub secondary_cta_text: String,
    pub secondary_cta_link: String,
}

#[derive(Debug, Serialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct Step {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct ClientLogo {
    pub name: String,
    pub logo_url: String,
}

pub(crate) fn stat_view(item: &WpItem) -> Stat {
    Stat {
        value: item.acf_text("value").unwrap_or_default(),
        label: item
            .acf_text("label")
            .unwrap_or_else(|| item.title_text()),
    }
}

pub(crate) fn step_view(item: &WpItem) -> Step {
    Step {
        title: item.title_text(),
        description: strip_html(item.acf_str("description").unwrap_or_default()),
    }
}

pub(crate) fn faq_view(item: &WpItem) -> FaqItem {
    FaqItem {
        question: item.title_text(),
        answer: strip_html(item.acf_str("answer").unwrap_or_default()),
    }
}

pub(crate) fn logo_view(item: &WpItem) -> ClientLogo {
    ClientLogo {
        name: item.title_text(),
        logo_url: item.acf_text("logo_url").unwrap_or_default(),
    }
}

pub async fn resolve(state: &AppState) -> Option<Value> {
    cached(state, "/", &["page-home"], assemble(state)).await
}

async fn assemble(state: &AppState) -> Option<Value> {
    let wp = &state.wp;
    let (page, stats, products, steps, process_steps, faq, logos) = tokio::join!(
        repos::pages::get_page(wp, "home"),
        repos::sections::get_stats(wp),
        repos::catalog::get_products(wp),
        repos::sections::get_steps(wp),
        repos::sections::get_process_steps(wp),
        repos::sections::get_faq_items(wp),
        repos::sections::get_client_logos(wp),
    );
    let page = page.as_ref();

    let products: Vec<CatalogItemView> = if products.is_empty() {
        fallback::PRODUCTS.clone()
    } else {
        products.iter().map(catalog_view).collect()
    };

    let view = HomeView {
        hero: Hero {
            headline: page_field(
                page,
                "hero_headline",
                "Digital infrastructure for ambitious brands",
            ),
            subheadline: page_field(
                page,
                "hero_subheadline",
                "Atrium designs, builds, and operates the platforms behind modern customer experiences.",
            ),
            cta_text: page_field(page, "hero_cta_text", "Start a project"),
            cta_link: page_field(page, "hero_cta_link", "/contact"),
            secondary_cta_text: page_field(page, "hero_secondary_cta_text", "Explore services"),
            secondary_cta_link: page_field(page, "hero_secondary_cta_link", "/services"),
        },
        stats: stats.iter().map(stat_view).collect(),
        products_heading: page_field(page, "products_heading", "Products"),
        products,
        steps_heading: page_field(page, "steps_heading", "How we work"),
        steps: steps.iter().map(step_view).collect(),
        process_heading: page_field(page, "process_heading", "Our process"),
        process_steps: process_steps.iter().map(step_view).collect(),
        faq_heading: page_field(page, "faq_heading", "Frequently asked questions"),
        faq: faq.iter().map(faq_view).collect(),
        logos_heading: page_field(page, "logos_heading", "Trusted by"),
        client_logos: logos.iter().map(logo_view).collect(),
    };

    serde_json::to_value(view).ok()
}
