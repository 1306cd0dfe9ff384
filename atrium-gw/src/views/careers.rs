//! Careers page view-model

use super::{cached, page_field};
use crate::{repos, AppState};
use atrium_common::normalize::strip_html;
use atrium_common::wordpress::WpItem;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct CareersView {
    pub heading: String,
    pub intro: String,
    pub positions_heading: String,
    pub positions: Vec<CareerPosition>,
    pub benefits_heading: String,
    pub benefits: Vec<CareerBenefit>,
}

#[derive(Debug, Serialize)]
pub struct CareerPosition {
    pub title: String,
    pub department: String,
    pub location: String,
    pub employment_type: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct CareerBenefit {
    pub title: String,
    pub description: String,
}

fn position_view(item: &WpItem) -> CareerPosition {
    CareerPosition {
        title: item.title_text(),
        department: item.acf_text("department").unwrap_or_default(),
        location: item
            .acf_text("location")
            .unwrap_or_else(|| "Remote".to_string()),
        employment_type: item
            .acf_text("employment_type")
            .unwrap_or_else(|| "Full-time".to_string()),
        description: strip_html(item.acf_str("description").unwrap_or_default()),
    }
}

fn benefit_view(item: &WpItem) -> CareerBenefit {
    CareerBenefit {
        title: item.title_text(),
        description: strip_html(item.acf_str("description").unwrap_or_default()),
    }
}

pub async fn resolve(state: &AppState) -> Option<Value> {
    cached(state, "/careers", &["page-careers"], assemble(state)).await
}

async fn assemble(state: &AppState) -> Option<Value> {
    let wp = &state.wp;
    let (page, positions, benefits) = tokio::join!(
        repos::pages::get_page(wp, "careers"),
        repos::sections::get_career_positions(wp),
        repos::sections::get_career_benefits(wp),
    );
    let page = page.as_ref();

    let view = CareersView {
        heading: page_field(page, "heading", "Careers"),
        intro: page_field(
            page,
            "intro",
            "Build systems that outlast the engagement. Fully remote, always has been.",
        ),
        positions_heading: page_field(page, "positions_heading", "Open positions"),
        positions: positions.iter().map(position_view).collect(),
        benefits_heading: page_field(page, "benefits_heading", "Benefits"),
        benefits: benefits.iter().map(benefit_view).collect(),
    };

    serde_json::to_value(view).ok()
}
