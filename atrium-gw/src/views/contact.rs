//! Contact page view-model

use super::{cached, page_field};
use crate::{repos, AppState};
use atrium_common::wordpress::WpItem;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct ContactView {
    pub heading: String,
    pub intro: String,
    pub offices_heading: String,
    pub offices: Vec<OfficeLocation>,
}

#[derive(Debug, Serialize)]
pub struct OfficeLocation {
    pub city: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

fn office_view(item: &WpItem) -> OfficeLocation {
    OfficeLocation {
        city: item.title_text(),
        address: item.acf_text("address").unwrap_or_default(),
        phone: item.acf_text("phone").unwrap_or_default(),
        email: item.acf_text("email").unwrap_or_default(),
    }
}

pub async fn resolve(state: &AppState) -> Option<Value> {
    cached(state, "/contact", &["page-contact"], assemble(state)).await
}

async fn assemble(state: &AppState) -> Option<Value> {
    let wp = &state.wp;
    let (page, offices) = tokio::join!(
        repos::pages::get_page(wp, "contact"),
        repos::sections::get_office_locations(wp),
    );
    let page = page.as_ref();

    let view = ContactView {
        heading: page_field(page, "heading", "Get in touch"),
        intro: page_field(
            page,
            "intro",
            "Tell us what you are building. We reply within one business day.",
        ),
        offices_heading: page_field(page, "offices_heading", "Offices"),
        offices: offices.iter().map(office_view).collect(),
    };

    serde_json::to_value(view).ok()
}
