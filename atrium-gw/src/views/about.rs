//! About page view-model

use super::home::{logo_view, ClientLogo};
use super::{cached, page_field};
use crate::{repos, AppState};
use atrium_common::normalize::strip_html;
use atrium_common::wordpress::WpItem;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct AboutView {
    pub heading: String,
    pub intro: String,
    pub mission: String,
    pub values_heading: String,
    pub value_props: Vec<ValueProp>,
    pub team_heading: String,
    pub departments: Vec<TeamDepartment>,
    pub logos_heading: String,
    pub client_logos: Vec<ClientLogo>,
}

#[derive(Debug, Serialize)]
pub struct ValueProp {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct TeamDepartment {
    pub name: String,
    pub description: String,
    pub roles: Vec<String>,
}

fn value_prop_view(item: &WpItem) -> ValueProp {
    ValueProp {
        title: item.title_text(),
        description: strip_html(item.acf_str("description").unwrap_or_default()),
    }
}

fn department_view(item: &WpItem) -> TeamDepartment {
    TeamDepartment {
        name: item.title_text(),
        description: strip_html(item.acf_str("description").unwrap_or_default()),
        roles: item.acf_lines("roles"),
    }
}

pub async fn resolve(state: &AppState) -> Option<Value> {
    cached(state, "/about", &["page-about"], assemble(state)).await
}

async fn assemble(state: &AppState) -> Option<Value> {
    let wp = &state.wp;
    let (page, departments, value_props, logos) = tokio::join!(
        repos::pages::get_page(wp, "about"),
        repos::sections::get_team_departments(wp),
        repos::sections::get_value_props(wp),
        repos::sections::get_client_logos(wp),
    );
    let page = page.as_ref();

    let view = AboutView {
        heading: page_field(page, "heading", "About Atrium"),
        intro: page_field(
            page,
            "intro",
            "We are a technology consultancy that treats marketing sites as production systems.",
        ),
        mission: page_field(
            page,
            "mission",
            "Ship platforms our clients can run without us.",
        ),
        values_heading: page_field(page, "values_heading", "What we value"),
        value_props: value_props.iter().map(value_prop_view).collect(),
        team_heading: page_field(page, "team_heading", "Our team"),
        departments: departments.iter().map(department_view).collect(),
        logos_heading: page_field(page, "logos_heading", "Clients"),
        client_logos: logos.iter().map(logo_view).collect(),
    };

    serde_json::to_value(view).ok()
}
