//! Section content repositories
//!
//! Non-addressable collection types that render inside a page: home-page
//! stats/steps/FAQ, about-page departments and value props, careers and
//! contact content, testimonials and client logos. List accessors only.

use atrium_common::wordpress::{WordPressClient, WpItem};

async fn section(wp: &WordPressClient, resource: &str, tag: &str) -> Vec<WpItem> {
    let endpoint =
        format!("/{resource}?per_page=100&_fields=id,title,acf&orderby=date&order=asc");
    super::collection(wp, &endpoint, &[tag]).await
}

pub async fn get_stats(wp: &WordPressClient) -> Vec<WpItem> {
    section(wp, "stat", "stats").await
}

pub async fn get_steps(wp: &WordPressClient) -> Vec<WpItem> {
    section(wp, "step", "steps").await
}

pub async fn get_process_steps(wp: &WordPressClient) -> Vec<WpItem> {
    section(wp, "process_step", "process-steps").await
}

pub async fn get_faq_items(wp: &WordPressClient) -> Vec<WpItem> {
    section(wp, "faq_item", "faq-items").await
}

pub async fn get_testimonials(wp: &WordPressClient) -> Vec<WpItem> {
    section(wp, "testimonial", "testimonials").await
}

pub async fn get_client_logos(wp: &WordPressClient) -> Vec<WpItem> {
    section(wp, "client_logo", "client-logos").await
}

pub async fn get_team_departments(wp: &WordPressClient) -> Vec<WpItem> {
    section(wp, "team_department", "team-departments").await
}

pub async fn get_value_props(wp: &WordPressClient) -> Vec<WpItem> {
    section(wp, "value_prop", "value-props").await
}

pub async fn get_career_positions(wp: &WordPressClient) -> Vec<WpItem> {
    section(wp, "career_position", "career-positions").await
}

pub async fn get_career_benefits(wp: &WordPressClient) -> Vec<WpItem> {
    section(wp, "career_benefit", "career-benefits").await
}

pub async fn get_office_locations(wp: &WordPressClient) -> Vec<WpItem> {
    section(wp, "office_location", "office-locations").await
}
