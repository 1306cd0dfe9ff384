//! Page view-model endpoints
//!
//! `GET /api/pages/:slug` serves the assembled view-model for a site page;
//! the detail routes serve one item by slug. A slug matching neither live
//! CMS content nor the fallback dataset is a 404.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

use crate::{views, AppState};

fn respond(view: Option<Value>) -> Response {
    match view {
        Some(view) => Json(view).into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({"error": "Not found"}))).into_response(),
    }
}

/// GET /api/pages/:slug
pub async fn page_view(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let view = match slug.as_str() {
        "home" => views::home::resolve(&state).await,
        "about" => views::about::resolve(&state).await,
        "services" => views::catalog::services_index(&state).await,
        "solutions" => views::catalog::solutions_index(&state).await,
        "products" => views::catalog::products_index(&state).await,
        "industries" => views::catalog::industries_index(&state).await,
        "blog" => views::blog::index(&state).await,
        "careers" => views::careers::resolve(&state).await,
        "contact" => views::contact::resolve(&state).await,
        _ => None,
    };
    respond(view)
}

/// GET /api/blog/:slug
pub async fn blog_post(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    respond(views::blog::post(&state, &slug).await)
}

/// GET /api/products/:slug
pub async fn product_detail(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    respond(views::catalog::product_detail(&state, &slug).await)
}

/// GET /api/services/:slug
pub async fn service_detail(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    respond(views::catalog::service_detail(&state, &slug).await)
}

/// GET /api/solutions/:slug
pub async fn solution_detail(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    respond(views::catalog::solution_detail(&state, &slug).await)
}

/// GET /api/industries/:slug
pub async fn industry_detail(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    respond(views::catalog::industry_detail(&state, &slug).await)
}
