//! Cache revalidation webhook
//!
//! The CMS calls `POST /api/revalidate` after publishing. The shared secret
//! must match exactly; on a mismatch nothing is invalidated. Unknown post
//! types are success-shaped no-ops (empty path list), matching the upstream
//! contract — callers treat "nothing matched" and "purged" identically.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::AppState;
use atrium_common::revalidation;

pub const SECRET_HEADER: &str = "x-revalidation-secret";

#[derive(Debug, Deserialize)]
pub struct RevalidateRequest {
    pub post_type: String,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RevalidateResponse {
    pub revalidated: bool,
    pub paths: Vec<String>,
    pub now: i64,
}

/// POST /api/revalidate
pub async fn revalidate(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<RevalidateRequest>,
) -> Response {
    let Some(secret) = state.config.revalidation_secret.as_deref() else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "message": "Error revalidating",
                "error": "Revalidation secret is not configured",
            })),
        )
            .into_response();
    };

    let provided = headers
        .get(SECRET_HEADER)
        .and_then(|value| value.to_str().ok());
    if provided != Some(secret) {
        warn!(post_type = %request.post_type, "Revalidation rejected: invalid secret");
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Invalid secret"})),
        )
            .into_response();
    }

    let plan = revalidation::plan(&request.post_type, request.slug.as_deref());

    for path in &plan.paths {
        state.cache.purge_path(path);
    }
    for tag in &plan.tags {
        state.cache.purge_tag(tag);
    }

    info!(
        post_type = %request.post_type,
        slug = request.slug.as_deref().unwrap_or(""),
        paths = ?plan.paths,
        tags = ?plan.tags,
        "Revalidated"
    );

    Json(RevalidateResponse {
        revalidated: true,
        paths: plan.paths,
        now: Utc::now().timestamp_millis(),
    })
    .into_response()
}
