//! atrium-gw library - content gateway service
//!
//! Assembles page view-models from the headless CMS and exposes the
//! revalidation webhook and contact endpoint.

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use atrium_common::cache::ResponseCache;
use atrium_common::config::Config;
use atrium_common::wordpress::WordPressClient;

pub mod api;
pub mod fallback;
pub mod mail;
pub mod repos;
pub mod views;

use mail::Mailer;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub wp: Arc<WordPressClient>,
    pub cache: Arc<ResponseCache>,
    /// Absent when no mail API key is configured; the contact endpoint then
    /// reports service-unavailable
    pub mailer: Option<Arc<Mailer>>,
}

impl AppState {
    /// Create application state from resolved configuration
    pub fn new(config: Config) -> Self {
        let cache = Arc::new(ResponseCache::new());
        let wp = Arc::new(WordPressClient::new(
            &config.wordpress_api_url,
            cache.clone(),
        ));
        let mailer = Mailer::from_config(&config).map(Arc::new);

        Self {
            config: Arc::new(config),
            wp,
            cache,
            mailer,
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Page view-models
        .route("/api/pages/:slug", get(api::page_view))
        .route("/api/blog/:slug", get(api::blog_post))
        .route("/api/products/:slug", get(api::product_detail))
        .route("/api/services/:slug", get(api::service_detail))
        .route("/api/solutions/:slug", get(api::solution_detail))
        .route("/api/industries/:slug", get(api::industry_detail))
        // Write paths
        .route("/api/revalidate", post(api::revalidate))
        .route("/api/contact", post(api::submit_contact))
        // Health (no auth, no CMS dependency)
        .merge(api::health_routes())
        .with_state(state)
        // The CMS and browser clients call from other origins
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
