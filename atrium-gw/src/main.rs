//! atrium-gw - content gateway for the Atrium marketing site
//!
//! Serves assembled page view-models from the headless WordPress CMS with
//! tagged response caching, and exposes the cache-revalidation webhook and
//! the contact-form endpoint.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use atrium_common::config::{Config, ConfigOverrides};
use atrium_gw::{build_router, AppState};

#[derive(Parser)]
#[command(name = "atrium-gw", about = "Atrium content gateway")]
struct Cli {
    /// Bind address for the HTTP server
    #[arg(long)]
    bind: Option<String>,

    /// WordPress REST API base URL
    #[arg(long)]
    wordpress_api_url: Option<String>,

    /// Path to TOML config file
    #[arg(long, env = "ATRIUM_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber before anything can log
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Atrium content gateway (atrium-gw) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let cli = Cli::parse();
    let config = Config::load(ConfigOverrides {
        bind: cli.bind,
        wordpress_api_url: cli.wordpress_api_url,
        config_file: cli.config,
    });

    info!("WordPress API: {}", config.wordpress_api_url);

    let bind_addr = config.bind_addr.clone();
    let state = AppState::new(config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("atrium-gw listening on http://{}", bind_addr);
    info!("Health check: http://{}/health", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
