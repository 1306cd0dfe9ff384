//! Configuration loading
//!
//! Every key resolves through the same priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! Missing config never aborts startup: absent keys fall through to defaults
//! with a warning, and endpoints that require a secret or API key report a
//! configuration error at request time instead.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Compiled default for the WordPress REST API base URL.
pub const DEFAULT_WORDPRESS_API_URL: &str =
    "https://cms.atriumdigital.example/wp-json/wp/v2";

/// Compiled default bind address for the gateway HTTP server.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5730";

const DEFAULT_CONTACT_FROM: &str = "Atrium Website <noreply@atriumdigital.example>";
const DEFAULT_CONTACT_TO: &str = "hello@atriumdigital.example";

/// Gateway configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// WordPress REST API base URL (no trailing slash)
    pub wordpress_api_url: String,
    /// Shared secret for the revalidation webhook; `None` means the webhook
    /// rejects all calls with a configuration error
    pub revalidation_secret: Option<String>,
    /// Mail provider API key; `None` means the contact endpoint reports
    /// service-unavailable
    pub resend_api_key: Option<String>,
    /// Sender address for contact-form notifications
    pub contact_from: String,
    /// Recipient address for contact-form notifications
    pub contact_to: String,
    /// HTTP server bind address
    pub bind_addr: String,
}

/// Values supplied on the command line, overriding all other sources.
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub bind: Option<String>,
    pub wordpress_api_url: Option<String>,
    pub config_file: Option<PathBuf>,
}

/// Optional keys readable from a TOML config file.
#[derive(Debug, Default, Deserialize)]
pub struct TomlConfig {
    pub wordpress_api_url: Option<String>,
    pub revalidation_secret: Option<String>,
    pub resend_api_key: Option<String>,
    pub contact_from: Option<String>,
    pub contact_to: Option<String>,
    pub bind_addr: Option<String>,
}

impl TomlConfig {
    /// Read the config file if one exists. A missing or unparseable file is
    /// a warning, not a failure.
    fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => PathBuf::from("atrium.toml"),
        };

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => return Self::default(),
        };

        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring unparseable config file");
                Self::default()
            }
        }
    }
}

impl Config {
    /// Resolve the full configuration from CLI overrides, environment
    /// variables, the optional TOML file, and compiled defaults.
    pub fn load(overrides: ConfigOverrides) -> Self {
        let file = TomlConfig::load(overrides.config_file.as_deref());

        let wordpress_api_url = overrides
            .wordpress_api_url
            .or_else(|| env_var("WORDPRESS_API_URL"))
            .or(file.wordpress_api_url)
            .unwrap_or_else(|| DEFAULT_WORDPRESS_API_URL.to_string());

        let revalidation_secret =
            env_var("REVALIDATION_SECRET").or(file.revalidation_secret);
        if revalidation_secret.is_none() {
            warn!("REVALIDATION_SECRET not configured; revalidation webhook will reject all calls");
        }

        let resend_api_key = env_var("RESEND_API_KEY").or(file.resend_api_key);
        if resend_api_key.is_none() {
            warn!("RESEND_API_KEY not configured; contact form will report service unavailable");
        }

        let contact_from = env_var("CONTACT_FROM")
            .or(file.contact_from)
            .unwrap_or_else(|| DEFAULT_CONTACT_FROM.to_string());

        let contact_to = env_var("CONTACT_TO")
            .or(file.contact_to)
            .unwrap_or_else(|| DEFAULT_CONTACT_TO.to_string());

        let bind_addr = overrides
            .bind
            .or_else(|| env_var("ATRIUM_BIND"))
            .or(file.bind_addr)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        Self {
            wordpress_api_url: wordpress_api_url.trim_end_matches('/').to_string(),
            revalidation_secret,
            resend_api_key,
            contact_from,
            contact_to,
            bind_addr,
        }
    }
}

/// Non-empty environment variable lookup.
fn env_var(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}
