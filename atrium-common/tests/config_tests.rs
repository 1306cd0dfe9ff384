//! Unit tests for configuration resolution and graceful degradation
//!
//! Note: Uses serial_test to prevent ENV variable race conditions. Tests that
//! manipulate WORDPRESS_API_URL or ATRIUM_BIND are marked with #[serial] so
//! they run sequentially, not in parallel.

use atrium_common::config::{
    Config, ConfigOverrides, DEFAULT_BIND_ADDR, DEFAULT_WORDPRESS_API_URL,
};
use serial_test::serial;
use std::env;
use std::io::Write;

const ENV_KEYS: &[&str] = &[
    "WORDPRESS_API_URL",
    "REVALIDATION_SECRET",
    "RESEND_API_KEY",
    "CONTACT_FROM",
    "CONTACT_TO",
    "ATRIUM_BIND",
];

fn clear_env() {
    for key in ENV_KEYS {
        env::remove_var(key);
    }
}

/// Config file that does not exist: point loading at an empty temp dir so a
/// developer's local atrium.toml cannot leak into the test.
fn no_file_overrides() -> (tempfile::TempDir, ConfigOverrides) {
    let dir = tempfile::tempdir().unwrap();
    let overrides = ConfigOverrides {
        config_file: Some(dir.path().join("atrium.toml")),
        ..ConfigOverrides::default()
    };
    (dir, overrides)
}

#[test]
#[serial]
fn compiled_defaults_apply_when_nothing_is_configured() {
    clear_env();
    let (_dir, overrides) = no_file_overrides();
    let config = Config::load(overrides);

    assert_eq!(config.wordpress_api_url, DEFAULT_WORDPRESS_API_URL);
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert!(config.revalidation_secret.is_none());
    assert!(config.resend_api_key.is_none());
    assert!(!config.contact_from.is_empty());
    assert!(!config.contact_to.is_empty());
}

#[test]
#[serial]
fn environment_overrides_defaults() {
    clear_env();
    env::set_var("WORDPRESS_API_URL", "https://cms.test/wp-json/wp/v2/");
    env::set_var("REVALIDATION_SECRET", "s3cret");
    env::set_var("ATRIUM_BIND", "0.0.0.0:8080");

    let (_dir, overrides) = no_file_overrides();
    let config = Config::load(overrides);
    clear_env();

    // Trailing slash is trimmed so endpoint concatenation stays clean
    assert_eq!(config.wordpress_api_url, "https://cms.test/wp-json/wp/v2");
    assert_eq!(config.revalidation_secret.as_deref(), Some("s3cret"));
    assert_eq!(config.bind_addr, "0.0.0.0:8080");
}

#[test]
#[serial]
fn empty_environment_values_fall_through() {
    clear_env();
    env::set_var("REVALIDATION_SECRET", "   ");

    let (_dir, overrides) = no_file_overrides();
    let config = Config::load(overrides);
    clear_env();

    assert!(config.revalidation_secret.is_none());
}

#[test]
#[serial]
fn cli_overrides_beat_environment() {
    clear_env();
    env::set_var("WORDPRESS_API_URL", "https://env.test/wp-json/wp/v2");

    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(ConfigOverrides {
        wordpress_api_url: Some("https://cli.test/wp-json/wp/v2".to_string()),
        bind: Some("127.0.0.1:9999".to_string()),
        config_file: Some(dir.path().join("atrium.toml")),
    });
    clear_env();

    assert_eq!(config.wordpress_api_url, "https://cli.test/wp-json/wp/v2");
    assert_eq!(config.bind_addr, "127.0.0.1:9999");
}

#[test]
#[serial]
fn toml_file_fills_gaps_below_environment() {
    clear_env();
    env::set_var("RESEND_API_KEY", "re_env_key");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("atrium.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(
        file,
        "wordpress_api_url = \"https://file.test/wp-json/wp/v2\"\n\
         resend_api_key = \"re_file_key\"\n\
         revalidation_secret = \"from-file\""
    )
    .unwrap();

    let config = Config::load(ConfigOverrides {
        config_file: Some(path),
        ..ConfigOverrides::default()
    });
    clear_env();

    assert_eq!(config.wordpress_api_url, "https://file.test/wp-json/wp/v2");
    // ENV beats the file for the mail key
    assert_eq!(config.resend_api_key.as_deref(), Some("re_env_key"));
    assert_eq!(config.revalidation_secret.as_deref(), Some("from-file"));
}

#[test]
#[serial]
fn unparseable_config_file_degrades_to_defaults() {
    clear_env();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("atrium.toml");
    std::fs::write(&path, "this is { not toml").unwrap();

    let config = Config::load(ConfigOverrides {
        config_file: Some(path),
        ..ConfigOverrides::default()
    });

    assert_eq!(config.wordpress_api_url, DEFAULT_WORDPRESS_API_URL);
}
