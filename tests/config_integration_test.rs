//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold `ENV_MUTEX` to avoid
//! interference between tests.

use grafana_export::config::{load_config, load_config_or_default, AuthType};
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    for var in [
        "GRAFANA_EXPORT_LOG_LEVEL",
        "GRAFANA_EXPORT_URL",
        "GRAFANA_EXPORT_API_KEY",
        "GRAFANA_EXPORT_TIMEOUT_SECONDS",
        "GRAFANA_EXPORT_FOLDER_NAMES",
        "GRAFANA_EXPORT_SKIP_RESOURCES",
        "GRAFANA_EXPORT_DRY_RUN",
        "TEST_GRAFANA_TOKEN",
        "TEST_GRAFANA_PASSWORD",
    ] {
        std::env::remove_var(var);
    }
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
log_level = "debug"

[grafana]
url = "https://grafana.example.com"
auth_type = "bearer"
api_key = "glsa_complete"
timeout_seconds = 60
tls_verify = false
folder_page_size = 200
search_limit = 2000

[export]
folder_names = ["Team A", "Platform"]
skip_resources = ["d_noisy"]
output_dir = "terraform"
output_file = "dashboards.tf"
dashboards_dir = "json"
dry_run = true

[logging]
local_enabled = true
local_path = "/tmp/grafana-export"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert!(config.validate().is_ok());

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.grafana.url, "https://grafana.example.com");
    assert_eq!(config.grafana.auth_type, AuthType::Bearer);
    assert!(config
        .grafana
        .api_key
        .as_ref()
        .is_some_and(|k| k.expose_secret() == "glsa_complete"));
    assert_eq!(config.grafana.timeout_seconds, 60);
    assert!(!config.grafana.tls_verify);
    assert_eq!(config.grafana.folder_page_size, 200);
    assert_eq!(config.grafana.search_limit, 2000);
    assert_eq!(config.export.folder_names, vec!["Team A", "Platform"]);
    assert_eq!(config.export.skip_resources, vec!["d_noisy"]);
    assert_eq!(config.export.output_dir, "terraform");
    assert_eq!(config.export.output_file, "dashboards.tf");
    assert_eq!(config.export.dashboards_dir, "json");
    assert!(config.export.dry_run);
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_load_minimal_config_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[grafana]
url = "http://localhost:3000"
api_key = "glsa_minimal"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert!(config.validate().is_ok());

    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.grafana.timeout_seconds, 300);
    assert!(config.grafana.tls_verify);
    assert!(config.export.folder_names.is_empty());
    assert!(config.export.skip_resources.is_empty());
    assert_eq!(config.export.output_dir, ".");
    assert_eq!(config.export.output_file, "grafana.tf");
    assert_eq!(config.export.dashboards_dir, "dashboards");
    assert!(!config.export.dry_run);
    assert!(!config.logging.local_enabled);
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_GRAFANA_PASSWORD", "s3cret");

    let file = write_config(
        r#"
# password = "${NOT_SET_BUT_COMMENTED}"
[grafana]
url = "https://grafana.example.com"
auth_type = "basic"
username = "admin"
password = "${TEST_GRAFANA_PASSWORD}"
"#,
    );

    let config = load_config(file.path()).unwrap();
    cleanup_env_vars();

    assert_eq!(config.grafana.auth_type, AuthType::Basic);
    assert!(config
        .grafana
        .password
        .as_ref()
        .is_some_and(|p| p.expose_secret() == "s3cret"));
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_env_var_is_reported() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let file = write_config(
        r#"
[grafana]
url = "https://grafana.example.com"
api_key = "${TEST_GRAFANA_TOKEN}"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_GRAFANA_TOKEN"));
}

#[test]
fn test_env_overrides_take_precedence() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("GRAFANA_EXPORT_URL", "https://override.example.com");
    std::env::set_var("GRAFANA_EXPORT_FOLDER_NAMES", "Ops, Platform");
    std::env::set_var("GRAFANA_EXPORT_SKIP_RESOURCES", "d_a,d_b");
    std::env::set_var("GRAFANA_EXPORT_DRY_RUN", "true");

    let file = write_config(
        r#"
[grafana]
url = "https://grafana.example.com"
api_key = "glsa_file"

[export]
folder_names = ["Team A"]
"#,
    );

    let config = load_config(file.path()).unwrap();
    cleanup_env_vars();

    assert_eq!(config.grafana.url, "https://override.example.com");
    assert_eq!(config.export.folder_names, vec!["Ops", "Platform"]);
    assert_eq!(config.export.skip_resources, vec!["d_a", "d_b"]);
    assert!(config.export.dry_run);
}

#[test]
fn test_invalid_timeout_override_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("GRAFANA_EXPORT_TIMEOUT_SECONDS", "soon");

    let result = load_config_or_default(None);
    cleanup_env_vars();

    assert!(result.is_err());
}

#[test]
fn test_defaults_without_file_need_url_and_key() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let config = load_config_or_default(None).unwrap();
    assert!(config.validate().is_err());

    std::env::set_var("GRAFANA_EXPORT_URL", "https://grafana.example.com");
    std::env::set_var("GRAFANA_EXPORT_API_KEY", "glsa_env");
    let config = load_config_or_default(None).unwrap();
    cleanup_env_vars();

    assert!(config.validate().is_ok());
}

#[test]
fn test_validation_errors() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let cases = [
        (
            "[grafana]\nurl = \"grafana.example.com\"\napi_key = \"k\"\n",
            "http",
        ),
        ("[grafana]\nurl = \"https://g.example.com\"\n", "api_key"),
        (
            "[grafana]\nurl = \"https://g.example.com\"\nauth_type = \"basic\"\nusername = \"admin\"\n",
            "password",
        ),
        (
            "[grafana]\nurl = \"https://g.example.com\"\napi_key = \"k\"\ntimeout_seconds = 0\n",
            "timeout",
        ),
        (
            "[grafana]\nurl = \"https://g.example.com\"\napi_key = \"k\"\n[export]\ndashboards_dir = \"/abs\"\n",
            "dashboards_dir",
        ),
        (
            "[grafana]\nurl = \"https://g.example.com\"\napi_key = \"k\"\n[logging]\nlocal_rotation = \"weekly\"\n",
            "local_rotation",
        ),
    ];

    for (contents, expected) in cases {
        let file = write_config(contents);
        let config = load_config(file.path()).unwrap();
        let err = config.validate().unwrap_err();
        assert!(
            err.contains(expected),
            "expected '{expected}' in error '{err}'"
        );
    }
}

#[test]
fn test_missing_file_is_an_error() {
    let result = load_config("/nonexistent/grafana-export.toml");
    assert!(result.is_err());
}
