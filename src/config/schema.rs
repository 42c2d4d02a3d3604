//! Configuration schema types
//!
//! This module defines the configuration structure that maps to the TOML file.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};

/// Main exporter configuration
///
/// Every section has defaults, so an empty file (or no file at all) plus
/// environment and CLI overrides is a complete configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExporterConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Grafana instance connection
    #[serde(default)]
    pub grafana: GrafanaConfig,

    /// Export selection and output layout
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ExporterConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.grafana.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

/// How requests are authenticated against Grafana
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthType {
    /// `Authorization: Bearer <api_key>` (service account token or API key)
    #[default]
    Bearer,
    /// `Authorization: Basic <username:password>`
    Basic,
}

impl std::fmt::Display for AuthType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthType::Bearer => write!(f, "bearer"),
            AuthType::Basic => write!(f, "basic"),
        }
    }
}

/// Grafana instance configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrafanaConfig {
    /// Base URL of the Grafana instance (e.g. `https://grafana.example.com`)
    #[serde(default)]
    pub url: String,

    /// Authentication scheme
    #[serde(default)]
    pub auth_type: AuthType,

    /// API key or service account token, used with `auth_type = "bearer"`
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// Username, used with `auth_type = "basic"`
    #[serde(default)]
    pub username: Option<String>,

    /// Password, used with `auth_type = "basic"`
    #[serde(default)]
    pub password: Option<SecretString>,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// TLS certificate verification enabled
    ///
    /// Only disable this against development instances with self-signed
    /// certificates.
    #[serde(default = "default_true")]
    pub tls_verify: bool,

    /// Page size used when listing folders
    #[serde(default = "default_folder_page_size")]
    pub folder_page_size: usize,

    /// Maximum number of hits requested from the dashboard search
    ///
    /// The search endpoint is not paged; instances with more dashboards than
    /// this are truncated and a warning is logged.
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
}

impl Default for GrafanaConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            auth_type: AuthType::default(),
            api_key: None,
            username: None,
            password: None,
            timeout_seconds: default_timeout_seconds(),
            tls_verify: true,
            folder_page_size: default_folder_page_size(),
            search_limit: default_search_limit(),
        }
    }
}

impl GrafanaConfig {
    fn validate(&self) -> Result<(), String> {
        use secrecy::ExposeSecret;

        if self.url.is_empty() {
            return Err("grafana.url cannot be empty".to_string());
        }

        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err("grafana.url must start with http:// or https://".to_string());
        }

        url::Url::parse(&self.url)
            .map_err(|e| format!("grafana.url '{}' is not a valid URL: {e}", self.url))?;

        match self.auth_type {
            AuthType::Bearer => {
                let missing = self
                    .api_key
                    .as_ref()
                    .map(|k| k.expose_secret().is_blank())
                    .unwrap_or(true);
                if missing {
                    return Err(
                        "grafana.api_key cannot be empty when auth_type is 'bearer'".to_string()
                    );
                }
            }
            AuthType::Basic => {
                if self.username.as_ref().map(|u| u.is_empty()).unwrap_or(true) {
                    return Err(
                        "grafana.username cannot be empty when auth_type is 'basic'".to_string()
                    );
                }
                let missing = self
                    .password
                    .as_ref()
                    .map(|p| p.expose_secret().is_blank())
                    .unwrap_or(true);
                if missing {
                    return Err(
                        "grafana.password cannot be empty when auth_type is 'basic'".to_string()
                    );
                }
            }
        }

        if self.timeout_seconds == 0 {
            return Err("grafana.timeout_seconds must be > 0".to_string());
        }

        if self.folder_page_size == 0 || self.folder_page_size > 5000 {
            return Err("grafana.folder_page_size must be between 1 and 5000".to_string());
        }

        if self.search_limit == 0 || self.search_limit > 5000 {
            return Err("grafana.search_limit must be between 1 and 5000".to_string());
        }

        Ok(())
    }
}

/// Export selection and output layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Titles of the top-level folders to export (empty = all folders)
    #[serde(default)]
    pub folder_names: Vec<String>,

    /// Dashboard resource names to leave out of the generated configuration
    #[serde(default)]
    pub skip_resources: Vec<String>,

    /// Directory the artifact and documents are written under
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Terraform file name, relative to `output_dir`
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Dashboard document directory, relative to `output_dir`
    ///
    /// This path is also what the generated `file()` calls reference.
    #[serde(default = "default_dashboards_dir")]
    pub dashboards_dir: String,

    /// Render everything but write nothing
    #[serde(default)]
    pub dry_run: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            folder_names: Vec::new(),
            skip_resources: Vec::new(),
            output_dir: default_output_dir(),
            output_file: default_output_file(),
            dashboards_dir: default_dashboards_dir(),
            dry_run: false,
        }
    }
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_file.trim().is_empty() {
            return Err("export.output_file cannot be empty".to_string());
        }

        if self.dashboards_dir.trim().is_empty() {
            return Err("export.dashboards_dir cannot be empty".to_string());
        }

        if std::path::Path::new(&self.dashboards_dir).is_absolute() {
            return Err(
                "export.dashboards_dir must be relative so the generated file() paths stay portable"
                    .to_string(),
            );
        }

        if self.folder_names.iter().any(|n| n.is_empty()) {
            return Err("export.folder_names cannot contain empty names".to_string());
        }

        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local logging is enabled".to_string());
        }

        Ok(())
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout_seconds() -> u64 {
    300
}

fn default_folder_page_size() -> usize {
    1000
}

fn default_search_limit() -> usize {
    1000
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_output_file() -> String {
    "grafana.tf".to_string()
}

fn default_dashboards_dir() -> String {
    "dashboards".to_string()
}

fn default_local_path() -> String {
    "logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
