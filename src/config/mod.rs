//! Configuration management for the exporter.
//!
//! The configuration is an explicit [`ExporterConfig`] value that is handed to
//! each component's constructor. It is assembled in three layers:
//!
//! 1. An optional TOML file (with `${VAR_NAME}` environment substitution)
//! 2. `GRAFANA_EXPORT_*` environment variable overrides
//! 3. Command-line flags
//!
//! and is validated once all three have been applied.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [grafana]
//! url = "https://grafana.example.com"
//! api_key = "${GRAFANA_EXPORT_API_KEY}"
//! timeout_seconds = 300
//!
//! [export]
//! folder_names = ["Team A", "Platform"]
//! skip_resources = ["d_cardinality_management"]
//! output_file = "grafana.tf"
//! dashboards_dir = "dashboards"
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use grafana_export::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("grafana-export.toml")?;
//! config.validate()?;
//! println!("Grafana URL: {}", config.grafana.url);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default, split_list};
pub use schema::{
    ApplicationConfig, AuthType, ExportConfig, ExporterConfig, GrafanaConfig, LoggingConfig,
};
pub use secret::{secret_string, secret_string_opt, SecretString, SecretValue};
