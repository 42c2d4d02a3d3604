//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the exporter configuration (file, environment overrides and defaults).

use crate::config::{load_config_or_default, AuthType, ExporterConfig};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let source = config_path.unwrap_or("<defaults and environment>");
        tracing::info!(config_path = %source, "Validating configuration");

        println!("🔍 Validating configuration: {source}");
        println!();

        let config = match load_config_or_default(config_path) {
            Ok(c) => {
                println!("✅ Configuration loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        match config.validate() {
            Ok(_) => {
                println!("✅ Configuration is valid");
                println!();
                print_config_summary(&config);
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                Ok(2) // Configuration error exit code
            }
        }
    }
}

fn print_config_summary(config: &ExporterConfig) {
    println!("Configuration Summary:");
    println!("  Log Level: {}", config.application.log_level);
    println!("  Grafana URL: {}", config.grafana.url);
    match config.grafana.auth_type {
        AuthType::Bearer => println!("  Auth: bearer token"),
        AuthType::Basic => println!(
            "  Auth: basic ({})",
            config.grafana.username.as_deref().unwrap_or("")
        ),
    }
    println!("  Timeout: {}s", config.grafana.timeout_seconds);
    println!("  TLS Verify: {}", config.grafana.tls_verify);
    println!(
        "  Folders: {}",
        if config.export.folder_names.is_empty() {
            "All".to_string()
        } else {
            format!("{:?}", config.export.folder_names)
        }
    );
    if !config.export.skip_resources.is_empty() {
        println!("  Skip: {:?}", config.export.skip_resources);
    }
    println!(
        "  Output: {}/{}",
        config.export.output_dir, config.export.output_file
    );
    println!("  Dashboards Dir: {}", config.export.dashboards_dir);
}
