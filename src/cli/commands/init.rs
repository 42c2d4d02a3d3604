//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "grafana-export.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing grafana-export configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your Grafana URL and folders", self.output);
                println!("  2. Set GRAFANA_EXPORT_API_KEY (or put it in a .env file)");
                println!(
                    "  3. Validate configuration: grafana-export --config {} validate-config",
                    self.output
                );
                println!("  4. Run export: grafana-export --config {} export", self.output);
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    fn sample_config() -> &'static str {
        r#"# grafana-export configuration
# Exports Grafana folders and dashboards as Terraform configuration

[application]
log_level = "info"

[grafana]
url = "https://grafana.example.com"

# Authentication: "bearer" (API key / service account token) or "basic"
auth_type = "bearer"
api_key = "${GRAFANA_EXPORT_API_KEY}"
# username = "admin"
# password = "${GRAFANA_EXPORT_PASSWORD}"

timeout_seconds = 300
tls_verify = true
folder_page_size = 1000
search_limit = 1000

[export]
# Top-level folder titles to export; empty exports every folder
folder_names = []

# Dashboard resource names to leave out of the configuration
skip_resources = []

output_dir = "."
output_file = "grafana.tf"
dashboards_dir = "dashboards"
dry_run = false

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
    }
}
