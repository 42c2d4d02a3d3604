//! Export command implementation
//!
//! This module implements the `export` command, which writes the Terraform
//! configuration and the dashboard documents for the selected folders.

use crate::config::{load_config_or_default, secret_string, split_list, ExporterConfig};
use crate::core::export::{ExportCoordinator, ExportSummary};
use clap::Args;
use std::io::{self, Write};

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Grafana base URL
    #[arg(long)]
    pub url: Option<String>,

    /// Grafana API key (bearer token)
    #[arg(long, env = "GRAFANA_EXPORT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Top-level folder titles to export (default: all)
    #[arg(long, num_args = 1..)]
    pub folder_names: Vec<String>,

    /// Dashboard resource names to leave out (comma-separated, e.g. d_abc,d_def)
    #[arg(long)]
    pub skip_resources: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Directory the artifact is written to
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Terraform file name
    #[arg(long)]
    pub output_file: Option<String>,

    /// Dashboard documents directory, relative to the output directory
    #[arg(long)]
    pub dashboards_dir: Option<String>,

    /// Render and print the configuration without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        self.apply_overrides(&mut config);

        if let Err(e) = config.validate() {
            tracing::error!(error = %e, "Configuration validation failed");
            eprintln!("Configuration validation failed: {e}");
            return Ok(2); // Configuration error exit code
        }

        let dry_run = config.export.dry_run;

        let coordinator = match ExportCoordinator::new(config) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create export coordinator");
                eprintln!("Failed to initialize export: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        let summary = match coordinator.execute_export().await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                eprintln!("Export failed: {e}");
                return Ok(5); // Fatal error exit code
            }
        };

        // Dry runs print the configuration on stdout and keep the report on stderr
        if dry_run {
            if let Some(rendered) = &summary.rendered_config {
                print!("{rendered}");
                io::stdout().flush()?;
            }
            print_summary(&summary, &mut io::stderr())?;
        } else {
            print_summary(&summary, &mut io::stdout())?;
        }

        Ok(if summary.is_successful() { 0 } else { 1 })
    }

    /// Apply command-line flags on top of the loaded configuration
    fn apply_overrides(&self, config: &mut ExporterConfig) {
        if let Some(url) = &self.url {
            tracing::info!(url = %url, "Overriding Grafana URL from CLI");
            config.grafana.url = url.clone();
        }

        if let Some(api_key) = &self.api_key {
            config.grafana.api_key = Some(secret_string(api_key.clone()));
        }

        if !self.folder_names.is_empty() {
            tracing::info!(folder_names = ?self.folder_names, "Overriding folder names from CLI");
            config.export.folder_names = self.folder_names.clone();
        }

        if let Some(skip) = &self.skip_resources {
            let names = split_list(skip);
            tracing::info!(skip_resources = ?names, "Overriding skip list from CLI");
            config.export.skip_resources = names;
        }

        if let Some(timeout) = self.timeout {
            config.grafana.timeout_seconds = timeout;
        }

        if let Some(dir) = &self.output_dir {
            config.export.output_dir = dir.clone();
        }

        if let Some(file) = &self.output_file {
            config.export.output_file = file.clone();
        }

        if let Some(dir) = &self.dashboards_dir {
            config.export.dashboards_dir = dir.clone();
        }

        if self.dry_run {
            tracing::info!("Enabling dry-run mode from CLI");
            config.export.dry_run = true;
        }
    }
}

fn print_summary(summary: &ExportSummary, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "📊 Export Summary:")?;
    writeln!(out, "  Folders: {}", summary.folders_found)?;
    writeln!(out, "  Dashboards fetched: {}", summary.dashboards_fetched)?;
    writeln!(out, "  Dashboards in scope: {}", summary.dashboards_selected)?;
    writeln!(out, "  Dashboards exported: {}", summary.dashboards_emitted)?;
    writeln!(out, "  Skipped: {}", summary.dashboards_skipped)?;
    if summary.dashboards_omitted > 0 {
        writeln!(out, "  Omitted: {}", summary.dashboards_omitted)?;
    }
    if let Some(path) = &summary.artifact_path {
        writeln!(out, "  Configuration: {}", path.display())?;
        writeln!(out, "  Documents written: {}", summary.documents_written)?;
    }
    writeln!(out, "  Duration: {:.2}s", summary.duration.as_secs_f64())?;
    writeln!(out)?;

    if !summary.warnings.is_empty() {
        writeln!(out, "⚠️  Warnings:")?;
        for warning in &summary.warnings {
            writeln!(out, "  - {warning}")?;
        }
        writeln!(out)?;
    }

    if summary.is_successful() {
        writeln!(out, "✅ Export completed successfully!")?;
    } else {
        writeln!(out, "⚠️  Errors encountered:")?;
        for issue in &summary.issues {
            writeln!(out, "  - {:?}: {}", issue.kind, issue.message)?;
            if let Some(context) = &issue.context {
                writeln!(out, "    Context: {context}")?;
            }
        }
        writeln!(out)?;
        writeln!(out, "⚠️  Export completed with errors")?;
    }

    Ok(())
}
