//! Export coordinator - main orchestrator for the export process
//!
//! This module sequences the export workflow: resolve folders, fetch
//! dashboards, select those in scope, render the Terraform configuration
//! and write it out.

use crate::adapters::grafana::{GrafanaApi, GrafanaClient};
use crate::config::ExporterConfig;
use crate::core::export::summary::ExportSummary;
use crate::core::fetch::{DashboardFetcher, Fetched, FolderFetcher};
use crate::core::generate::{ArtifactWriter, SkipSet, TerraformGenerator};
use crate::core::select::select;
use crate::domain::Result;
use std::sync::Arc;
use std::time::Instant;

/// Export coordinator
pub struct ExportCoordinator {
    config: ExporterConfig,
    api: Arc<dyn GrafanaApi>,
}

impl ExportCoordinator {
    /// Create a new export coordinator backed by the Grafana HTTP client
    pub fn new(config: ExporterConfig) -> Result<Self> {
        let client = GrafanaClient::new(&config.grafana)?;
        Ok(Self::with_api(config, Arc::new(client)))
    }

    /// Create a coordinator over any [`GrafanaApi`] implementation
    pub fn with_api(config: ExporterConfig, api: Arc<dyn GrafanaApi>) -> Self {
        Self { config, api }
    }

    /// Execute the export
    ///
    /// This is the main entry point for the export process. It:
    /// 1. Resolves the folder tree under the requested top-level folders
    /// 2. Fetches and sanitizes every dashboard
    /// 3. Keeps the dashboards whose folder was resolved
    /// 4. Renders folder and dashboard resource blocks
    /// 5. Writes the documents and the configuration (unless dry run)
    ///
    /// Fetch failures are recorded in the summary and do not stop the run.
    /// Generation and filesystem errors are returned.
    pub async fn execute_export(&self) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let mut summary = ExportSummary::new();
        summary.dry_run = self.config.export.dry_run;

        tracing::info!(
            url = %self.api.base_url(),
            folder_names = ?self.config.export.folder_names,
            dry_run = summary.dry_run,
            "Starting export process"
        );

        let folders = FolderFetcher::new(self.api.clone())
            .resolve(&self.config.export.folder_names)
            .await;
        let folders = absorb(&mut summary, folders);
        summary.folders_found = folders.len();

        tracing::info!(count = folders.len(), "Found folders to export");

        let dashboards = DashboardFetcher::new(self.api.clone(), self.config.grafana.search_limit)
            .fetch_all()
            .await;
        let dashboards = absorb(&mut summary, dashboards);
        summary.dashboards_fetched = dashboards.len();

        let selected = select(dashboards, &folders);
        summary.dashboards_selected = selected.len();

        tracing::info!(
            count = selected.len(),
            fetched = summary.dashboards_fetched,
            "Found dashboards in target folders"
        );

        let skip = SkipSet::from_names(&self.config.export.skip_resources);
        let artifact = TerraformGenerator::from_config(&self.config.export)
            .render(&folders, &selected, &skip)?;

        summary.dashboards_emitted = artifact.dashboard_blocks();
        summary.dashboards_skipped = artifact.skipped.len();
        summary.dashboards_omitted = artifact.omitted.len();

        if summary.dry_run {
            tracing::info!("Dry run, nothing written");
            summary.rendered_config = Some(artifact.config);
        } else {
            let report = ArtifactWriter::from_config(&self.config.export).write(&artifact)?;
            summary.documents_written = report.documents_written;
            summary.artifact_path = Some(report.config_path);
        }

        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();

        Ok(summary)
    }
}

fn absorb<T>(summary: &mut ExportSummary, fetched: Fetched<T>) -> Vec<T> {
    summary.issues.extend(fetched.issues);
    summary.warnings.extend(fetched.warnings);
    fetched.items
}
