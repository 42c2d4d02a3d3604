//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels, overridable with `RUST_LOG`
//! - Console output on stderr
//! - Local JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use grafana_export::logging::init_logging;
//! use grafana_export::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log a failed Grafana request that the export recovers from
///
/// # Example
///
/// ```no_run
/// use grafana_export::log_fetch_failure;
/// use grafana_export::domain::GrafanaError;
///
/// let error = GrafanaError::Timeout("/api/folders/f1".to_string());
/// log_fetch_failure!(&error, "folder=f1");
/// ```
#[macro_export]
macro_rules! log_fetch_failure {
    ($error:expr, $context:expr) => {
        tracing::warn!(
            error = %$error,
            context = %$context,
            "Fetch failed, skipping"
        );
    };
}

/// Log the completion of an export from its summary
///
/// # Example
///
/// ```no_run
/// use grafana_export::log_export_complete;
/// use grafana_export::core::export::ExportSummary;
///
/// let summary = ExportSummary::new();
/// log_export_complete!(&summary);
/// ```
#[macro_export]
macro_rules! log_export_complete {
    ($summary:expr) => {
        tracing::info!(
            folders = $summary.folders_found,
            dashboards = $summary.dashboards_emitted,
            skipped = $summary.dashboards_skipped,
            omitted = $summary.dashboards_omitted,
            documents = $summary.documents_written,
            issues = $summary.issues.len(),
            dry_run = $summary.dry_run,
            duration_ms = $summary.duration.as_millis() as u64,
            "Export completed"
        );
    };
}
