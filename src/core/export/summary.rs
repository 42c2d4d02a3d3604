//! Export summary and reporting
//!
//! This module defines structures for tracking and reporting export results.
//! Recoverable failures (a folder branch that could not be fetched, a
//! dashboard whose document failed to load) are recorded as [`ExportIssue`]s
//! instead of aborting the run.

use crate::domain::{ExportError, GrafanaError};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::time::Duration;

/// Type of recoverable export failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    /// Could not reach the Grafana instance
    Connection,
    /// Request exceeded the configured timeout
    Timeout,
    /// Credentials rejected
    Authentication,
    /// Resource disappeared between listing and fetching
    NotFound,
    /// Response or payload could not be used
    InvalidResponse,
    /// Anything else
    Unknown,
}

impl IssueKind {
    /// Classify an error
    pub fn from_error(err: &ExportError) -> Self {
        match err {
            ExportError::Grafana(GrafanaError::ConnectionFailed(_)) => IssueKind::Connection,
            ExportError::Grafana(GrafanaError::Timeout(_)) => IssueKind::Timeout,
            ExportError::Grafana(GrafanaError::AuthenticationFailed(_)) => {
                IssueKind::Authentication
            }
            ExportError::Grafana(GrafanaError::NotFound(_)) => IssueKind::NotFound,
            ExportError::Grafana(GrafanaError::InvalidResponse(_))
            | ExportError::Validation(_)
            | ExportError::Serialization(_) => IssueKind::InvalidResponse,
            _ => IssueKind::Unknown,
        }
    }
}

/// Recoverable export failure with context
#[derive(Debug, Clone)]
pub struct ExportIssue {
    /// Type of failure
    pub kind: IssueKind,

    /// Error message
    pub message: String,

    /// What was being fetched (e.g. `folder=f1`)
    pub context: Option<String>,
}

impl ExportIssue {
    /// Create a new issue
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: None,
        }
    }

    /// Create an issue from an error, classifying it
    pub fn from_error(err: &ExportError) -> Self {
        Self::new(IssueKind::from_error(err), err.to_string())
    }

    /// Add context
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// Summary of an export operation
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// When the export started
    pub started_at: DateTime<Utc>,

    /// Folders resolved by the traversal
    pub folders_found: usize,

    /// Dashboards hydrated from the search results
    pub dashboards_fetched: usize,

    /// Dashboards whose folder is in scope
    pub dashboards_selected: usize,

    /// Dashboard resource blocks written to the configuration
    pub dashboards_emitted: usize,

    /// Dashboards left out because of the skip list
    pub dashboards_skipped: usize,

    /// Dashboards left out because their folder was not rendered
    pub dashboards_omitted: usize,

    /// Dashboard JSON documents written to disk
    pub documents_written: usize,

    /// Path of the generated Terraform file (not set on dry runs)
    pub artifact_path: Option<PathBuf>,

    /// Rendered configuration, kept only on dry runs
    pub rendered_config: Option<String>,

    /// Whether this was a dry run
    pub dry_run: bool,

    /// Duration of the export
    pub duration: Duration,

    /// Recoverable failures
    pub issues: Vec<ExportIssue>,

    /// Non-fatal warnings (unmatched folder names, truncated search, ...)
    pub warnings: Vec<String>,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            folders_found: 0,
            dashboards_fetched: 0,
            dashboards_selected: 0,
            dashboards_emitted: 0,
            dashboards_skipped: 0,
            dashboards_omitted: 0,
            documents_written: 0,
            artifact_path: None,
            rendered_config: None,
            dry_run: false,
            duration: Duration::from_secs(0),
            issues: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record a recoverable failure
    pub fn add_issue(&mut self, issue: ExportIssue) {
        self.issues.push(issue);
    }

    /// Record a warning
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// True when nothing had to be skipped because of a failure
    pub fn is_successful(&self) -> bool {
        self.issues.is_empty()
    }

    /// Log the summary
    pub fn log_summary(&self) {
        crate::log_export_complete!(self);

        for warning in &self.warnings {
            tracing::warn!(warning = %warning, "Export warning");
        }

        if !self.issues.is_empty() {
            tracing::warn!(
                issue_count = self.issues.len(),
                "Export completed with issues"
            );
            for issue in &self.issues {
                tracing::warn!(
                    kind = ?issue.kind,
                    message = %issue.message,
                    context = ?issue.context,
                    "Export issue"
                );
            }
        }
    }
}

impl Default for ExportSummary {
    fn default() -> Self {
        Self::new()
    }
}
