//! Fetching folders and dashboards from Grafana
//!
//! Both fetchers talk to Grafana only through [`GrafanaApi`](crate::adapters::grafana::GrafanaApi)
//! and never raise on a per-item failure: the failure is logged, recorded
//! as an [`ExportIssue`] and the fetch carries on with the next item.

pub mod dashboards;
pub mod folders;

#[cfg(test)]
pub(crate) mod fake;

pub use dashboards::DashboardFetcher;
pub use folders::FolderFetcher;

use crate::core::export::summary::ExportIssue;

/// Items fetched together with the recoverable failures met along the way
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub items: Vec<T>,
    pub issues: Vec<ExportIssue>,
    pub warnings: Vec<String>,
}

impl<T> Fetched<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            issues: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub(crate) fn issue(&mut self, issue: ExportIssue) {
        self.issues.push(issue);
    }

    pub(crate) fn warn(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

impl<T> Default for Fetched<T> {
    fn default() -> Self {
        Self::new()
    }
}
