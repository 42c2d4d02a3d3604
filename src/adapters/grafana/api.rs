//! Grafana API trait definition
//!
//! The fetchers only depend on this trait, so the traversal and hydration
//! logic can run against the real HTTP client or an in-memory fake.

use super::models::{DashboardEnvelope, DashboardHit, FolderDetail, FolderSummary};
use crate::domain::ids::{DashboardUid, FolderUid};
use crate::domain::Result;
use async_trait::async_trait;

/// Read-only view of the Grafana HTTP API used by the exporter
///
/// # Example
///
/// ```no_run
/// use grafana_export::adapters::grafana::{GrafanaApi, GrafanaClient};
/// use grafana_export::config::GrafanaConfig;
///
/// # async fn example() -> grafana_export::domain::Result<()> {
/// let client = GrafanaClient::new(&GrafanaConfig::default())?;
///
/// for folder in client.list_folders(None).await? {
///     println!("{} ({})", folder.title, folder.uid);
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait GrafanaApi: Send + Sync {
    /// List the folders directly under `parent`, or the top-level folders when `None`
    ///
    /// Implementations return every page, not just the first.
    async fn list_folders(&self, parent: Option<&FolderUid>) -> Result<Vec<FolderSummary>>;

    /// Fetch one folder
    async fn get_folder(&self, uid: &FolderUid) -> Result<FolderDetail>;

    /// Search dashboards, returning at most `limit` hits
    async fn search_dashboards(&self, limit: usize) -> Result<Vec<DashboardHit>>;

    /// Fetch the full dashboard model
    async fn get_dashboard(&self, uid: &DashboardUid) -> Result<DashboardEnvelope>;

    /// Base URL of the Grafana instance
    fn base_url(&self) -> &str;
}
