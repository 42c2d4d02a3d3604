//! Dashboard search and hydration

use super::Fetched;
use crate::adapters::grafana::models::DashboardHit;
use crate::adapters::grafana::GrafanaApi;
use crate::core::export::summary::ExportIssue;
use crate::core::transform::strip_volatile_fields;
use crate::domain::{Dashboard, DashboardUid, ExportError, FolderUid, Result};
use std::sync::Arc;

/// Hit type Grafana uses for dashboards in search results
const DASHBOARD_HIT_TYPE: &str = "dash-db";

/// Fetches every dashboard visible to the credentials
///
/// A single search call lists the dashboards, then each one is fetched in
/// full and sanitized with [`strip_volatile_fields`]. Search results are
/// capped at `search_limit`; hitting the cap is reported as a warning since
/// the listing is then probably incomplete.
pub struct DashboardFetcher {
    api: Arc<dyn GrafanaApi>,
    search_limit: usize,
}

impl DashboardFetcher {
    pub fn new(api: Arc<dyn GrafanaApi>, search_limit: usize) -> Self {
        Self { api, search_limit }
    }

    pub async fn fetch_all(&self) -> Fetched<Dashboard> {
        let mut fetched = Fetched::new();

        let hits = match self.api.search_dashboards(self.search_limit).await {
            Ok(hits) => hits,
            Err(e) => {
                crate::log_fetch_failure!(&e, "dashboard search");
                fetched.issue(ExportIssue::from_error(&e).with_context("dashboard search"));
                return fetched;
            }
        };

        if hits.len() >= self.search_limit {
            tracing::warn!(
                limit = self.search_limit,
                "Dashboard search hit the result limit, some dashboards may be missing"
            );
            fetched.warn(format!(
                "Dashboard search returned {} results, the configured limit; results may be truncated",
                hits.len()
            ));
        }

        tracing::info!(count = hits.len(), "Found dashboards");

        for hit in hits {
            if hit.hit_type.as_deref().is_some_and(|t| t != DASHBOARD_HIT_TYPE) {
                tracing::debug!(uid = %hit.uid, hit_type = ?hit.hit_type, "Ignoring non-dashboard hit");
                continue;
            }

            let context = format!("dashboard={}", hit.uid);
            match self.hydrate(hit).await {
                Ok(dashboard) => fetched.items.push(dashboard),
                Err(e) => {
                    crate::log_fetch_failure!(&e, &context);
                    fetched.issue(ExportIssue::from_error(&e).with_context(context));
                }
            }
        }

        fetched
    }

    async fn hydrate(&self, hit: DashboardHit) -> Result<Dashboard> {
        let uid = DashboardUid::new(hit.uid).map_err(ExportError::Validation)?;
        let folder_uid = hit
            .folder_uid
            .filter(|f| !f.is_empty())
            .map(FolderUid::new)
            .transpose()
            .map_err(ExportError::Validation)?;

        let envelope = self.api.get_dashboard(&uid).await?;
        let document = strip_volatile_fields(envelope.dashboard)?;

        tracing::debug!(uid = %uid, folder_uid = ?folder_uid, "Fetched dashboard");
        Ok(Dashboard::new(uid, hit.title, folder_uid, document))
    }
}
