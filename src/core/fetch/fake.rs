//! In-memory Grafana used by the fetcher and coordinator tests

use crate::adapters::grafana::models::{
    DashboardEnvelope, DashboardHit, FolderDetail, FolderSummary,
};
use crate::adapters::grafana::GrafanaApi;
use crate::domain::ids::{DashboardUid, FolderUid};
use crate::domain::{GrafanaError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Default)]
pub(crate) struct FakeGrafana {
    folders: Vec<FolderDetail>,
    /// Extra child links, used to build cycles
    extra_children: HashMap<String, Vec<String>>,
    dashboards: Vec<(DashboardHit, Value)>,
    failing_folders: HashSet<String>,
    failing_children: HashSet<String>,
    failing_dashboards: HashSet<String>,
    fail_top_level: bool,
    fail_search: bool,
    pub(crate) folder_calls: Mutex<Vec<String>>,
}

impl FakeGrafana {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn folder(mut self, uid: &str, title: &str, parent: Option<&str>) -> Self {
        self.folders.push(FolderDetail {
            uid: uid.to_string(),
            title: title.to_string(),
            parent_uid: parent.map(str::to_string),
        });
        self
    }

    pub(crate) fn child_link(mut self, parent: &str, child: &str) -> Self {
        self.extra_children
            .entry(parent.to_string())
            .or_default()
            .push(child.to_string());
        self
    }

    pub(crate) fn dashboard(mut self, uid: &str, folder: Option<&str>, model: Value) -> Self {
        self.dashboards.push((
            DashboardHit {
                uid: uid.to_string(),
                title: format!("Dashboard {uid}"),
                folder_uid: folder.map(str::to_string),
                hit_type: Some("dash-db".to_string()),
            },
            model,
        ));
        self
    }

    pub(crate) fn failing_folder(mut self, uid: &str) -> Self {
        self.failing_folders.insert(uid.to_string());
        self
    }

    pub(crate) fn failing_children(mut self, uid: &str) -> Self {
        self.failing_children.insert(uid.to_string());
        self
    }

    pub(crate) fn failing_dashboard(mut self, uid: &str) -> Self {
        self.failing_dashboards.insert(uid.to_string());
        self
    }

    pub(crate) fn failing_top_level(mut self) -> Self {
        self.fail_top_level = true;
        self
    }

    pub(crate) fn failing_search(mut self) -> Self {
        self.fail_search = true;
        self
    }

    pub(crate) fn get_folder_calls(&self) -> Vec<String> {
        self.folder_calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl GrafanaApi for FakeGrafana {
    async fn list_folders(&self, parent: Option<&FolderUid>) -> Result<Vec<FolderSummary>> {
        let parent = parent.map(FolderUid::as_str);
        match parent {
            None if self.fail_top_level => {
                return Err(GrafanaError::ConnectionFailed("refused".to_string()).into())
            }
            Some(uid) if self.failing_children.contains(uid) => {
                return Err(GrafanaError::ServerError {
                    status: 500,
                    message: "boom".to_string(),
                }
                .into())
            }
            _ => {}
        }

        let mut children: Vec<FolderSummary> = self
            .folders
            .iter()
            .filter(|f| f.parent_uid.as_deref() == parent)
            .map(|f| FolderSummary {
                uid: f.uid.clone(),
                title: f.title.clone(),
            })
            .collect();

        if let Some(extra) = parent.and_then(|p| self.extra_children.get(p)) {
            for uid in extra {
                if let Some(f) = self.folders.iter().find(|f| &f.uid == uid) {
                    children.push(FolderSummary {
                        uid: f.uid.clone(),
                        title: f.title.clone(),
                    });
                }
            }
        }

        Ok(children)
    }

    async fn get_folder(&self, uid: &FolderUid) -> Result<FolderDetail> {
        if let Ok(mut calls) = self.folder_calls.lock() {
            calls.push(uid.to_string());
        }
        if self.failing_folders.contains(uid.as_str()) {
            return Err(GrafanaError::Timeout(format!("/api/folders/{uid}")).into());
        }
        self.folders
            .iter()
            .find(|f| f.uid == uid.as_str())
            .cloned()
            .ok_or_else(|| GrafanaError::NotFound(format!("/api/folders/{uid}")).into())
    }

    async fn search_dashboards(&self, limit: usize) -> Result<Vec<DashboardHit>> {
        if self.fail_search {
            return Err(GrafanaError::ServerError {
                status: 503,
                message: "unavailable".to_string(),
            }
            .into());
        }
        Ok(self
            .dashboards
            .iter()
            .take(limit)
            .map(|(hit, _)| hit.clone())
            .collect())
    }

    async fn get_dashboard(&self, uid: &DashboardUid) -> Result<DashboardEnvelope> {
        if self.failing_dashboards.contains(uid.as_str()) {
            return Err(GrafanaError::ServerError {
                status: 500,
                message: "boom".to_string(),
            }
            .into());
        }
        self.dashboards
            .iter()
            .find(|(hit, _)| hit.uid == uid.as_str())
            .map(|(_, model)| DashboardEnvelope {
                dashboard: model.clone(),
                meta: Value::Null,
            })
            .ok_or_else(|| GrafanaError::NotFound(format!("/api/dashboards/uid/{uid}")).into())
    }

    fn base_url(&self) -> &str {
        "http://fake-grafana"
    }
}
