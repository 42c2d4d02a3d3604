//! Grafana HTTP API response models
//!
//! Only the fields the exporter reads are modelled; everything else in the
//! responses is ignored on deserialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Entry returned by `GET /api/folders`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderSummary {
    pub uid: String,
    pub title: String,
}

/// Body of `GET /api/folders/{uid}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderDetail {
    pub uid: String,
    pub title: String,

    /// Only present for nested folders
    #[serde(rename = "parentUid", default)]
    pub parent_uid: Option<String>,
}

/// Hit returned by `GET /api/search?type=dash-db`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardHit {
    pub uid: String,
    pub title: String,

    /// Absent for dashboards in the General folder
    #[serde(rename = "folderUid", default)]
    pub folder_uid: Option<String>,

    #[serde(rename = "type", default)]
    pub hit_type: Option<String>,
}

/// Body of `GET /api/dashboards/uid/{uid}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardEnvelope {
    /// The dashboard model
    pub dashboard: Value,

    /// Instance metadata (folder, permissions, provisioning state)
    #[serde(default)]
    pub meta: Value,
}
