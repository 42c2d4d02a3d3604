//! Terraform configuration generation
//!
//! Turns the resolved folders and selected dashboards into `grafana_folder`
//! and `grafana_dashboard` resource blocks. Rendering is pure: the dashboard
//! documents are returned alongside the configuration text and written by
//! [`ArtifactWriter`](super::ArtifactWriter).

use super::resources::{
    depends_on, json_file, resource_attr, resource_block, resource_ref, to_config_text,
};
use super::skip::SkipSet;
use crate::config::ExportConfig;
use crate::domain::{Dashboard, DashboardUid, ExportError, Folder, FolderUid, ResourceName, Result};
use hcl::{Attribute, Block};
use std::collections::HashMap;

/// Terraform resource type for folders
pub const FOLDER_RESOURCE_TYPE: &str = "grafana_folder";

/// Terraform resource type for dashboards
pub const DASHBOARD_RESOURCE_TYPE: &str = "grafana_dashboard";

/// A dashboard document to be written next to the configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    pub uid: DashboardUid,

    /// File name inside the dashboards directory (`<uid>.json`)
    pub file_name: String,

    /// Pretty-printed JSON
    pub content: String,
}

/// Output of a render
#[derive(Debug, Clone, Default)]
pub struct GeneratedArtifact {
    /// Terraform configuration text
    pub config: String,

    /// One document per emitted dashboard block
    pub documents: Vec<RenderedDocument>,

    /// Number of folder blocks
    pub folder_blocks: usize,

    /// Dashboards left out because of the skip set
    pub skipped: Vec<ResourceName>,

    /// Dashboards left out because their folder is not rendered
    pub omitted: Vec<DashboardUid>,
}

impl GeneratedArtifact {
    /// Number of dashboard blocks
    pub fn dashboard_blocks(&self) -> usize {
        self.documents.len()
    }
}

/// Renders folders and dashboards as Terraform resources
#[derive(Debug, Clone)]
pub struct TerraformGenerator {
    dashboards_dir: String,
}

impl TerraformGenerator {
    /// `dashboards_dir` is the document directory as seen from the
    /// configuration file, used in the `file(...)` calls
    pub fn new(dashboards_dir: impl Into<String>) -> Self {
        Self {
            dashboards_dir: dashboards_dir.into(),
        }
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(config.dashboards_dir.clone())
    }

    /// Render the configuration
    ///
    /// Folder blocks come first, ordered by uid. Dashboard blocks follow in
    /// input order. The same inputs always produce the same output.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Generation`] when two different uids map to the
    /// same resource name, or a serialization error if a document cannot be
    /// printed.
    pub fn render(
        &self,
        folders: &[Folder],
        dashboards: &[Dashboard],
        skip: &SkipSet,
    ) -> Result<GeneratedArtifact> {
        let mut artifact = GeneratedArtifact::default();

        let mut sorted: Vec<&Folder> = folders.iter().collect();
        sorted.sort_by(|a, b| a.uid.cmp(&b.uid));
        sorted.dedup_by(|a, b| a.uid == b.uid);

        let folder_names = folder_resource_names(&sorted)?;

        let mut blocks: Vec<Block> = Vec::new();

        for folder in &sorted {
            let mut attributes = vec![
                Attribute::new("title", folder.title.as_str()),
                Attribute::new("uid", folder.uid.as_str()),
            ];

            if let Some(parent) = &folder.parent_uid {
                attributes.push(Attribute::new("parent_folder_uid", parent.as_str()));
                match folder_names.get(parent) {
                    Some(parent_name) => {
                        attributes.push(depends_on([resource_ref(
                            FOLDER_RESOURCE_TYPE,
                            parent_name,
                        )]));
                    }
                    None => {
                        tracing::debug!(
                            folder_uid = %folder.uid,
                            parent_uid = %parent,
                            "Parent folder not exported, omitting dependency"
                        );
                    }
                }
            }

            blocks.push(resource_block(
                FOLDER_RESOURCE_TYPE,
                &folder_names[&folder.uid],
                attributes,
            ));
            artifact.folder_blocks += 1;
        }

        let mut dashboard_names: HashMap<ResourceName, &DashboardUid> = HashMap::new();

        for dashboard in dashboards {
            let name = ResourceName::for_dashboard(&dashboard.uid);

            if skip.contains(&name) {
                tracing::info!(resource = %name, "Skipping dashboard resource");
                artifact.skipped.push(name);
                continue;
            }

            let Some(folder_name) = dashboard
                .folder_uid
                .as_ref()
                .and_then(|uid| folder_names.get(uid))
            else {
                tracing::warn!(
                    uid = %dashboard.uid,
                    folder_uid = ?dashboard.folder_uid,
                    "Dashboard folder not exported, omitting dashboard"
                );
                artifact.omitted.push(dashboard.uid.clone());
                continue;
            };

            match dashboard_names.get(&name) {
                Some(existing) if **existing == dashboard.uid => {
                    tracing::warn!(uid = %dashboard.uid, "Duplicate dashboard, emitting once");
                    continue;
                }
                Some(existing) => {
                    return Err(ExportError::Generation(format!(
                        "Dashboards '{}' and '{}' both map to resource name '{}'",
                        existing, dashboard.uid, name
                    )));
                }
                None => {
                    dashboard_names.insert(name.clone(), &dashboard.uid);
                }
            }

            let file_name = dashboard.uid.file_name();
            let path = format!("{}/{}", self.dashboards_dir.trim_end_matches('/'), file_name);

            blocks.push(resource_block(
                DASHBOARD_RESOURCE_TYPE,
                &name,
                [
                    Attribute::new(
                        "folder",
                        resource_attr(FOLDER_RESOURCE_TYPE, folder_name, "uid"),
                    ),
                    Attribute::new("config_json", json_file(&path)),
                    Attribute::new("overwrite", true),
                    depends_on([resource_ref(FOLDER_RESOURCE_TYPE, folder_name)]),
                ],
            ));

            artifact.documents.push(RenderedDocument {
                uid: dashboard.uid.clone(),
                file_name,
                content: dashboard.document.to_pretty_json()?,
            });
        }

        artifact.config = to_config_text(blocks)?;

        tracing::debug!(
            folders = artifact.folder_blocks,
            dashboards = artifact.dashboard_blocks(),
            skipped = artifact.skipped.len(),
            omitted = artifact.omitted.len(),
            "Rendered Terraform configuration"
        );

        for entry in skip.iter() {
            if !artifact.skipped.contains(entry) {
                tracing::warn!(resource = %entry, "Skip entry matched no dashboard");
            }
        }

        Ok(artifact)
    }
}

fn folder_resource_names(folders: &[&Folder]) -> Result<HashMap<FolderUid, ResourceName>> {
    let mut names: HashMap<FolderUid, ResourceName> = HashMap::with_capacity(folders.len());
    let mut owners: HashMap<ResourceName, &FolderUid> = HashMap::with_capacity(folders.len());

    for folder in folders {
        let name = ResourceName::for_folder(&folder.uid);
        if let Some(existing) = owners.get(&name) {
            return Err(ExportError::Generation(format!(
                "Folders '{}' and '{}' both map to resource name '{}'",
                existing, folder.uid, name
            )));
        }
        owners.insert(name.clone(), &folder.uid);
        names.insert(folder.uid.clone(), name);
    }

    Ok(names)
}
