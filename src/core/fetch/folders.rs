//! Folder discovery and hierarchy traversal

use super::Fetched;
use crate::adapters::grafana::models::{FolderDetail, FolderSummary};
use crate::adapters::grafana::GrafanaApi;
use crate::core::export::summary::ExportIssue;
use crate::domain::folder::is_reserved_title;
use crate::domain::{ExportError, Folder, FolderUid};
use std::collections::HashSet;
use std::sync::Arc;

/// Resolves the set of folders to export
///
/// Roots are chosen among the top-level folders (all of them, or those whose
/// title matches one of the requested names) and every root is walked depth
/// first, parents before children. Each folder uid is visited at most once,
/// which makes the walk safe against cyclic parent links and overlapping
/// roots. The reserved `GrafanaCloud` folder is never exported, and neither
/// is anything beneath it.
pub struct FolderFetcher {
    api: Arc<dyn GrafanaApi>,
}

impl FolderFetcher {
    pub fn new(api: Arc<dyn GrafanaApi>) -> Self {
        Self { api }
    }

    /// Resolve the folders under the requested top-level titles
    ///
    /// An empty `target_names` selects every top-level folder. Names that
    /// match no top-level folder are reported as warnings.
    pub async fn resolve(&self, target_names: &[String]) -> Fetched<Folder> {
        let mut fetched = Fetched::new();

        let top_level = match self.api.list_folders(None).await {
            Ok(folders) => folders,
            Err(e) => {
                crate::log_fetch_failure!(&e, "top-level folders");
                fetched.issue(ExportIssue::from_error(&e).with_context("top-level folders"));
                return fetched;
            }
        };

        if top_level.is_empty() {
            tracing::info!("No folders found in the Grafana instance");
        }

        let roots = select_roots(&top_level, target_names, &mut fetched);
        tracing::debug!(roots = roots.len(), "Selected root folders");

        let mut visited = HashSet::new();
        for root in roots {
            self.walk(root, &mut visited, &mut fetched).await;
        }

        tracing::info!(count = fetched.items.len(), "Resolved folders");
        fetched
    }

    /// Walk one subtree in pre-order using an explicit stack
    async fn walk(
        &self,
        root: FolderUid,
        visited: &mut HashSet<FolderUid>,
        fetched: &mut Fetched<Folder>,
    ) {
        let mut stack = vec![root];

        while let Some(uid) = stack.pop() {
            if !visited.insert(uid.clone()) {
                tracing::debug!(folder_uid = %uid, "Folder already visited");
                continue;
            }

            let detail = match self.api.get_folder(&uid).await {
                Ok(detail) => detail,
                Err(e) => {
                    let context = format!("folder={uid}");
                    crate::log_fetch_failure!(&e, &context);
                    fetched.issue(ExportIssue::from_error(&e).with_context(context));
                    continue;
                }
            };

            if is_reserved_title(&detail.title) {
                tracing::info!(folder_uid = %uid, title = %detail.title, "Skipping reserved folder");
                continue;
            }

            fetched.items.push(to_folder(uid.clone(), detail));

            let children = match self.api.list_folders(Some(&uid)).await {
                Ok(children) => children,
                Err(e) => {
                    let context = format!("children of folder={uid}");
                    crate::log_fetch_failure!(&e, &context);
                    fetched.issue(ExportIssue::from_error(&e).with_context(context));
                    continue;
                }
            };

            // Reversed so the first listed child is popped first
            for child in children.into_iter().rev() {
                match FolderUid::new(child.uid) {
                    Ok(child_uid) if !visited.contains(&child_uid) => stack.push(child_uid),
                    Ok(_) => {}
                    Err(e) => {
                        tracing::warn!(parent = %uid, title = %child.title, error = %e, "Ignoring child folder");
                        fetched.issue(
                            ExportIssue::from_error(&ExportError::Validation(e))
                                .with_context(format!("child of folder={uid}")),
                        );
                    }
                }
            }
        }
    }
}

fn select_roots(
    top_level: &[FolderSummary],
    target_names: &[String],
    fetched: &mut Fetched<Folder>,
) -> Vec<FolderUid> {
    let candidates: Vec<&FolderSummary> = if target_names.is_empty() {
        top_level.iter().collect()
    } else {
        let mut matched = Vec::new();
        for name in target_names {
            let hits: Vec<&FolderSummary> =
                top_level.iter().filter(|f| &f.title == name).collect();
            if hits.is_empty() {
                tracing::warn!(folder_name = %name, "Folder not found among top-level folders");
                fetched.warn(format!("Folder '{name}' not found"));
            }
            matched.extend(hits);
        }
        matched
    };

    let mut roots = Vec::with_capacity(candidates.len());
    for summary in candidates {
        match FolderUid::new(summary.uid.as_str()) {
            Ok(uid) => roots.push(uid),
            Err(e) => {
                tracing::warn!(title = %summary.title, error = %e, "Ignoring top-level folder");
                fetched.issue(
                    ExportIssue::from_error(&ExportError::Validation(e))
                        .with_context(format!("top-level folder '{}'", summary.title)),
                );
            }
        }
    }
    roots
}

fn to_folder(uid: FolderUid, detail: FolderDetail) -> Folder {
    let folder = Folder::new(uid, detail.title);
    match detail.parent_uid.map(FolderUid::new) {
        Some(Ok(parent)) => folder.with_parent(parent),
        _ => folder,
    }
}
