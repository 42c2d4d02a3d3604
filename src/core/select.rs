//! Dashboard selection by folder membership

use crate::domain::{Dashboard, Folder, FolderUid};
use std::collections::HashSet;

/// Keep the dashboards whose folder is among `folders`
///
/// Dashboards without a folder (the General folder) are never selected.
/// Input order is preserved.
pub fn select(dashboards: Vec<Dashboard>, folders: &[Folder]) -> Vec<Dashboard> {
    let in_scope: HashSet<&FolderUid> = folders.iter().map(|f| &f.uid).collect();

    dashboards
        .into_iter()
        .filter(|d| d.folder_uid.as_ref().is_some_and(|uid| in_scope.contains(uid)))
        .collect()
}
