//! Folder domain model

use super::ids::FolderUid;
use serde::{Deserialize, Serialize};

/// Title of the reserved system folder that is never exported
pub const RESERVED_FOLDER_TITLE: &str = "GrafanaCloud";

/// A Grafana folder as resolved by the folder fetcher
///
/// Immutable once created; the parent link is kept so the generator can
/// declare the dependency between nested folders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Folder uid
    pub uid: FolderUid,

    /// Display title
    pub title: String,

    /// Parent folder uid, if the folder is nested
    pub parent_uid: Option<FolderUid>,
}

impl Folder {
    /// Create a top-level folder
    pub fn new(uid: FolderUid, title: impl Into<String>) -> Self {
        Self {
            uid,
            title: title.into(),
            parent_uid: None,
        }
    }

    /// Set the parent folder
    pub fn with_parent(mut self, parent_uid: FolderUid) -> Self {
        self.parent_uid = Some(parent_uid);
        self
    }

    /// Whether this is the reserved system folder
    pub fn is_reserved(&self) -> bool {
        is_reserved_title(&self.title)
    }
}

/// Whether a folder title names the reserved system folder
pub fn is_reserved_title(title: &str) -> bool {
    title == RESERVED_FOLDER_TITLE
}
