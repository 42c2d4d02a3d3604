//! Domain identifier types with validation
//!
//! Newtype wrappers for Grafana uids and for the Terraform resource names
//! derived from them. Keeping folder and dashboard uids as distinct types
//! prevents passing one where the other is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Folder uid newtype wrapper
///
/// # Examples
///
/// ```
/// use grafana_export::domain::ids::FolderUid;
/// use std::str::FromStr;
///
/// let uid = FolderUid::from_str("team-a").unwrap();
/// assert_eq!(uid.as_str(), "team-a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FolderUid(String);

impl FolderUid {
    /// Creates a new FolderUid from a string
    ///
    /// Returns `Err` if the uid is empty or only whitespace.
    pub fn new(uid: impl Into<String>) -> Result<Self, String> {
        let uid = uid.into();
        if uid.trim().is_empty() {
            return Err("Folder uid cannot be empty".to_string());
        }
        Ok(Self(uid))
    }

    /// Returns the folder uid as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for FolderUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FolderUid {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for FolderUid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Dashboard uid newtype wrapper
///
/// The uid doubles as the file name of the exported document, so path
/// separators and relative path components are rejected.
///
/// # Examples
///
/// ```
/// use grafana_export::domain::ids::DashboardUid;
///
/// let uid = DashboardUid::new("abc123").unwrap();
/// assert_eq!(uid.file_name(), "abc123.json");
///
/// assert!(DashboardUid::new("../etc").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DashboardUid(String);

impl DashboardUid {
    /// Creates a new DashboardUid from a string
    pub fn new(uid: impl Into<String>) -> Result<Self, String> {
        let uid = uid.into();
        if uid.trim().is_empty() {
            return Err("Dashboard uid cannot be empty".to_string());
        }
        if uid.contains('/') || uid.contains('\\') || uid == "." || uid == ".." {
            return Err(format!(
                "Dashboard uid '{uid}' cannot be used as a file name"
            ));
        }
        Ok(Self(uid))
    }

    /// Returns the dashboard uid as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the JSON document written for this dashboard
    pub fn file_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl fmt::Display for DashboardUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DashboardUid {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for DashboardUid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Prefix that distinguishes dashboard resource names from folder resource names
pub const DASHBOARD_RESOURCE_PREFIX: &str = "d_";

/// Terraform resource name derived from a Grafana uid
///
/// Terraform names may only contain letters, digits, underscores and dashes
/// and must not start with a digit. Every character outside
/// `[A-Za-z0-9_]` is replaced with `_`, which also turns dashes into
/// underscores.
///
/// # Examples
///
/// ```
/// use grafana_export::domain::ids::{DashboardUid, FolderUid, ResourceName};
///
/// let folder = FolderUid::new("team-a").unwrap();
/// assert_eq!(ResourceName::for_folder(&folder).as_str(), "team_a");
///
/// let dashboard = DashboardUid::new("abc-123").unwrap();
/// assert_eq!(ResourceName::for_dashboard(&dashboard).as_str(), "d_abc_123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceName(String);

impl ResourceName {
    /// Resource name for a `grafana_folder` block
    pub fn for_folder(uid: &FolderUid) -> Self {
        let name = sanitize(uid.as_str());
        if name.starts_with(|c: char| c.is_ascii_digit()) {
            Self(format!("_{name}"))
        } else {
            Self(name)
        }
    }

    /// Resource name for a `grafana_dashboard` block
    pub fn for_dashboard(uid: &DashboardUid) -> Self {
        Self(format!("{DASHBOARD_RESOURCE_PREFIX}{}", sanitize(uid.as_str())))
    }

    /// Normalizes a user-supplied resource name with the same substitution rule
    ///
    /// Used for skip-list entries so `d_my-dash` and `d_my_dash` name the
    /// same resource.
    pub fn normalize(raw: &str) -> Self {
        Self(sanitize(raw.trim()))
    }

    /// Returns the resource name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ResourceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
