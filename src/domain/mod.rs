//! Domain models and types for the exporter.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`FolderUid`], [`DashboardUid`], [`ResourceName`])
//! - **Domain models** ([`Folder`], [`Dashboard`], [`DashboardDocument`])
//! - **Error types** ([`ExportError`], [`GrafanaError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Folder and dashboard uids are distinct newtypes, and the Terraform
//! resource names derived from them are a third type, so a raw uid can never
//! be written where a sanitized resource name is expected:
//!
//! ```rust
//! use grafana_export::domain::{DashboardUid, ResourceName};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let uid = DashboardUid::new("abc-123")?;
//! let name = ResourceName::for_dashboard(&uid);
//! assert_eq!(name.as_str(), "d_abc_123");
//! # Ok(())
//! # }
//! ```

pub mod dashboard;
pub mod errors;
pub mod folder;
pub mod ids;
pub mod result;

// Re-export commonly used types for convenience
pub use dashboard::{Dashboard, DashboardDocument};
pub use errors::{ExportError, GrafanaError};
pub use folder::{Folder, RESERVED_FOLDER_TITLE};
pub use ids::{DashboardUid, FolderUid, ResourceName};
pub use result::Result;
