//! Export orchestration
//!
//! This module provides the export workflow, including:
//! - Export coordination and orchestration
//! - Summary and reporting

pub mod coordinator;
pub mod summary;

pub use coordinator::ExportCoordinator;
pub use summary::{ExportIssue, ExportSummary, IssueKind};
