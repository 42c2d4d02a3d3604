//! Grafana adapter implementation
//!
//! This module provides the integration with the Grafana HTTP API: the
//! [`GrafanaApi`] trait the fetchers depend on, the `reqwest`-backed
//! [`GrafanaClient`], and the response models.

pub mod api;
pub mod client;
pub mod models;

pub use api::GrafanaApi;
pub use client::GrafanaClient;
pub use models::{DashboardEnvelope, DashboardHit, FolderDetail, FolderSummary};
