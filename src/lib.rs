// grafana-export - Grafana folders and dashboards to Terraform
// Copyright (c) 2025 grafana-export Contributors
// Licensed under the MIT License

//! # grafana-export
//!
//! Exports the folders and dashboards of a Grafana instance as Terraform
//! configuration for the Grafana provider, plus one JSON document per
//! dashboard.
//!
//! ## Overview
//!
//! - **Resolving** the folder tree under selected top-level folders, depth
//!   first, with cycle protection and the `GrafanaCloud` folder excluded
//! - **Fetching** every dashboard and stripping instance-assigned fields
//! - **Selecting** the dashboards whose folder was resolved
//! - **Generating** `grafana_folder` and `grafana_dashboard` resources and
//!   writing `dashboards/<uid>.json` next to the configuration
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (fetch, select, transform, generate, export)
//! - [`adapters`] - External integrations (Grafana HTTP API)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use grafana_export::config::load_config;
//! use grafana_export::core::export::ExportCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("grafana-export.toml")?;
//!     config.validate()?;
//!
//!     let coordinator = ExportCoordinator::new(config)?;
//!     let summary = coordinator.execute_export().await?;
//!
//!     println!("Exported {} dashboards", summary.dashboards_emitted);
//!     Ok(())
//! }
//! ```
//!
//! ## Generated Output
//!
//! ```text
//! resource "grafana_folder" "f1" {
//!   title = "Team A"
//!   uid = "f1"
//! }
//!
//! resource "grafana_dashboard" "d_d1" {
//!   folder = grafana_folder.f1.uid
//!   config_json = jsonencode(jsondecode(file("dashboards/d1.json")))
//!   overwrite = true
//!   depends_on = [grafana_folder.f1]
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fatal errors use [`domain::ExportError`]. Failures on individual folders
//! or dashboards do not stop the export; they are recorded as issues in the
//! [`core::export::ExportSummary`].

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
