//! Core business logic for the exporter.
//!
//! # Modules
//!
//! - [`fetch`] - Folder traversal and dashboard fetching
//! - [`select`] - Dashboard selection by folder
//! - [`transform`] - Dashboard document sanitizing
//! - [`generate`] - Terraform rendering and writing
//! - [`export`] - Export orchestration and summary
//!
//! # Export Workflow
//!
//! 1. **Resolve folders**: walk the tree under the requested top-level folders
//! 2. **Fetch dashboards**: search, then fetch and sanitize each dashboard
//! 3. **Select**: keep dashboards whose folder was resolved
//! 4. **Render**: one `grafana_folder` block per folder, one
//!    `grafana_dashboard` block per dashboard
//! 5. **Write**: `dashboards/<uid>.json` per dashboard, then `grafana.tf`
//! 6. **Report**: export summary
//!
//! # Example
//!
//! ```rust,no_run
//! use grafana_export::config::load_config;
//! use grafana_export::core::export::ExportCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("grafana-export.toml")?;
//! config.validate()?;
//!
//! let coordinator = ExportCoordinator::new(config)?;
//! let summary = coordinator.execute_export().await?;
//!
//! println!("Folders: {}", summary.folders_found);
//! println!("Dashboards: {}", summary.dashboards_emitted);
//! println!("Issues: {}", summary.issues.len());
//! # Ok(())
//! # }
//! ```

pub mod export;
pub mod fetch;
pub mod generate;
pub mod select;
pub mod transform;
