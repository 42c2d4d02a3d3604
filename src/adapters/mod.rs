//! External system integrations.
//!
//! - [`grafana`] - Grafana HTTP API client
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies behind traits so the core logic can
//! be tested with in-memory implementations.
//!
//! ```rust,no_run
//! use grafana_export::adapters::grafana::{GrafanaApi, GrafanaClient};
//! use grafana_export::config::{secret_string, GrafanaConfig};
//! use std::sync::Arc;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GrafanaConfig {
//!     url: "https://grafana.example.com".to_string(),
//!     api_key: Some(secret_string("glsa_example".to_string())),
//!     ..Default::default()
//! };
//!
//! let api: Arc<dyn GrafanaApi> = Arc::new(GrafanaClient::new(&config)?);
//! # Ok(())
//! # }
//! ```

pub mod grafana;
