//! Terraform artifact generation
//!
//! - [`resources`] - `hcl-rs` resource blocks and formatting
//! - [`skip`] - dashboard resource names to leave out
//! - [`terraform`] - folder and dashboard resource rendering
//! - [`writer`] - writing the configuration and documents to disk

pub mod resources;
pub mod skip;
pub mod terraform;
pub mod writer;

pub use skip::SkipSet;
pub use terraform::{
    GeneratedArtifact, RenderedDocument, TerraformGenerator, DASHBOARD_RESOURCE_TYPE,
    FOLDER_RESOURCE_TYPE,
};
pub use writer::{ArtifactWriter, WriteReport};
