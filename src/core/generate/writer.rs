//! Writing the generated artifact to disk

use super::terraform::GeneratedArtifact;
use crate::config::ExportConfig;
use crate::domain::{ExportError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// What was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub config_path: PathBuf,
    pub documents_written: usize,
}

/// Writes the configuration file and the dashboard documents
///
/// Layout under `output_dir`:
///
/// ```text
/// <output_dir>/<output_file>
/// <output_dir>/<dashboards_dir>/<uid>.json
/// ```
///
/// Existing files are overwritten. Nothing is cleaned up if a write fails
/// part way through.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    output_dir: PathBuf,
    output_file: String,
    dashboards_dir: String,
}

impl ArtifactWriter {
    pub fn new(
        output_dir: impl Into<PathBuf>,
        output_file: impl Into<String>,
        dashboards_dir: impl Into<String>,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            output_file: output_file.into(),
            dashboards_dir: dashboards_dir.into(),
        }
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(
            &config.output_dir,
            config.output_file.clone(),
            config.dashboards_dir.clone(),
        )
    }

    /// Path of the Terraform configuration file
    pub fn config_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }

    /// Directory holding the dashboard documents
    pub fn dashboards_path(&self) -> PathBuf {
        self.output_dir.join(&self.dashboards_dir)
    }

    /// Write documents first, then the configuration
    pub fn write(&self, artifact: &GeneratedArtifact) -> Result<WriteReport> {
        let dashboards_path = self.dashboards_path();
        create_dir(&dashboards_path)?;

        for document in &artifact.documents {
            let path = dashboards_path.join(&document.file_name);
            write_file(&path, &document.content)?;
            tracing::debug!(path = %path.display(), "Wrote dashboard document");
        }

        let config_path = self.config_path();
        if let Some(parent) = config_path.parent() {
            create_dir(parent)?;
        }
        write_file(&config_path, &artifact.config)?;

        tracing::info!(
            path = %config_path.display(),
            documents = artifact.documents.len(),
            "Wrote Terraform configuration"
        );

        Ok(WriteReport {
            config_path,
            documents_written: artifact.documents.len(),
        })
    }
}

fn create_dir(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|e| {
        ExportError::Io(format!(
            "Failed to create directory {}: {}",
            path.display(),
            e
        ))
    })
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| ExportError::Io(format!("Failed to write {}: {}", path.display(), e)))
}
