//! Result type alias for the exporter

use super::errors::ExportError;

/// Result type alias for exporter operations
///
/// # Examples
///
/// ```
/// use grafana_export::domain::result::Result;
/// use grafana_export::domain::errors::ExportError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ExportError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ExportError>;
