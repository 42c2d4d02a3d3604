//! Volatile-field stripping for dashboard models
//!
//! Grafana assigns `id`, `version` and `gnetId` per instance. Left in the
//! exported document they would collide with the import target or produce a
//! diff on every export, so they are removed. `editable` is forced on so the
//! provisioned dashboard can still be changed from the UI.

use crate::domain::{DashboardDocument, Result};
use serde_json::Value;

/// Top-level keys that are assigned by the Grafana instance
pub const VOLATILE_FIELDS: [&str; 3] = ["version", "id", "gnetId"];

/// Remove instance-assigned keys and force `editable = true`
///
/// Every other key is carried through untouched.
///
/// # Errors
///
/// Returns a validation error if the dashboard model is not a JSON object.
///
/// # Examples
///
/// ```
/// use grafana_export::core::transform::strip_volatile_fields;
/// use serde_json::json;
///
/// let doc = strip_volatile_fields(json!({
///     "id": 42,
///     "uid": "abc",
///     "version": 7,
///     "title": "Latency",
///     "editable": false
/// }))
/// .unwrap();
///
/// assert!(doc.get("id").is_none());
/// assert!(doc.get("version").is_none());
/// assert_eq!(doc.get("editable"), Some(&json!(true)));
/// assert_eq!(doc.get("uid"), Some(&json!("abc")));
/// ```
pub fn strip_volatile_fields(dashboard: Value) -> Result<DashboardDocument> {
    let mut document = DashboardDocument::new(dashboard)?;
    let fields = document.fields_mut();

    for key in VOLATILE_FIELDS {
        fields.remove(key);
    }
    fields.insert("editable".to_string(), Value::Bool(true));

    Ok(document)
}
