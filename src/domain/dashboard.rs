//! Dashboard domain model
//!
//! The dashboard document is kept as an opaque JSON tree. The exporter only
//! ever touches the handful of instance-assigned keys removed by
//! [`crate::core::transform::strip_volatile_fields`]; everything else is
//! carried through untouched so the model stays schema-agnostic.

use super::errors::ExportError;
use super::ids::{DashboardUid, FolderUid};
use super::result::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Dashboard JSON model, guaranteed to be a JSON object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DashboardDocument(Map<String, Value>);

impl DashboardDocument {
    /// Wraps a JSON value, rejecting anything that is not an object
    pub fn new(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ExportError::Validation(format!(
                "Dashboard model must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Read-only access to the top-level keys
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub(crate) fn fields_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.0
    }

    /// Look up a top-level key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Pretty-printed JSON with a trailing newline
    ///
    /// Keys come out in lexicographic order, so the same document always
    /// renders to the same bytes.
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut text = serde_json::to_string_pretty(&self.0)?;
        text.push('\n');
        Ok(text)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A Grafana dashboard with its hydrated document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Dashboard uid
    pub uid: DashboardUid,

    /// Display title
    pub title: String,

    /// Containing folder, `None` for dashboards in the General folder
    pub folder_uid: Option<FolderUid>,

    /// Sanitized dashboard model
    pub document: DashboardDocument,
}

impl Dashboard {
    /// Create a new dashboard
    pub fn new(
        uid: DashboardUid,
        title: impl Into<String>,
        folder_uid: Option<FolderUid>,
        document: DashboardDocument,
    ) -> Self {
        Self {
            uid,
            title: title.into(),
            folder_uid,
            document,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_requires_object() {
        assert!(DashboardDocument::new(json!({"title": "X"})).is_ok());

        let err = DashboardDocument::new(json!([1, 2])).unwrap_err();
        assert!(err.to_string().contains("an array"));
        assert!(DashboardDocument::new(Value::Null).is_err());
    }

    #[test]
    fn test_pretty_json_is_sorted_and_terminated() {
        let doc = DashboardDocument::new(json!({"title": "X", "panels": [], "editable": true}))
            .unwrap();
        let text = doc.to_pretty_json().unwrap();

        assert!(text.ends_with("}\n"));
        let editable = text.find("\"editable\"").unwrap();
        let panels = text.find("\"panels\"").unwrap();
        let title = text.find("\"title\"").unwrap();
        assert!(editable < panels && panels < title);
        assert!(text.contains("\n  \"title\": \"X\""));
    }

    #[test]
    fn test_document_serializes_transparently() {
        let doc = DashboardDocument::new(json!({"a": 1})).unwrap();
        assert_eq!(serde_json::to_value(&doc).unwrap(), json!({"a": 1}));
    }
}
