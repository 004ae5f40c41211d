//! Flat property documents
//!
//! Cluster configuration files are key/value documents. They may be written
//! as TOML, JSON or YAML; nested tables flatten to dotted keys so that
//! `hive.llap.io.memory.size = "1g"` and `"hive.llap.io.memory.size" = "1g"`
//! load to the same property.

use crate::{Error, Result, io};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

/// An ordered key/value property map.
pub type Properties = BTreeMap<String, String>;

/// Format-agnostic property document store.
///
/// Format is detected from the file extension:
/// - `.toml` -> TOML
/// - `.json` -> JSON
/// - `.yaml`, `.yml` -> YAML
#[derive(Debug, Default, Clone, Copy)]
pub struct PropertyStore;

impl PropertyStore {
    pub fn new() -> Self {
        Self
    }

    /// Load a property document and flatten it into [`Properties`].
    ///
    /// Scalars are stringified, arrays are joined with `,` and nulls are
    /// skipped.
    pub fn load(&self, path: &Path) -> Result<Properties> {
        let content = io::read_text(path)?;
        let (format, value) = match extension(path).as_str() {
            "toml" => ("TOML", toml::from_str::<Value>(&content).map_err(|e| e.to_string())),
            "json" => ("JSON", serde_json::from_str::<Value>(&content).map_err(|e| e.to_string())),
            "yaml" | "yml" => (
                "YAML",
                serde_yaml::from_str::<Value>(&content).map_err(|e| e.to_string()),
            ),
            other => {
                return Err(Error::UnsupportedFormat {
                    extension: other.to_string(),
                });
            }
        };

        let parse_error = |message: String| Error::ConfigParse {
            path: path.to_path_buf(),
            format: format.into(),
            message,
        };

        let table = match value.map_err(parse_error)? {
            Value::Object(table) => table,
            // An empty YAML document parses as null.
            Value::Null => return Ok(Properties::new()),
            _ => return Err(parse_error("expected a table of properties".into())),
        };

        let mut properties = Properties::new();
        for (key, value) in &table {
            flatten(key, value, &mut properties);
        }
        Ok(properties)
    }

    /// Serialize properties in the format named by `path`'s extension.
    ///
    /// Only renders; the caller decides how the document is written.
    pub fn render(&self, path: &Path, properties: &Properties) -> Result<String> {
        let serialize_error = |format: &str, message: String| Error::ConfigSerialize {
            path: path.to_path_buf(),
            format: format.into(),
            message,
        };

        match extension(path).as_str() {
            "toml" => toml::to_string_pretty(properties)
                .map_err(|e| serialize_error("TOML", e.to_string())),
            "json" => serde_json::to_string_pretty(properties)
                .map_err(|e| serialize_error("JSON", e.to_string())),
            "yaml" | "yml" => {
                serde_yaml::to_string(properties).map_err(|e| serialize_error("YAML", e.to_string()))
            }
            other => Err(Error::UnsupportedFormat {
                extension: other.to_string(),
            }),
        }
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

fn flatten(key: &str, value: &Value, out: &mut Properties) {
    match value {
        Value::Object(table) => {
            for (child, value) in table {
                flatten(&format!("{key}.{child}"), value, out);
            }
        }
        Value::Null => {}
        Value::String(s) => {
            out.insert(key.to_string(), s.clone());
        }
        Value::Array(items) => {
            let joined = items
                .iter()
                .filter_map(scalar_to_string)
                .collect::<Vec<_>>()
                .join(",");
            out.insert(key.to_string(), joined);
        }
        other => {
            out.insert(key.to_string(), other.to_string());
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(_) | Value::Number(_) => Some(value.to_string()),
        _ => None,
    }
}
