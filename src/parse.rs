use serde_json::Value;

use crate::codec::decode_code;
use crate::error::EditorError;
use crate::model::{Field, Manifest, Port};
use crate::profile::Profile;

/// Parses raw input text into a manifest.
///
/// Whitespace-only input is not an error: it yields `Ok(None)` ("nothing
/// loaded"). Recognized keys are mapped one by one, each falling back to the
/// profile default; unknown keys are dropped.
pub fn parse_manifest(raw: &str, profile: Profile) -> Result<Option<Manifest>, EditorError> {
    match parse_document(raw)? {
        Some(doc) => Ok(Some(manifest_from_value(&doc, profile))),
        None => Ok(None),
    }
}

/// Strict JSON parse of the raw text, keeping the document as-is.
pub fn parse_document(raw: &str) -> Result<Option<Value>, EditorError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(raw)
        .map(Some)
        .map_err(EditorError::parse)
}

/// Maps any JSON value onto a manifest. Non-object roots produce defaults.
pub fn manifest_from_value(doc: &Value, profile: Profile) -> Manifest {
    let defaults = profile.default_manifest();
    let fixed = |field| profile.is_read_only(field);

    Manifest {
        commentary: string_or(doc, "commentary", defaults.commentary),
        template: if fixed(Field::Template) {
            defaults.template
        } else {
            string_or(doc, "template", defaults.template)
        },
        title: string_or(doc, "title", defaults.title),
        description: string_or(doc, "description", defaults.description),
        additional_dependencies: doc
            .get("additional_dependencies")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or(defaults.additional_dependencies),
        has_additional_dependencies: doc
            .get("has_additional_dependencies")
            .map(truthy)
            .unwrap_or(defaults.has_additional_dependencies),
        install_dependencies_command: string_or(
            doc,
            "install_dependencies_command",
            defaults.install_dependencies_command,
        ),
        port: if fixed(Field::Port) {
            defaults.port
        } else {
            port_or(doc, defaults.port)
        },
        file_path: if fixed(Field::FilePath) {
            defaults.file_path
        } else {
            string_or(doc, "file_path", defaults.file_path)
        },
        code: doc
            .get("code")
            .and_then(Value::as_str)
            .map(decode_code)
            .unwrap_or(defaults.code),
    }
}

fn string_or(doc: &Value, key: &str, default: String) -> String {
    match doc.get(key).and_then(Value::as_str) {
        Some(s) => s.to_string(),
        None => default,
    }
}

fn port_or(doc: &Value, default: Port) -> Port {
    match doc.get("port") {
        Some(Value::Number(n)) => n.as_u64().map(Port::Number).unwrap_or(default),
        Some(Value::String(s)) if !s.is_empty() => Port::Text(s.clone()),
        _ => default,
    }
}

fn truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
#[path = "tests/parse_tests.rs"]
mod tests;
