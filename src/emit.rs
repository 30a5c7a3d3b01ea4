use serde_json::Value;

use crate::codec::{decode_code, encode_code};
use crate::error::EditorError;
use crate::model::Manifest;

/// Renders the persisted form of a manifest: pretty JSON with two-space
/// indentation and the full key set.
///
/// `code` is re-escaped, and when the dependency flag is off the list and the
/// command are emitted empty whatever the in-memory values are.
pub fn serialize_manifest(manifest: &Manifest) -> Result<String, EditorError> {
    let mut doc = manifest.clone();
    doc.code = encode_code(&manifest.code);
    if !doc.has_additional_dependencies {
        doc.additional_dependencies.clear();
        doc.install_dependencies_command.clear();
    }
    serde_json::to_string_pretty(&doc).map_err(|err| EditorError::Generation(err.to_string()))
}

/// Pulls the decoded `code` back out of generated output.
pub fn extract_code(output: &str) -> Result<String, EditorError> {
    let doc: Value =
        serde_json::from_str(output).map_err(|err| EditorError::OutputParse(err.to_string()))?;
    match doc.get("code") {
        Some(Value::String(code)) => Ok(decode_code(code)),
        Some(_) => Err(EditorError::OutputParse("`code` is not a string".to_string())),
        None => Err(EditorError::OutputParse("missing `code` field".to_string())),
    }
}
