use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the editor pipeline.
///
/// None of these are fatal: the session turns each one into an inline message
/// or a transient notification and stays interactive.
#[derive(Debug, Error)]
pub enum EditorError {
    /// Non-empty input that is not valid JSON.
    #[error("Invalid JSON: {message}")]
    Parse { message: String },

    #[error("Error generating JSON: {0}")]
    Generation(String),

    /// The generated output could not be read back (e.g. to pull out `code`).
    #[error("Failed to read generated JSON: {0}")]
    OutputParse(String),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("write {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EditorError {
    pub(crate) fn parse(err: serde_json::Error) -> Self {
        EditorError::Parse {
            message: err.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard permission denied")]
    PermissionDenied,

    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard failure: {0}")]
    Failed(String),
}

impl ClipboardError {
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, ClipboardError::PermissionDenied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_message_is_prefixed() {
        let err = serde_json::from_str::<serde_json::Value>("{ bad").unwrap_err();
        let err = EditorError::parse(err);
        assert!(err.to_string().starts_with("Invalid JSON: "));
    }

    #[test]
    fn clipboard_errors_pass_through_unchanged() {
        let err = EditorError::from(ClipboardError::PermissionDenied);
        assert_eq!(err.to_string(), "clipboard permission denied");
    }
}
