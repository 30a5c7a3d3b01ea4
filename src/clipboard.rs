use crate::error::ClipboardError;

/// Plain text clipboard.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
    fn get_text(&mut self) -> Result<String, ClipboardError>;
}

/// The platform clipboard. The handle is opened on first use so that a
/// missing display server only fails the action that needed it.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard, ClipboardError> {
        if self.inner.is_none() {
            self.inner = Some(arboard::Clipboard::new().map_err(classify)?);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ClipboardError::Unavailable("clipboard not initialized".to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.handle()?.set_text(text.to_string()).map_err(classify)
    }

    fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.handle()?.get_text().map_err(classify)
    }
}

fn classify(err: arboard::Error) -> ClipboardError {
    match err {
        arboard::Error::ClipboardNotSupported => {
            ClipboardError::Unavailable("not supported on this platform".to_string())
        }
        arboard::Error::ContentNotAvailable => {
            ClipboardError::Failed("no text on the clipboard".to_string())
        }
        arboard::Error::Unknown { description } => classify_description(description),
        other => ClipboardError::Failed(other.to_string()),
    }
}

fn classify_description(description: String) -> ClipboardError {
    let lower = description.to_lowercase();
    if lower.contains("permission") || lower.contains("denied") || lower.contains("not allowed") {
        ClipboardError::PermissionDenied
    } else {
        ClipboardError::Failed(description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_wording_maps_to_permission_denied() {
        assert_eq!(
            classify_description("Permission denied by compositor".into()),
            ClipboardError::PermissionDenied
        );
        assert_eq!(
            classify_description("X11 server connection timed out".into()),
            ClipboardError::Failed("X11 server connection timed out".into())
        );
    }

    #[test]
    fn empty_clipboard_is_a_generic_failure() {
        assert!(matches!(
            classify(arboard::Error::ContentNotAvailable),
            ClipboardError::Failed(_)
        ));
        assert!(matches!(
            classify(arboard::Error::ClipboardNotSupported),
            ClipboardError::Unavailable(_)
        ));
    }
}
