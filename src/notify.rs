use std::time::{Duration, Instant};

use crate::error::ClipboardError;

pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn label(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

/// A transient, self-expiring message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub expires_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind, now: Instant, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            kind,
            expires_at: now + ttl,
        }
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        self.expires_at > now
    }
}

/// Notification text for a failed clipboard write.
pub fn copy_failure_message(err: &ClipboardError) -> &'static str {
    if err.is_permission_denied() {
        "Clipboard permission denied"
    } else {
        "Failed to copy to clipboard"
    }
}

/// Notification text for a failed clipboard read.
pub fn paste_failure_message(err: &ClipboardError) -> &'static str {
    if err.is_permission_denied() {
        "Clipboard permission denied. Please allow clipboard access."
    } else {
        "Failed to read from clipboard"
    }
}
