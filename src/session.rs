use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use serde_json::Value;

use crate::clipboard::Clipboard;
use crate::edit;
use crate::emit::{extract_code, serialize_manifest};
use crate::error::EditorError;
use crate::export;
use crate::model::{FieldUpdate, Manifest};
use crate::notify::{
    DEFAULT_NOTIFICATION_TTL, Notification, NotificationKind, copy_failure_message,
    paste_failure_message,
};
use crate::parse::{manifest_from_value, parse_document};
use crate::profile::Profile;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    Input,
    Edit,
    Output,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Input, Tab::Edit, Tab::Output];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Input => "Input",
            Tab::Edit => "Create/Edit",
            Tab::Output => "Output",
        }
    }
}

/// Owns the manifest being edited and all transient UI state around it.
///
/// The manifest itself only changes through the pure transitions in
/// [`crate::edit`]; the session swaps in each returned value.
pub struct Session {
    profile: Profile,
    notification_ttl: Duration,

    tab: Tab,
    raw_input: String,
    parsed: Option<Value>,
    parse_error: Option<String>,
    creating_new: bool,

    manifest: Manifest,
    original_code: String,

    output: Option<String>,
    generation_error: Option<String>,

    notification: Option<Notification>,
}

impl Session {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            notification_ttl: DEFAULT_NOTIFICATION_TTL,
            tab: Tab::Input,
            raw_input: String::new(),
            parsed: None,
            parse_error: None,
            creating_new: false,
            manifest: profile.default_manifest(),
            original_code: String::new(),
            output: None,
            generation_error: None,
            notification: None,
        }
    }

    pub fn with_notification_ttl(mut self, ttl: Duration) -> Self {
        self.notification_ttl = ttl;
        self
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn parsed(&self) -> Option<&Value> {
        self.parsed.as_ref()
    }

    pub fn parse_error(&self) -> Option<&str> {
        self.parse_error.as_deref()
    }

    pub fn generation_error(&self) -> Option<&str> {
        self.generation_error.as_deref()
    }

    pub fn is_creating_new(&self) -> bool {
        self.creating_new
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn original_code(&self) -> &str {
        &self.original_code
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    pub fn can_edit(&self) -> bool {
        self.parsed.is_some() || self.creating_new
    }

    pub fn can_view_output(&self) -> bool {
        self.output.is_some()
    }

    pub fn is_available(&self, tab: Tab) -> bool {
        match tab {
            Tab::Input => true,
            Tab::Edit => self.can_edit(),
            Tab::Output => self.can_view_output(),
        }
    }

    /// Switches tabs. Unavailable tabs are refused.
    pub fn open_tab(&mut self, tab: Tab) -> bool {
        if !self.is_available(tab) {
            return false;
        }
        self.tab = tab;
        true
    }

    // Input stage

    /// Records new input text and re-parses it.
    ///
    /// The text is always kept. A parse failure leaves the last good manifest
    /// alone; empty text unloads the document without reporting an error.
    pub fn input_changed(&mut self, raw: impl Into<String>) {
        self.raw_input = raw.into();
        self.parse_error = None;

        match parse_document(&self.raw_input) {
            Ok(None) => {
                self.parsed = None;
            }
            Ok(Some(doc)) => {
                self.manifest = manifest_from_value(&doc, self.profile);
                self.original_code = self.manifest.code.clone();
                self.parsed = Some(doc);
                self.creating_new = false;
            }
            Err(err) => {
                self.parse_error = Some(err.to_string());
                self.parsed = None;
            }
        }
    }

    /// Starts an all-defaults document and jumps to the edit tab.
    pub fn start_new(&mut self) {
        self.manifest = self.profile.default_manifest();
        self.original_code = String::new();
        self.creating_new = true;
        self.tab = Tab::Edit;
    }

    // Edit stage

    pub fn apply(&mut self, update: FieldUpdate) {
        self.manifest = edit::set_field(&self.manifest, update);
    }

    pub fn add_dependency(&mut self) {
        self.manifest = edit::add_dependency(&self.manifest);
    }

    pub fn set_dependency(&mut self, index: usize, value: impl Into<String>) {
        self.manifest = edit::set_dependency(&self.manifest, index, value.into());
    }

    pub fn remove_dependency(&mut self, index: usize) {
        self.manifest = edit::remove_dependency(&self.manifest, index);
    }

    /// Indices (0-based) of lines that differ between the edited code and
    /// the code captured when the document was loaded. A line present on
    /// only one side counts as changed.
    pub fn code_changed_lines(&self) -> Vec<usize> {
        let original: Vec<&str> = self.original_code.split('\n').collect();
        let edited: Vec<&str> = self.manifest.code.split('\n').collect();
        (0..original.len().max(edited.len()))
            .filter(|&i| original.get(i) != edited.get(i))
            .collect()
    }

    pub fn code_is_modified(&self) -> bool {
        self.manifest.code != self.original_code
    }

    // Output stage

    /// Serializes the manifest and opens the output tab.
    ///
    /// On failure the message is kept inline and the tab does not change.
    pub fn generate(&mut self) -> Result<&str, EditorError> {
        match serialize_manifest(&self.manifest) {
            Ok(out) => {
                self.generation_error = None;
                self.tab = Tab::Output;
                Ok(self.output.insert(out).as_str())
            }
            Err(err) => {
                self.generation_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn copy_output(&mut self, clipboard: &mut dyn Clipboard, now: Instant) {
        let Some(out) = self.output.clone() else {
            self.notify("Nothing generated yet", NotificationKind::Error, now);
            return;
        };
        match clipboard.set_text(&out) {
            Ok(()) => self.notify("JSON copied to clipboard!", NotificationKind::Success, now),
            Err(err) => self.notify(copy_failure_message(&err), NotificationKind::Error, now),
        }
    }

    /// Copies the code currently being edited.
    pub fn copy_code(&mut self, clipboard: &mut dyn Clipboard, now: Instant) {
        match clipboard.set_text(&self.manifest.code) {
            Ok(()) => self.notify("Code copied to clipboard!", NotificationKind::Success, now),
            Err(err) => self.notify(copy_failure_message(&err), NotificationKind::Error, now),
        }
    }

    /// Copies the decoded code out of the generated output.
    pub fn copy_output_code(&mut self, clipboard: &mut dyn Clipboard, now: Instant) {
        let code = match self.output.as_deref().map(extract_code) {
            Some(Ok(code)) => code,
            Some(Err(err)) => {
                self.notify(err.to_string(), NotificationKind::Error, now);
                return;
            }
            None => {
                self.notify("Nothing generated yet", NotificationKind::Error, now);
                return;
            }
        };
        match clipboard.set_text(&code) {
            Ok(()) => self.notify("Code copied to clipboard!", NotificationKind::Success, now),
            Err(err) => self.notify(copy_failure_message(&err), NotificationKind::Error, now),
        }
    }

    /// Overwrites the code field with the clipboard text.
    pub fn paste_code(&mut self, clipboard: &mut dyn Clipboard, now: Instant) {
        if !self.profile.tracks_code_changes() {
            self.notify(
                "Pasting into code is not available for this profile",
                NotificationKind::Error,
                now,
            );
            return;
        }
        match clipboard.get_text() {
            Ok(text) => {
                self.apply(FieldUpdate::Code(text));
                self.notify("Code pasted from clipboard!", NotificationKind::Success, now);
            }
            Err(err) => self.notify(paste_failure_message(&err), NotificationKind::Error, now),
        }
    }

    /// Replaces the input text with the clipboard text and parses it.
    pub fn paste_input(&mut self, clipboard: &mut dyn Clipboard, now: Instant) {
        match clipboard.get_text() {
            Ok(text) => self.input_changed(text),
            Err(err) => self.notify(paste_failure_message(&err), NotificationKind::Error, now),
        }
    }

    /// Writes the output to `dir`. Returns the saved path on success.
    pub fn download(&mut self, dir: &Path, now: Instant) -> Option<PathBuf> {
        let Some(out) = self.output.as_deref() else {
            self.notify("Nothing generated yet", NotificationKind::Error, now);
            return None;
        };
        match export::download(dir, self.profile, out) {
            Ok(path) => {
                self.notify(
                    format!("Saved {}", path.display()),
                    NotificationKind::Success,
                    now,
                );
                Some(path)
            }
            Err(err) => {
                self.notify(
                    format!("Download failed: {}", err),
                    NotificationKind::Error,
                    now,
                );
                None
            }
        }
    }

    // Notifications

    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind, now: Instant) {
        self.notification = Some(Notification::new(message, kind, now, self.notification_ttl));
    }

    /// The current notification, if it has not expired at `now`.
    pub fn notification(&self, now: Instant) -> Option<&Notification> {
        self.notification.as_ref().filter(|n| n.is_visible(now))
    }

    /// Drops an expired notification. Returns true when one was removed.
    pub fn expire_notification(&mut self, now: Instant) -> bool {
        if self.notification.as_ref().is_some_and(|n| !n.is_visible(now)) {
            self.notification = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
