use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::json;

use super::*;

#[derive(Debug, Default)]
pub(super) struct TraceStats {
    pub(super) screen_views: u64,
    pub(super) user_actions: u64,
    pub(super) parse_errors: u64,
    pub(super) notifications: u64,
    pub(super) errors: u64,
}

/// Append-only JSON Lines log of a TUI session.
#[derive(Debug)]
pub(super) struct TraceWriter {
    out: BufWriter<File>,
    path: PathBuf,
    seq: u64,
}

impl TraceWriter {
    fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!(
                    "create parent directories for trace path {}",
                    path.display()
                )
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open trace file {}", path.display()))?;
        Ok(Self {
            out: BufWriter::new(file),
            path: path.to_path_buf(),
            seq: 0,
        })
    }

    fn write_event<T: Serialize>(&mut self, event: &str, payload: T) -> Result<()> {
        self.seq += 1;
        let line = json!({
            "seq": self.seq,
            "ts": now_ts(),
            "event": event,
            "payload": payload
        });
        serde_json::to_writer(&mut self.out, &line).context("serialize trace event")?;
        self.out.write_all(b"\n").context("write trace newline")?;
        self.out.flush().context("flush trace event")?;
        Ok(())
    }
}

impl App {
    pub(super) fn enable_trace(&mut self, path: Option<PathBuf>) {
        let Some(path) = path else {
            return;
        };
        match TraceWriter::open(&path) {
            Ok(mut writer) => {
                let _ = writer.write_event(
                    "session_start",
                    json!({
                        "cwd": std::env::current_dir().ok().map(|p| p.display().to_string()),
                        "profile": self.session.profile().label(),
                        "tab": self.session.tab().label(),
                        "download_dir": self.download_dir.display().to_string(),
                    }),
                );
                self.trace = Some(writer);
                self.push_output(vec![format!("trace enabled: {}", path.display())]);
            }
            Err(err) => {
                self.push_error(format!("trace disabled: {:#}", err));
            }
        }
    }

    pub(super) fn trace_screen_if_changed(&mut self) {
        if self.trace.is_none() {
            return;
        }
        let focus = match self.session.tab() {
            Tab::Edit => self.focus.label(),
            Tab::Input | Tab::Output => String::new(),
        };
        let signature = format!(
            "{}|{}|{}|{}",
            self.session.tab().label(),
            focus,
            self.session.can_edit(),
            self.session.can_view_output()
        );
        if self.last_trace_signature.as_ref() == Some(&signature) {
            return;
        }
        self.last_trace_signature = Some(signature);
        self.trace_stats.screen_views += 1;

        let available: Vec<&str> = Tab::ALL
            .iter()
            .filter(|t| self.session.is_available(**t))
            .map(|t| t.label())
            .collect();
        self.trace_event(
            "screen_view",
            json!({
                "tab": self.session.tab().label(),
                "focus": focus,
                "available_tabs": available,
                "creating_new": self.session.is_creating_new(),
            }),
        );
    }

    pub(super) fn trace_key(&mut self, key: KeyEvent) {
        self.trace_stats.user_actions += 1;
        self.trace_event(
            "user_action",
            json!({
                "source": "keyboard",
                "key": key_to_string(&key),
                "tab": self.session.tab().label(),
            }),
        );
    }

    pub(super) fn trace_action(&mut self, action: &str) {
        let field = match self.focus {
            FormRow::Field(field) => Some(field.key()),
            FormRow::Dependency(_) | FormRow::AddDependency => None,
        };
        self.trace_event(
            "action",
            json!({
                "action": action,
                "tab": self.session.tab().label(),
                "field": field,
            }),
        );
    }

    /// Records a notification the first time it is seen.
    pub(super) fn trace_notification_if_new(&mut self) {
        let Some(n) = self.session.notification(Instant::now()) else {
            return;
        };
        if self.last_traced_notification == Some(n.expires_at) {
            return;
        }
        let expires_at = n.expires_at;
        let payload = json!({ "kind": n.kind.label(), "message": n.message });
        self.last_traced_notification = Some(expires_at);
        self.trace_stats.notifications += 1;
        self.trace_event("notification", payload);
    }

    pub(super) fn trace_session_end(&mut self, reason: &str) {
        let path = self.trace.as_ref().map(|w| w.path.display().to_string());
        self.trace_event(
            "session_end",
            json!({
                "reason": reason,
                "stats": {
                    "screen_views": self.trace_stats.screen_views,
                    "user_actions": self.trace_stats.user_actions,
                    "parse_errors": self.trace_stats.parse_errors,
                    "notifications": self.trace_stats.notifications,
                    "errors": self.trace_stats.errors,
                },
                "log_entries": self.logged,
                "trace_path": path,
            }),
        );
    }

    pub(super) fn trace_event<T: Serialize>(&mut self, event: &str, payload: T) {
        let Some(writer) = self.trace.as_mut() else {
            return;
        };
        if writer.write_event(event, payload).is_err() {
            self.trace = None;
        }
    }
}

fn key_to_string(key: &KeyEvent) -> String {
    let mut parts = Vec::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("ctrl".to_string());
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        parts.push("alt".to_string());
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("shift".to_string());
    }
    let code = match key.code {
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pageup".to_string(),
        KeyCode::PageDown => "pagedown".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::BackTab => "backtab".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Esc => "esc".to_string(),
        KeyCode::F(n) => format!("f{}", n),
        KeyCode::Char(c) => c.to_string(),
        _ => "other".to_string(),
    };
    parts.push(code);
    parts.join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_render_with_modifiers() {
        let key = KeyEvent::new(KeyCode::Char('g'), KeyModifiers::CONTROL);
        assert_eq!(key_to_string(&key), "ctrl+g");
        assert_eq!(
            key_to_string(&KeyEvent::new(KeyCode::F(2), KeyModifiers::NONE)),
            "f2"
        );
    }

    #[test]
    fn events_are_numbered_json_lines() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("trace/session.jsonl");
        let mut w = TraceWriter::open(&path).unwrap();
        w.write_event("a", json!({})).unwrap();
        w.write_event("b", json!({ "x": 1 })).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["seq"], 2);
        assert_eq!(lines[1]["event"], "b");
        assert_eq!(lines[1]["payload"]["x"], 1);
    }
}
