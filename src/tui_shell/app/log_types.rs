use super::*;

pub(super) const LOG_LIMIT: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum EntryKind {
    Command,
    Output,
    Error,
}

impl EntryKind {
    fn label(self) -> &'static str {
        match self {
            EntryKind::Command => "command",
            EntryKind::Output => "output",
            EntryKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug)]
pub(super) struct ScrollEntry {
    pub(super) ts: String,
    pub(super) kind: EntryKind,
    pub(super) lines: Vec<String>,
}

impl App {
    fn push_entry(&mut self, kind: EntryKind, lines: Vec<String>) {
        let entry = ScrollEntry {
            ts: now_ts(),
            kind,
            lines,
        };
        self.trace_event(
            "log",
            serde_json::json!({ "kind": entry.kind.label(), "lines": entry.lines }),
        );
        if self.log.len() == LOG_LIMIT {
            self.log.pop_front();
        }
        self.log.push_back(entry.clone());
        self.logged += 1;
        if entry.kind != EntryKind::Command {
            self.last_result = Some(entry);
        }
    }

    pub(super) fn push_command(&mut self, line: String) {
        self.trace_stats.user_actions += 1;
        self.push_entry(EntryKind::Command, vec![line]);
    }

    pub(super) fn push_output(&mut self, lines: Vec<String>) {
        self.push_entry(EntryKind::Output, lines);
    }

    pub(super) fn push_error(&mut self, msg: String) {
        self.trace_stats.errors += 1;
        self.push_entry(EntryKind::Error, vec![msg]);
    }
}
