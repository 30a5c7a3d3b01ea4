use std::collections::VecDeque;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::clipboard::{Clipboard, SystemClipboard};
use crate::model::{Field, FieldUpdate};
use crate::notify::NotificationKind;
use crate::session::{Session, Tab};

use super::form::{FormRow, form_rows, settle_focus, step_focus};
use super::input::Input;
use super::view::{field_block, render_view_chrome, visible_scroll};

mod actions;
mod event_loop;
mod key_dispatch;
mod log_types;
mod render;
mod time_utils;
mod trace;

use self::log_types::{EntryKind, ScrollEntry};
use self::time_utils::{fmt_ts_ui, now_ts};
use self::trace::{TraceStats, TraceWriter};

pub(super) fn run(opts: crate::tui::TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    let download_dir = opts.config.resolve_download_dir()?;

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let mut app = App::load(opts, download_dir, Box::new(SystemClipboard::new()));
    let res = event_loop::run_loop(&mut terminal, &mut app);
    if let Err(err) = &res {
        app.trace_session_end(&format!("error: {:#}", err));
    }

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )
    .ok();
    terminal.show_cursor().ok();

    res
}

pub(super) struct App {
    pub(super) session: Session,
    clipboard: Box<dyn Clipboard>,
    download_dir: PathBuf,

    // Raw JSON typed or pasted into the input tab.
    input: Input,

    // Editor for whichever form row has focus; mirrors that row's value.
    field_input: Input,
    focus: FormRow,

    output_scroll: u16,

    // Activity log, capped at LOG_LIMIT; the latest non-command entry is
    // shown in the status strip.
    log: VecDeque<ScrollEntry>,
    logged: u64,
    last_result: Option<ScrollEntry>,

    trace: Option<TraceWriter>,
    trace_stats: TraceStats,
    last_trace_signature: Option<String>,
    last_traced_notification: Option<Instant>,

    quit: bool,
}

impl App {
    fn new(session: Session, clipboard: Box<dyn Clipboard>, download_dir: PathBuf) -> Self {
        Self {
            session,
            clipboard,
            download_dir,
            input: Input::default(),
            field_input: Input::default(),
            focus: FormRow::Field(Field::Title),
            output_scroll: 0,
            log: VecDeque::new(),
            logged: 0,
            last_result: None,
            trace: None,
            trace_stats: TraceStats::default(),
            last_trace_signature: None,
            last_traced_notification: None,
            quit: false,
        }
    }

    pub(super) fn load(
        opts: crate::tui::TuiRunOptions,
        download_dir: PathBuf,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        let session = Session::new(opts.config.profile)
            .with_notification_ttl(opts.config.notification_ttl());
        let mut app = App::new(session, clipboard, download_dir);

        if let Some(text) = opts.initial_input {
            app.input.set(text);
            app.input_changed();
        }

        app.push_output(vec![format!(
            "{} JSON editor. Paste a document or press Ctrl-N to start a new one.",
            app.session.profile().label()
        )]);
        app.enable_trace(opts.trace);
        app
    }

    /// Loads the focused row's current value into the field editor.
    fn load_focus(&mut self) {
        let text = self.focus.text(self.session.manifest());
        self.field_input.set(text);
    }

    /// Re-validates focus after the form's shape may have changed.
    fn settle_focus(&mut self) {
        let rows = form_rows(self.session.manifest());
        let settled = settle_focus(&rows, self.focus);
        if settled != self.focus {
            self.focus = settled;
            self.load_focus();
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let rows = form_rows(self.session.manifest());
        self.focus = step_focus(&rows, self.focus, forward);
        self.load_focus();
    }

    fn open_tab(&mut self, tab: Tab) {
        if self.session.tab() == tab {
            return;
        }
        if !self.session.open_tab(tab) {
            self.push_error(format!("{} is not available yet", tab.label()));
            return;
        }
        if tab == Tab::Edit {
            self.settle_focus();
            self.load_focus();
        }
    }
}

#[cfg(test)]
impl App {
    pub(super) fn for_test(profile: crate::profile::Profile, clipboard: Box<dyn Clipboard>) -> Self {
        App::new(Session::new(profile), clipboard, std::env::temp_dir())
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
