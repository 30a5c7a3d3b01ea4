use super::*;

impl App {
    pub(super) fn input_changed(&mut self) {
        self.session.input_changed(self.input.buf.clone());
        if let Some(err) = self.session.parse_error() {
            self.trace_stats.parse_errors += 1;
            let msg = err.to_string();
            self.trace_event("parse_error", serde_json::json!({ "message": msg }));
        }
    }

    pub(super) fn start_new(&mut self) {
        self.push_command("new".to_string());
        self.session.start_new();
        self.focus = FormRow::Field(Field::Title);
        self.load_focus();
        self.push_output(vec!["started a new document".to_string()]);
    }

    pub(super) fn open_editor(&mut self) {
        if self.session.parsed().is_none() && !self.session.is_creating_new() {
            self.push_error("paste a valid document first".to_string());
            return;
        }
        self.open_tab(Tab::Edit);
    }

    /// Pushes the field editor's text into the manifest.
    pub(super) fn commit_field_input(&mut self) {
        let text = self.field_input.buf.clone();
        match self.focus {
            FormRow::Field(field) => {
                let Some(update) = FieldUpdate::from_text(field, text) else {
                    return;
                };
                self.session.apply(update);
            }
            FormRow::Dependency(i) => self.session.set_dependency(i, text),
            FormRow::AddDependency => return,
        }

        // Some fields normalize what was typed (port); show the stored value.
        let stored = self.focus.text(self.session.manifest());
        if stored != self.field_input.buf {
            self.field_input.set(stored);
        }
        self.settle_focus();
    }

    pub(super) fn toggle_dependencies(&mut self) {
        let enabled = !self.session.manifest().has_additional_dependencies;
        self.session
            .apply(FieldUpdate::HasAdditionalDependencies(enabled));
        self.settle_focus();
        self.trace_action("toggle_dependencies");
    }

    pub(super) fn add_dependency(&mut self) {
        if !self.session.manifest().has_additional_dependencies {
            self.push_error("enable additional dependencies first".to_string());
            return;
        }
        self.session.add_dependency();
        let last = self.session.manifest().additional_dependencies.len() - 1;
        self.focus = FormRow::Dependency(last);
        self.load_focus();
        self.trace_action("add_dependency");
    }

    pub(super) fn remove_focused_dependency(&mut self) {
        let FormRow::Dependency(i) = self.focus else {
            return;
        };
        self.session.remove_dependency(i);
        self.settle_focus();
        self.load_focus();
        self.trace_action("remove_dependency");
    }

    pub(super) fn generate(&mut self) {
        self.push_command("generate".to_string());
        match self.session.generate() {
            Ok(out) => {
                let lines = out.lines().count();
                self.output_scroll = 0;
                self.push_output(vec![format!("generated {} lines of JSON", lines)]);
            }
            Err(err) => {
                self.push_error(err.to_string());
            }
        }
    }

    pub(super) fn copy_output(&mut self) {
        self.session
            .copy_output(self.clipboard.as_mut(), Instant::now());
        self.trace_action("copy_output");
    }

    pub(super) fn copy_code(&mut self) {
        self.session.copy_code(self.clipboard.as_mut(), Instant::now());
        self.trace_action("copy_code");
    }

    pub(super) fn copy_output_code(&mut self) {
        self.session
            .copy_output_code(self.clipboard.as_mut(), Instant::now());
        self.trace_action("copy_output_code");
    }

    pub(super) fn paste_code(&mut self) {
        self.session
            .paste_code(self.clipboard.as_mut(), Instant::now());
        if self.focus == FormRow::Field(Field::Code) {
            self.load_focus();
        }
        self.trace_action("paste_code");
    }

    pub(super) fn paste_input(&mut self) {
        self.session
            .paste_input(self.clipboard.as_mut(), Instant::now());
        let raw = self.session.raw_input().to_string();
        if raw != self.input.buf {
            self.input.set(raw);
        }
        self.trace_action("paste_input");
    }

    pub(super) fn download(&mut self) {
        self.push_command("download".to_string());
        let dir = self.download_dir.clone();
        if let Some(path) = self.session.download(&dir, Instant::now()) {
            self.push_output(vec![format!("wrote {}", path.display())]);
        }
    }

    /// Bracketed paste: text goes to whichever editor is active.
    pub(super) fn paste_text(&mut self, text: &str) {
        match self.session.tab() {
            Tab::Input => {
                self.input.insert_str(text);
                self.input_changed();
            }
            Tab::Edit => {
                if !self.focus.is_editable(self.session.profile()) {
                    return;
                }
                if self.focus.is_multiline() {
                    self.field_input.insert_str(text);
                } else {
                    // Single-line rows take the first line only.
                    self.field_input.insert_str(text.lines().next().unwrap_or(""));
                }
                self.commit_field_input();
            }
            Tab::Output => {}
        }
    }
}
