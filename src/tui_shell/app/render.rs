use super::*;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);
    match app.session.tab() {
        Tab::Input => draw_input_tab(frame, app, chunks[1]),
        Tab::Edit => draw_edit_tab(frame, app, chunks[1]),
        Tab::Output => draw_output_tab(frame, app, chunks[1]),
    }
    draw_status(frame, app, chunks[2]);
}

fn draw_header(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            format!("{} JSON Editor", app.session.profile().label()),
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
    ];
    for (i, tab) in Tab::ALL.iter().enumerate() {
        let style = if *tab == app.session.tab() {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else if app.session.is_available(*tab) {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" F{} {} ", i + 1, tab.label()), style));
        spans.push(Span::raw(" "));
    }
    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn draw_input_tab(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let inner = render_view_chrome(
        frame,
        "Input JSON",
        "Paste a document to begin editing, or create a new one from scratch",
        area,
    );
    let error = app.session.parse_error();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(if error.is_some() { 2 } else { 0 }),
            Constraint::Length(1),
        ])
        .split(inner);

    let editor_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let editor_area = editor_block.inner(chunks[0]);
    frame.render_widget(editor_block, chunks[0]);
    draw_text(frame, &app.input, editor_area, true);

    if let Some(err) = error {
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("! ", Style::default().fg(Color::Red)),
                Span::styled(err, Style::default().fg(Color::Red)),
            ]))
            .wrap(Wrap { trim: false }),
            chunks[1],
        );
    }

    let mut hints = vec![Span::styled(
        "Ctrl-N create new",
        Style::default().fg(Color::Gray),
    )];
    if app.session.parsed().is_some() {
        hints.push(Span::raw("   "));
        hints.push(Span::styled(
            "Ctrl-E edit fields",
            Style::default().fg(Color::Green),
        ));
    }
    hints.push(Span::raw("   "));
    hints.push(Span::styled(
        "Ctrl-V paste  Ctrl-U clear",
        Style::default().fg(Color::Gray),
    ));
    frame.render_widget(Paragraph::new(Line::from(hints)), chunks[2]);
}

fn draw_edit_tab(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let profile = app.session.profile();
    let inner = render_view_chrome(
        frame,
        &format!("Edit {} JSON", profile.label()),
        "Modify the fields below, then Ctrl-G to generate",
        area,
    );
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(inner);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(4),
        ])
        .split(columns[0]);
    draw_row(frame, app, FormRow::Field(Field::Title), left[0]);
    draw_row(frame, app, FormRow::Field(Field::Template), left[1]);
    let port_path = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(12), Constraint::Min(0)])
        .split(left[2]);
    draw_row(frame, app, FormRow::Field(Field::Port), port_path[0]);
    draw_row(frame, app, FormRow::Field(Field::FilePath), port_path[1]);
    draw_row(frame, app, FormRow::Field(Field::Description), left[3]);
    draw_row(frame, app, FormRow::Field(Field::Commentary), left[4]);

    let manifest = app.session.manifest();
    let deps_height = if manifest.has_additional_dependencies {
        let rows = manifest.additional_dependencies.len().max(1) + 1;
        u16::try_from(rows.min(8)).unwrap_or(8) + 2
    } else {
        0
    };
    let command_height = if manifest.has_additional_dependencies { 3 } else { 0 };
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(deps_height),
            Constraint::Length(command_height),
            Constraint::Min(5),
        ])
        .split(columns[1]);
    draw_checkbox(frame, app, right[0]);
    if manifest.has_additional_dependencies {
        draw_dependencies(frame, app, right[1]);
        draw_row(
            frame,
            app,
            FormRow::Field(Field::InstallDependenciesCommand),
            right[2],
        );
    }
    draw_row(frame, app, FormRow::Field(Field::Code), right[3]);
}

fn draw_row(frame: &mut ratatui::Frame, app: &App, row: FormRow, area: Rect) {
    let profile = app.session.profile();
    let focused = app.focus == row;
    let read_only = row.is_text() && !row.is_editable(profile);

    let mut label = row.label();
    if row == FormRow::Field(Field::Code) {
        label.push_str("  Ctrl-Y copy");
        if profile.tracks_code_changes() {
            label.push_str("  Ctrl-V paste");
            let changed = app.session.code_changed_lines().len();
            if app.session.code_is_modified() {
                label.push_str(&format!("  [modified: {} lines]", changed));
            }
        }
    }

    let block = field_block(&label, focused, read_only);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if focused {
        draw_text(frame, &app.field_input, inner, !read_only);
    } else {
        let text = row.text(app.session.manifest());
        frame.render_widget(Paragraph::new(text), inner);
    }
}

fn draw_checkbox(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let row = FormRow::Field(Field::HasAdditionalDependencies);
    let focused = app.focus == row;
    let block = field_block("Dependencies", focused, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mark = if app.session.manifest().has_additional_dependencies {
        "[x]"
    } else {
        "[ ]"
    };
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(mark, style),
            Span::raw(" "),
            Span::raw(Field::HasAdditionalDependencies.label()),
        ])),
        inner,
    );
}

fn draw_dependencies(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let focused_block = matches!(app.focus, FormRow::Dependency(_) | FormRow::AddDependency);
    let block = field_block("Additional Dependencies  Ctrl-A add  Ctrl-D remove", focused_block, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let deps = &app.session.manifest().additional_dependencies;
    let mut lines = Vec::new();
    if deps.is_empty() {
        lines.push(Line::from(Span::styled(
            "No dependencies added yet",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (i, dep) in deps.iter().enumerate() {
        let focused = app.focus == FormRow::Dependency(i);
        let text = if focused {
            app.field_input.buf.as_str()
        } else {
            dep.as_str()
        };
        let marker = if focused { "> " } else { "  " };
        let line = if text.is_empty() && !focused {
            Line::from(vec![
                Span::raw(marker),
                Span::styled("e.g., react-router-dom", Style::default().fg(Color::DarkGray)),
            ])
        } else {
            let style = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            Line::from(vec![Span::raw(marker), Span::styled(text.to_string(), style)])
        };
        lines.push(line);
    }

    let add_style = if app.focus == FormRow::AddDependency {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
        Style::default().fg(Color::Green)
    };
    lines.push(Line::from(Span::styled("[+ Add Dependency]", add_style)));

    // Keep the focused row, the add row included, on screen.
    let focus_line = dependency_focus_line(app.focus, deps.len());
    let scroll = focus_line.map_or(0, |line| visible_scroll(line, inner.height));
    frame.render_widget(Paragraph::new(lines).scroll((scroll, 0)), inner);

    if let FormRow::Dependency(i) = app.focus {
        let row = u16::try_from(i).unwrap_or(u16::MAX).saturating_sub(scroll);
        let col = u16::try_from(app.field_input.cursor_line_col().1).unwrap_or(0);
        if row < inner.height {
            let x = (inner.x + 2 + col).min(inner.right().saturating_sub(1));
            frame.set_cursor_position((x, inner.y + row));
        }
    }
}

/// Line of the dependency box that holds `focus`, if focus is inside it.
fn dependency_focus_line(focus: FormRow, dep_count: usize) -> Option<usize> {
    match focus {
        FormRow::Dependency(i) => Some(i),
        // The placeholder line sits above the add row when the list is empty.
        FormRow::AddDependency => Some(dep_count.max(1)),
        FormRow::Field(_) => None,
    }
}

/// Renders an editor's text, scrolled so the cursor stays visible, and
/// places the terminal cursor when `show_cursor` is set.
fn draw_text(frame: &mut ratatui::Frame, input: &Input, area: Rect, show_cursor: bool) {
    let (line, col) = input.cursor_line_col();
    let scroll = visible_scroll(line, area.height);
    frame.render_widget(
        Paragraph::new(input.buf.as_str()).scroll((scroll, 0)),
        area,
    );
    if !show_cursor || area.width == 0 || area.height == 0 {
        return;
    }
    let row = u16::try_from(line).unwrap_or(u16::MAX).saturating_sub(scroll);
    let col = u16::try_from(col).unwrap_or(u16::MAX);
    let x = area.x.saturating_add(col).min(area.right().saturating_sub(1));
    let y = area.y.saturating_add(row).min(area.bottom().saturating_sub(1));
    frame.set_cursor_position((x, y));
}

fn draw_output_tab(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let inner = render_view_chrome(
        frame,
        "Output JSON",
        "Review, copy or download the updated JSON",
        area,
    );
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let lines: Vec<Line> = app
        .session
        .output()
        .unwrap_or_default()
        .lines()
        .map(json_line)
        .collect();
    frame.render_widget(
        Paragraph::new(lines).scroll((app.output_scroll, 0)),
        chunks[0],
    );

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(
                "c copy   k copy code   s download ({})   Esc back to editor",
                app.session.profile().download_file_name()
            ),
            Style::default().fg(Color::Gray),
        ))),
        chunks[1],
    );
}

// Colors the key of a `"key": value` line.
fn json_line(line: &str) -> Line<'_> {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];
    if trimmed.starts_with('"')
        && let Some(end) = trimmed.find("\":")
    {
        let (key, rest) = trimmed.split_at(end + 1);
        return Line::from(vec![
            Span::raw(indent),
            Span::styled(key, Style::default().fg(Color::Cyan)),
            Span::raw(rest),
        ]);
    }
    Line::from(line)
}

fn draw_status(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    if let Some(n) = app.session.notification(Instant::now()) {
        let style = match n.kind {
            NotificationKind::Success => Style::default().fg(Color::Black).bg(Color::Green),
            NotificationKind::Error => Style::default().fg(Color::White).bg(Color::Red),
        };
        lines.push(Line::from(Span::styled(format!(" {} ", n.message), style)));
    } else if let Some(r) = &app.last_result {
        let style = match r.kind {
            EntryKind::Output => Style::default().fg(Color::White),
            EntryKind::Error => Style::default().fg(Color::Red),
            EntryKind::Command => Style::default().fg(Color::Cyan),
        };
        let first = r.lines.first().map(String::as_str).unwrap_or("");
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", fmt_ts_ui(&r.ts)), Style::default().fg(Color::Gray)),
            Span::styled(first, style),
        ]));
    } else {
        lines.push(Line::from(""));
    }

    let hints = match app.session.tab() {
        Tab::Input => "F1-F3 tabs  Ctrl-Q quit",
        Tab::Edit => "Tab/Shift-Tab move  Space toggle  Ctrl-G generate  Esc back  Ctrl-Q quit",
        Tab::Output => "Up/Down scroll  Esc back  q quit",
    };
    lines.push(Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray))));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::TOP)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Profile;
    use ratatui::backend::TestBackend;

    #[test]
    fn json_keys_are_split_from_values() {
        let line = json_line("  \"title\": \"Shop\",");
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[1].content, "\"title\"");
        assert_eq!(line.spans[2].content, ": \"Shop\",");

        assert_eq!(json_line("  ]").spans.len(), 1);
    }

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn app_with_many_dependencies() -> App {
        let mut app = App::for_test(Profile::Tuxedo, Box::new(SystemClipboard::new()));
        let deps: Vec<String> = ('a'..='l').map(|c| format!("pkg-{}", c)).collect();
        let doc = serde_json::json!({
            "has_additional_dependencies": true,
            "additional_dependencies": deps,
        });
        app.input.set(doc.to_string());
        app.input_changed();
        app.open_tab(Tab::Edit);
        app
    }

    #[test]
    fn add_row_scrolls_into_view_when_focused() {
        let mut app = app_with_many_dependencies();
        app.focus = FormRow::Dependency(0);
        app.load_focus();
        let top = screen_text(&app);
        assert!(top.contains("pkg-a"));
        assert!(!top.contains("[+ Add Dependency]"));

        app.focus = FormRow::AddDependency;
        let bottom = screen_text(&app);
        assert!(bottom.contains("[+ Add Dependency]"));
        assert!(bottom.contains("pkg-l"));
    }

    #[test]
    fn add_row_follows_the_placeholder_when_empty() {
        assert_eq!(dependency_focus_line(FormRow::AddDependency, 0), Some(1));
        assert_eq!(dependency_focus_line(FormRow::AddDependency, 3), Some(3));
        assert_eq!(dependency_focus_line(FormRow::Dependency(2), 3), Some(2));
        assert_eq!(dependency_focus_line(FormRow::Field(Field::Code), 3), None);
    }
}
