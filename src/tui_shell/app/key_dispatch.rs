use super::*;

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    app.trace_key(key);

    if handle_global_key(app, key) {
        return;
    }

    match app.session.tab() {
        Tab::Input => handle_input_tab(app, key),
        Tab::Edit => handle_edit_tab(app, key),
        Tab::Output => handle_output_tab(app, key),
    }
}

fn handle_global_key(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => app.quit = true,
        KeyCode::F(1) => app.open_tab(Tab::Input),
        KeyCode::F(2) => app.open_tab(Tab::Edit),
        KeyCode::F(3) => app.open_tab(Tab::Output),
        KeyCode::Char('1') if alt => app.open_tab(Tab::Input),
        KeyCode::Char('2') if alt => app.open_tab(Tab::Edit),
        KeyCode::Char('3') if alt => app.open_tab(Tab::Output),
        KeyCode::Esc => match app.session.tab() {
            Tab::Input => {}
            Tab::Edit => app.open_tab(Tab::Input),
            Tab::Output => app.open_tab(Tab::Edit),
        },
        _ => return false,
    }
    true
}

fn handle_input_tab(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('n') if ctrl => app.start_new(),
        KeyCode::Char('e') if ctrl => app.open_editor(),
        KeyCode::Char('v') if ctrl => app.paste_input(),
        KeyCode::Char('u') if ctrl => {
            app.input.clear();
            app.input_changed();
        }
        _ => {
            if apply_text_key(&mut app.input, key, true) {
                app.input_changed();
            }
        }
    }
}

fn handle_edit_tab(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Tab => app.move_focus(true),
        KeyCode::BackTab => app.move_focus(false),
        KeyCode::Up if !app.focus.is_multiline() => app.move_focus(false),
        KeyCode::Down if !app.focus.is_multiline() => app.move_focus(true),
        KeyCode::Char('g') if ctrl => app.generate(),
        KeyCode::Char('a') if ctrl => app.add_dependency(),
        KeyCode::Char('d') if ctrl => app.remove_focused_dependency(),
        KeyCode::Char('y') if ctrl => app.copy_code(),
        KeyCode::Char('v') if ctrl => app.paste_code(),
        KeyCode::Char(' ') | KeyCode::Enter
            if app.focus == FormRow::Field(Field::HasAdditionalDependencies) =>
        {
            app.toggle_dependencies()
        }
        KeyCode::Enter if app.focus == FormRow::AddDependency => app.add_dependency(),
        KeyCode::Enter if !app.focus.is_multiline() => app.move_focus(true),
        _ => {
            if !app.focus.is_editable(app.session.profile()) {
                return;
            }
            let multiline = app.focus.is_multiline();
            if apply_text_key(&mut app.field_input, key, multiline) {
                app.commit_field_input();
            }
        }
    }
}

fn handle_output_tab(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.output_scroll = app.output_scroll.saturating_sub(1),
        KeyCode::Down => app.output_scroll = app.output_scroll.saturating_add(1),
        KeyCode::PageUp => app.output_scroll = app.output_scroll.saturating_sub(10),
        KeyCode::PageDown => app.output_scroll = app.output_scroll.saturating_add(10),
        KeyCode::Home => app.output_scroll = 0,
        KeyCode::Char('c') => app.copy_output(),
        KeyCode::Char('k') => app.copy_output_code(),
        KeyCode::Char('s') => app.download(),
        KeyCode::Char('q') => app.quit = true,
        _ => {}
    }
}

/// Applies an editing key to `input`. Returns true when the text changed.
fn apply_text_key(input: &mut Input, key: KeyEvent, multiline: bool) -> bool {
    let before = input.buf.len();
    match key.code {
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Up => input.move_up(),
        KeyCode::Down => input.move_down(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        KeyCode::Backspace => {
            input.backspace();
            return input.buf.len() != before;
        }
        KeyCode::Delete => {
            input.delete();
            return input.buf.len() != before;
        }
        KeyCode::Enter if multiline => {
            input.insert_char('\n');
            return true;
        }
        KeyCode::Tab if multiline => {
            input.insert_str("  ");
            return true;
        }
        KeyCode::Char(c)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            input.insert_char(c);
            return true;
        }
        _ => {}
    }
    false
}
