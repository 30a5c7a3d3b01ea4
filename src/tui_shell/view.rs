use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

pub(super) fn render_view_chrome(
    frame: &mut ratatui::Frame,
    title: &str,
    subtitle: &str,
    area: Rect,
) -> Rect {
    let header = Line::from(vec![
        Span::styled(title.to_string(), Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(subtitle.to_string(), Style::default().fg(Color::Gray)),
    ]);

    let outer = Block::default().borders(Borders::ALL).title(header);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);
    inner
}

/// Bordered box around one form row.
pub(super) fn field_block(label: &str, focused: bool, read_only: bool) -> Block<'static> {
    let mut title = label.to_string();
    if read_only {
        title.push_str(" (read-only)");
    }
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

/// Vertical scroll that keeps `cursor_line` inside a viewport of `height`.
pub(super) fn visible_scroll(cursor_line: usize, height: u16) -> u16 {
    let height = usize::from(height.max(1));
    let top = (cursor_line + 1).saturating_sub(height);
    u16::try_from(top).unwrap_or(u16::MAX)
}
