use super::*;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        if app.session.expire_notification(Instant::now()) {
            app.trace_event("notification_expired", serde_json::json!({}));
        }

        app.trace_screen_if_changed();
        terminal
            .draw(|f| render::draw(f, app))
            .context("draw")?;
        if app.quit {
            app.trace_session_end("quit");
            return Ok(());
        }

        if event::poll(Duration::from_millis(100)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => {
                    key_dispatch::handle_key(app, k);
                    app.trace_notification_if_new();
                }
                Event::Paste(text) => {
                    app.paste_text(&text);
                    app.trace_notification_if_new();
                }
                _ => {}
            }
        }
    }
}
