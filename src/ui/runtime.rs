use crate::clipboard::ClipboardSource;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::AppEvent;
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crossterm::event::EventStream;
use futures_util::StreamExt;
use std::io;
use std::time::Instant;

/// Run the entry screen until the user submits or quits.
///
/// Returns the submitted code, or `None` when the user quit.
pub async fn run(
    config: &Config,
    clipboard: Option<Box<dyn ClipboardSource>>,
) -> io::Result<Option<String>> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(config, clipboard);
    let mut events = EventStream::new();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let deadline = app.next_deadline();
        tokio::select! {
            event = events.next() => match event {
                Some(Ok(event)) => match AppEvent::from_terminal(event) {
                    Some(AppEvent::Key(key)) => handle_key(&mut app, key),
                    Some(AppEvent::Paste(text)) => app.on_paste(&text),
                    Some(AppEvent::Resize) | None => {}
                },
                Some(Err(err)) => return Err(err),
                None => break,
            },
            _ = sleep_until(deadline) => app.on_tick(Instant::now()),
        }
    }

    drop(guard);
    tracing::debug!(submitted = app.submitted().is_some(), "Entry screen closed");
    Ok(app.into_submitted())
}

/// Sleeps until `deadline`, or forever when nothing is scheduled.
async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline.into()).await,
        None => std::future::pending::<()>().await,
    }
}
