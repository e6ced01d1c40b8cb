use crate::client::SummarizeClient;
use crate::clipboard::ClipboardHandler;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler, EventSender};
use crate::ui::render::{draw, FrameReport};
use crate::ui::summariser::SummariserIntent;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the TUI until the user quits or a termination signal arrives.
///
/// Blocks the calling thread; call it from `spawn_blocking`. Async work is
/// spawned on `runtime`.
pub fn run(config: Config, client: Arc<SummarizeClient>, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_millis);
    let mut events = EventHandler::new(tick_rate);
    spawn_signal_listener(&runtime, events.sender());

    let clipboard = Box::new(ClipboardHandler::new());
    let mut app = App::new(&config, client, clipboard, events.sender(), runtime);
    app.check_backend();

    loop {
        let mut report = FrameReport::default();
        terminal.draw(|frame| report = draw(frame, &app))?;
        app.dispatch(SummariserIntent::SummaryViewport {
            max_scroll: report.summary_max_scroll,
        });
        if app.should_quit() {
            break;
        }

        match events.next() {
            Some(event) => app.handle_event(event),
            None => break,
        }
    }

    tracing::info!("Shutting down");
    drop(guard);
    Ok(())
}

fn spawn_signal_listener(runtime: &Handle, events: EventSender) {
    runtime.spawn(async move {
        wait_for_signal().await;
        let _ = events.send(AppEvent::Shutdown);
    });
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(stream) => stream,
        Err(err) => {
            tracing::warn!(error = %err, "Failed to install SIGTERM handler");
            let _ = tokio::signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = terminate.recv() => {}
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
