use crossterm::event::{self, Event, KeyEvent};
use std::thread;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::client::{BackendHealth, SummarizeError, SummaryResult};

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    Resize(u16, u16),
    /// Outcome of the request tagged `request_id`.
    SummaryReady {
        request_id: u64,
        outcome: Result<SummaryResult, SummarizeError>,
    },
    /// The copy-acknowledgment timer for `generation` elapsed.
    CopyAckExpired { generation: u64 },
    /// Startup probe finished.
    BackendHealth(BackendHealth),
    /// OS signal received (SIGTERM, SIGINT).
    Shutdown,
}

pub type EventSender = UnboundedSender<AppEvent>;

/// Single queue feeding the UI thread.
///
/// Terminal input is read on a dedicated thread; async tasks (HTTP, timers,
/// signals) push into the same queue through [`EventHandler::sender`].
pub struct EventHandler {
    rx: UnboundedReceiver<AppEvent>,
    tx: EventSender,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                if event_tx.is_closed() {
                    break;
                }

                let timeout = tick_rate.saturating_sub(last_tick.elapsed());
                match event::poll(timeout) {
                    Ok(true) => {
                        let forwarded = match event::read() {
                            Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                            Ok(Event::Paste(text)) => Some(AppEvent::Paste(text)),
                            Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                            Ok(_) => None,
                            Err(err) => {
                                tracing::error!(error = %err, "Terminal read failed");
                                break;
                            }
                        };
                        if let Some(app_event) = forwarded {
                            if event_tx.send(app_event).is_err() {
                                break;
                            }
                        }
                    }
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal poll failed");
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    /// Block until the next event. `None` once every sender is gone.
    pub fn next(&mut self) -> Option<AppEvent> {
        self.rx.blocking_recv()
    }

    pub fn sender(&self) -> EventSender {
        self.tx.clone()
    }
}
