use crate::client::{BackendHealth, SummarizeClient, SummarizeRequest};
use crate::clipboard::ClipboardSink;
use crate::config::Config;
use crate::ui::events::{AppEvent, EventSender};
use crate::ui::input::handle_key;
use crate::ui::mvi::Reducer;
use crate::ui::summariser::{RequestState, SummariserIntent, SummariserReducer, SummariserState};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Owns the summariser state and runs the side effects its intents imply:
/// the HTTP request, the clipboard write and the copy-acknowledgment timer.
pub struct App {
    should_quit: bool,
    summariser: SummariserState,
    health: BackendHealth,
    client: Arc<SummarizeClient>,
    clipboard: Box<dyn ClipboardSink>,
    events: EventSender,
    runtime: Handle,
    copy_ack_delay: Duration,
    /// Pending "Copied!" revert. At most one exists at a time.
    copy_timer: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(
        config: &Config,
        client: Arc<SummarizeClient>,
        clipboard: Box<dyn ClipboardSink>,
        events: EventSender,
        runtime: Handle,
    ) -> Self {
        Self {
            should_quit: false,
            summariser: SummariserState::new(
                config.summary.variant,
                config.summary.initial_length(),
                config.ui.theme,
            ),
            health: BackendHealth::Unknown,
            client,
            clipboard,
            events,
            runtime,
            copy_ack_delay: Duration::from_millis(config.ui.copy_ack_millis),
            copy_timer: None,
        }
    }

    pub fn state(&self) -> &SummariserState {
        &self.summariser
    }

    pub fn health(&self) -> BackendHealth {
        self.health
    }

    pub fn endpoint(&self) -> &str {
        self.client.summarize_url()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Dispatch an intent to the summariser reducer. No side effects.
    pub fn dispatch(&mut self, intent: SummariserIntent) {
        dispatch_mvi!(self, summariser, SummariserReducer, intent);
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => handle_key(self, key),
            AppEvent::Paste(text) => self.dispatch(SummariserIntent::Paste(text)),
            AppEvent::Tick => self.dispatch(SummariserIntent::Tick),
            AppEvent::Resize(_, _) => {}
            AppEvent::SummaryReady {
                request_id,
                outcome,
            } => match outcome {
                Ok(result) => {
                    self.dispatch(SummariserIntent::RequestSucceeded { request_id, result })
                }
                Err(err) => {
                    tracing::warn!(request_id, error = %err, "Summarization failed");
                    self.dispatch(SummariserIntent::RequestFailed {
                        request_id,
                        message: err.user_message(),
                    });
                }
            },
            AppEvent::CopyAckExpired { generation } => {
                if generation == self.summariser.copy_generation() {
                    self.copy_timer = None;
                }
                self.dispatch(SummariserIntent::CopyAckExpired { generation });
            }
            AppEvent::BackendHealth(health) => self.health = health,
            AppEvent::Shutdown => self.request_quit(),
        }
    }

    /// Validate the notes and, when valid, send exactly one request.
    pub fn submit(&mut self) {
        let before = self.summariser.request;
        self.dispatch(SummariserIntent::Submit);

        let RequestState::InFlight { request_id } = self.summariser.request else {
            if let Some(error) = &self.summariser.error {
                tracing::debug!(error = %error, "Submission rejected locally");
            }
            return;
        };
        if self.summariser.request == before {
            return;
        }

        let request = SummarizeRequest {
            text: self.summariser.text.clone(),
            max_sentences: self.summariser.length,
        };
        tracing::info!(
            request_id,
            words = self.summariser.word_count(),
            max_sentences = request.max_sentences,
            "Submitting notes"
        );

        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let outcome = client.summarize(&request).await;
            let _ = events.send(AppEvent::SummaryReady {
                request_id,
                outcome,
            });
        });
    }

    /// Copy the summary. No-op (and no clipboard access) without one.
    pub fn copy_result(&mut self) {
        let Some(summary) = self.summariser.summary().map(str::to_owned) else {
            return;
        };

        match self.clipboard.write_text(&summary) {
            Ok(method) => {
                tracing::debug!(?method, len = summary.len(), "Copied summary");
                self.dispatch(SummariserIntent::CopySucceeded);
                self.schedule_copy_revert();
            }
            Err(err) => {
                tracing::warn!(error = %err, "Clipboard write failed");
                self.dispatch(SummariserIntent::CopyFailed {
                    message: err.user_message().to_string(),
                });
            }
        }
    }

    pub fn clear(&mut self) {
        self.dispatch(SummariserIntent::Clear);
    }

    pub fn fill_sample(&mut self) {
        self.dispatch(SummariserIntent::FillSample);
    }

    pub fn toggle_theme(&mut self) {
        self.dispatch(SummariserIntent::ToggleTheme);
    }

    /// True while a "Copied!" revert is scheduled.
    pub fn has_pending_copy_revert(&self) -> bool {
        self.copy_timer
            .as_ref()
            .is_some_and(|timer| !timer.is_finished())
    }

    /// Fire the one-shot reachability probe.
    pub fn check_backend(&self) {
        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        self.runtime.spawn(async move {
            let health = client.probe().await;
            let _ = events.send(AppEvent::BackendHealth(health));
        });
    }

    fn schedule_copy_revert(&mut self) {
        if let Some(timer) = self.copy_timer.take() {
            timer.abort();
        }

        let generation = self.summariser.copy_generation();
        let delay = self.copy_ack_delay;
        let events = self.events.clone();
        self.copy_timer = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(AppEvent::CopyAckExpired { generation });
        }));
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if let Some(timer) = self.copy_timer.take() {
            timer.abort();
        }
    }
}
