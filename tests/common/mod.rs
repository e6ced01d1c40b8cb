//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use notesum::client::{SummarizeClient, SummaryResult};
use notesum::clipboard::{ClipboardError, ClipboardSink, CopyMethod};
use notesum::config::{Config, Variant};
use notesum::ui::app::App;
use notesum::ui::events::AppEvent;
use notesum::ui::summariser::{RequestState, SummariserIntent};
use parking_lot::Mutex;
use std::net::TcpListener;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// `n` distinct words separated by single spaces.
pub fn words(n: usize) -> String {
    (0..n)
        .map(|i| format!("word{}", i))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A base URL nothing is listening on.
pub fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

pub fn test_config(base_url: &str, variant: Variant) -> Config {
    let mut config = Config::default();
    config.endpoint.base_url = base_url.to_string();
    config.endpoint.timeout_seconds = 5;
    config.endpoint.connect_timeout_seconds = 2;
    config.summary.variant = variant;
    config
}

// -- Clipboard double ---------------------------------------------------------

/// Records every write; can be switched to fail.
#[derive(Clone, Default)]
pub struct FakeClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    fail: Arc<AtomicBool>,
}

impl FakeClipboard {
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().clone()
    }

    pub fn set_failing(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }
}

impl ClipboardSink for FakeClipboard {
    fn write_text(&mut self, text: &str) -> Result<CopyMethod, ClipboardError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ClipboardError::Terminal(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "clipboard denied",
            )));
        }
        self.writes.lock().push(text.to_string());
        Ok(CopyMethod::Native)
    }
}

// -- App harness --------------------------------------------------------------

pub struct TestApp {
    pub app: App,
    pub events: UnboundedReceiver<AppEvent>,
    pub clipboard: FakeClipboard,
}

/// Build an `App` on the current tokio runtime. Must be called inside one.
pub fn make_app(base_url: &str, variant: Variant) -> TestApp {
    let config = test_config(base_url, variant);
    let client = Arc::new(
        SummarizeClient::new(&config.endpoint, variant).expect("Failed to build client"),
    );
    let (tx, rx) = mpsc::unbounded_channel();
    let clipboard = FakeClipboard::default();
    let app = App::new(
        &config,
        client,
        Box::new(clipboard.clone()),
        tx,
        tokio::runtime::Handle::current(),
    );
    TestApp {
        app,
        events: rx,
        clipboard,
    }
}

impl TestApp {
    pub fn type_text(&mut self, text: &str) {
        self.app.dispatch(SummariserIntent::Paste(text.to_string()));
    }

    /// Wait for the next event pushed by a background task.
    pub async fn next_event(&mut self) -> AppEvent {
        tokio::time::timeout(Duration::from_secs(10), self.events.recv())
            .await
            .expect("Timed out waiting for app event")
            .expect("Event channel closed")
    }

    /// Wait for the next event and feed it to the app.
    pub async fn settle(&mut self) {
        let event = self.next_event().await;
        self.app.handle_event(event);
    }

    /// Put the app into "summary displayed" without touching the network.
    pub fn seed_summary(&mut self, summary: &str) {
        self.type_text(&words(30));
        self.app.dispatch(SummariserIntent::Submit);
        let RequestState::InFlight { request_id } = self.app.state().request else {
            panic!("Expected InFlight after a valid submit");
        };
        self.app.dispatch(SummariserIntent::RequestSucceeded {
            request_id,
            result: SummaryResult {
                summary: summary.to_string(),
                ..SummaryResult::default()
            },
        });
    }
}
