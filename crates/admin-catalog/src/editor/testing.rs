//! Test doubles for [`Transport`] and [`Surface`].
//!
//! ```
//! use admin_catalog::editor::testing::ScriptedTransport;
//! use admin_catalog::editor::transport::Transport;
//!
//! #[tokio::main]
//! async fn main() {
//!     let transport = ScriptedTransport::new();
//!     transport.reply_json(serde_json::json!({"success": true}));
//!
//!     let form = vec![("quantity", "3".to_string())];
//!     let body = transport.post_form("/x/", &form, Some("tok")).await.unwrap();
//!     assert_eq!(body["success"], true);
//!     assert_eq!(transport.calls()[0].form, vec![("quantity".to_string(), "3".to_string())]);
//! }
//! ```

use super::error::TransportError;
use super::surface::{ConfirmDialog, Decision, Notice, Surface};
use super::transport::Transport;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::{oneshot, Notify};

type Reply = Result<serde_json::Value, TransportError>;

enum Scripted {
    Now(Reply),
    Deferred(oneshot::Receiver<Reply>),
}

/// A request seen by [`ScriptedTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub path: String,
    pub form: Vec<(String, String)>,
    pub csrf_token: Option<String>,
}

/// Answers requests from a queue of scripted replies, in order, and records
/// every request. An empty queue answers with a network error.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<RecordedCall>>,
    called: Notify,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_json(&self, body: serde_json::Value) {
        self.push(Scripted::Now(Ok(body)));
    }

    pub fn reply_error(&self, error: TransportError) {
        self.push(Scripted::Now(Err(error)));
    }

    /// Queues a reply that is held back until the returned sender fires.
    /// Dropping the sender answers with a network error.
    pub fn defer(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.push(Scripted::Deferred(rx));
        tx
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    /// Waits until at least `count` requests have been received.
    pub async fn wait_for_calls(&self, count: usize) {
        loop {
            let notified = self.called.notified();
            if lock(&self.calls).len() >= count {
                return;
            }
            notified.await;
        }
    }

    fn push(&self, scripted: Scripted) {
        lock(&self.replies).push_back(scripted);
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn post_form(
        &self,
        path: &str,
        form: &[(&'static str, String)],
        csrf_token: Option<&str>,
    ) -> Result<serde_json::Value, TransportError> {
        lock(&self.calls).push(RecordedCall {
            path: path.to_string(),
            form: form
                .iter()
                .map(|(key, value)| (key.to_string(), value.clone()))
                .collect(),
            csrf_token: csrf_token.map(str::to_string),
        });
        let next = lock(&self.replies).pop_front();
        self.called.notify_waiters();

        match next {
            Some(Scripted::Now(reply)) => reply,
            Some(Scripted::Deferred(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(TransportError::Network("reply dropped".to_string()))),
            None => Err(TransportError::Network("no scripted reply".to_string())),
        }
    }
}

/// Records notices and reloads, and answers every dialog with a fixed
/// decision.
pub struct RecordingSurface {
    decision: Decision,
    dialogs: Mutex<Vec<ConfirmDialog>>,
    notices: Mutex<Vec<Notice>>,
    reloads: AtomicUsize,
}

impl RecordingSurface {
    pub fn new(decision: Decision) -> Self {
        Self {
            decision,
            dialogs: Mutex::new(Vec::new()),
            notices: Mutex::new(Vec::new()),
            reloads: AtomicUsize::new(0),
        }
    }

    pub fn dialogs(&self) -> Vec<ConfirmDialog> {
        lock(&self.dialogs).clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        lock(&self.notices).clone()
    }

    pub fn reloads(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(Decision::Confirm)
    }
}

#[async_trait]
impl Surface for RecordingSurface {
    async fn confirm(&self, dialog: &ConfirmDialog) -> Decision {
        lock(&self.dialogs).push(dialog.clone());
        self.decision
    }

    fn notify(&self, notice: Notice) {
        lock(&self.notices).push(notice);
    }

    fn reload(&self) {
        self.reloads.fetch_add(1, Ordering::SeqCst);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
