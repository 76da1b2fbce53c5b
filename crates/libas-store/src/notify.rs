//! # Toast Notification Sink
//!
//! Fire-and-forget user feedback. The store pushes a short title, a longer
//! description, and a severity flag; it never reads anything back and never
//! depends on delivery succeeding.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Toast severity, mapped to visual styling in the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Routine confirmation ("Item Added").
    Normal,
    /// Something was rejected or failed ("Selection Required").
    Destructive,
}

/// A single toast notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    /// Short headline.
    pub title: String,

    /// Longer description naming the product/quantity involved.
    pub description: String,

    /// Visual severity.
    pub severity: Severity,
}

impl Toast {
    /// Builds a normal-severity toast.
    pub fn normal(title: impl Into<String>, description: impl Into<String>) -> Self {
        Toast {
            title: title.into(),
            description: description.into(),
            severity: Severity::Normal,
        }
    }

    /// Builds a destructive-severity toast.
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Toast {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }
}

/// Sink for toast notifications.
pub trait ToastSink: Send {
    /// Delivers one toast. Must not fail; sinks swallow their own errors.
    fn push(&self, toast: Toast);
}

/// Sink that writes toasts to the tracing log.
///
/// Useful for headless hosts and as a development default.
#[derive(Debug, Default)]
pub struct LogSink;

impl ToastSink for LogSink {
    fn push(&self, toast: Toast) {
        match toast.severity {
            Severity::Normal => {
                tracing::info!(title = %toast.title, "{}", toast.description);
            }
            Severity::Destructive => {
                tracing::warn!(title = %toast.title, "{}", toast.description);
            }
        }
    }
}

/// Sink that queues toasts for the view layer to drain and render.
#[derive(Debug, Default)]
pub struct QueueSink {
    queue: Mutex<Vec<Toast>>,
}

impl QueueSink {
    /// Creates an empty queue sink.
    pub fn new() -> Self {
        QueueSink::default()
    }

    /// Takes all queued toasts, oldest first.
    pub fn drain(&self) -> Vec<Toast> {
        let mut queue = self.queue.lock().expect("toast queue mutex poisoned");
        std::mem::take(&mut *queue)
    }
}

impl ToastSink for QueueSink {
    fn push(&self, toast: Toast) {
        let mut queue = self.queue.lock().expect("toast queue mutex poisoned");
        queue.push(toast);
    }
}
