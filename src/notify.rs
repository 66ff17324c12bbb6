//! Transient user notifications
//!
//! The state machines emit notifications through the [`Notifier`] capability
//! they are handed at construction. [`ToastQueue`] is the implementation the
//! TUI renders from.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How a notification should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// Fire-and-forget sink for notifications
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

/// A notification waiting to be displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Monotonically increasing id
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    /// When the toast was raised
    pub created_at: Instant,
}

/// Queue of toasts that expire after a fixed lifetime
#[derive(Debug)]
pub struct ToastQueue {
    toasts: RefCell<VecDeque<Toast>>,
    next_id: Cell<u64>,
    lifetime: Duration,
}

impl ToastQueue {
    /// Default time a toast stays on screen
    pub const DEFAULT_LIFETIME: Duration = Duration::from_millis(3000);

    pub fn new(lifetime: Duration) -> Self {
        Self { toasts: RefCell::new(VecDeque::new()), next_id: Cell::new(1), lifetime }
    }

    /// Drop toasts older than the lifetime
    pub fn expire(&self, now: Instant) {
        let lifetime = self.lifetime;
        self.toasts.borrow_mut().retain(|t| now.saturating_duration_since(t.created_at) < lifetime);
    }

    /// Toasts currently on screen, oldest first
    pub fn visible(&self) -> Vec<Toast> {
        self.toasts.borrow().iter().cloned().collect()
    }

    /// Most recent toast, if any
    pub fn latest(&self) -> Option<Toast> {
        self.toasts.borrow().back().cloned()
    }

    pub fn len(&self) -> usize {
        self.toasts.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.borrow().is_empty()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIFETIME)
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, message: &str, severity: Severity) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        tracing::debug!(id, ?severity, "{}", message);

        self.toasts.borrow_mut().push_back(Toast {
            id,
            message: message.to_string(),
            severity,
            created_at: Instant::now(),
        });
    }
}
