//! Transient-message notification service
//!
//! Session-scoped publish/subscribe for the short-lived messages the
//! presentation layer shows ("account not found", "showing partial
//! history"). A `Notifier` is an explicit instance handed to whoever needs
//! it; there is no process-wide registry. Dropping the instance drops all
//! subscriptions with it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Severity of a transient message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

/// A transient message for the presentation layer
#[derive(Debug, Clone)]
pub struct Notification {
    /// Message severity
    pub level: Level,
    /// Human-readable message
    pub message: String,
}

impl Notification {
    /// Create an info notification
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            message: message.into(),
        }
    }

    /// Create a warning notification
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            message: message.into(),
        }
    }

    /// Create an error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }
}

/// Handle identifying one subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn Fn(&Notification) + Send + Sync>;

/// Session-scoped publish/subscribe service for transient messages
#[derive(Clone, Default)]
pub struct Notifier {
    subscribers: Arc<Mutex<HashMap<u64, Callback>>>,
    next_id: Arc<AtomicU64>,
}

impl Notifier {
    /// Create a new notifier with no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback; returns a handle for unsubscribing
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Notification) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.subscribers
            .lock()
            .expect("notifier lock poisoned")
            .insert(id, Box::new(callback));
        SubscriptionId(id)
    }

    /// Remove a subscription; returns whether it existed
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers
            .lock()
            .expect("notifier lock poisoned")
            .remove(&id.0)
            .is_some()
    }

    /// Deliver a notification to every current subscriber
    pub fn publish(&self, notification: &Notification) {
        debug!(
            "Publishing {:?} notification: {}",
            notification.level, notification.message
        );
        let subscribers = self.subscribers.lock().expect("notifier lock poisoned");
        for callback in subscribers.values() {
            callback(notification);
        }
    }

    /// Number of active subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .expect("notifier lock poisoned")
            .len()
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
