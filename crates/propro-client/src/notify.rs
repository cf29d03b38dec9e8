//! Transient user-facing notifications (the UI toast).

use tokio::sync::broadcast;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

#[derive(Clone, Debug)]
pub struct Notification {
    pub level: Level,
    pub message: String,
}

/// Fan-out channel for notifications. Publishing with no subscribers is
/// fine; nothing blocks on delivery.
#[derive(Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Notification>,
}

impl Notifier {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    pub fn info(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(%message, "notification");
        let _ = self.tx.send(Notification {
            level: Level::Info,
            message,
        });
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(%message, "notification");
        let _ = self.tx.send(Notification {
            level: Level::Error,
            message,
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(64)
    }
}
