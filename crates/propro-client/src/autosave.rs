//! Debounced autosave for the notes editor.
//!
//! A spawned task owns a debounce window. Each `input` replaces the
//! pending draft and resets the timer; once the window elapses with no
//! further input the pending draft is saved exactly once. Last write
//! wins. Shutdown flushes any pending draft before exiting.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::error::ClientError;
use crate::notify::Notifier;

/// Idle period before a pending draft is written out.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1500);

enum Msg<D> {
    Input(D),
    Flush,
}

pub struct Autosave<D> {
    tx: mpsc::Sender<Msg<D>>,
    token: CancellationToken,
    task: tokio::task::JoinHandle<()>,
}

impl<D: Send + 'static> Autosave<D> {
    /// Spawn the debounce task. `save` is called with the pending draft
    /// when the window elapses; a save failure emits a notification and
    /// is otherwise dropped (no retry).
    pub fn spawn<F, Fut>(delay: Duration, notifier: Notifier, mut save: F) -> Self
    where
        F: FnMut(D) -> Fut + Send + 'static,
        Fut: Future<Output = Result<(), ClientError>> + Send,
    {
        let (tx, mut rx) = mpsc::channel::<Msg<D>>(64);
        let token = CancellationToken::new();
        let child = token.clone();

        let task = tokio::spawn(async move {
            let mut pending: Option<D> = None;
            loop {
                // The sleep is re-created on every pass, so any incoming
                // message restarts the debounce window.
                tokio::select! {
                    msg = rx.recv() => match msg {
                        Some(Msg::Input(draft)) => pending = Some(draft),
                        Some(Msg::Flush) => {
                            if let Some(draft) = pending.take() {
                                run_save(&mut save, draft, &notifier).await;
                            }
                        }
                        None => break,
                    },
                    _ = tokio::time::sleep(delay), if pending.is_some() => {
                        if let Some(draft) = pending.take() {
                            run_save(&mut save, draft, &notifier).await;
                        }
                    }
                    _ = child.cancelled() => break,
                }
            }

            // Drain anything still queued, then flush the final draft.
            while let Ok(msg) = rx.try_recv() {
                if let Msg::Input(draft) = msg {
                    pending = Some(draft);
                }
            }
            if let Some(draft) = pending.take() {
                run_save(&mut save, draft, &notifier).await;
            }
        });

        Self { tx, token, task }
    }

    /// Replace the pending draft and restart the debounce window.
    pub async fn input(&self, draft: D) {
        let _ = self.tx.send(Msg::Input(draft)).await;
    }

    /// Save any pending draft immediately.
    pub async fn flush(&self) {
        let _ = self.tx.send(Msg::Flush).await;
    }

    /// Stop the task, flushing any pending draft first.
    pub fn shutdown(&self) {
        self.token.cancel();
    }

    /// Wait for the task to finish.
    pub async fn stopped(self) {
        self.task.await.ok();
    }
}

async fn run_save<D, F, Fut>(save: &mut F, draft: D, notifier: &Notifier)
where
    F: FnMut(D) -> Fut,
    Fut: Future<Output = Result<(), ClientError>>,
{
    match save(draft).await {
        Ok(()) => tracing::debug!("autosave complete"),
        Err(e) => notifier.error(format!("autosave failed: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    const DELAY: Duration = Duration::from_millis(1500);

    fn recording(
        sink: &Arc<Mutex<Vec<String>>>,
    ) -> impl FnMut(String) -> std::pin::Pin<Box<dyn Future<Output = Result<(), ClientError>> + Send>>
    {
        let sink = sink.clone();
        move |draft: String| {
            let sink = sink.clone();
            Box::pin(async move {
                sink.lock().push(draft);
                Ok(())
            })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn saves_after_idle_period() {
        let sink = Arc::new(Mutex::new(Vec::new()));
        let autosave = Autosave::spawn(DELAY, Notifier::default(), recording(&sink));

        autosave.input("draft one".to_string()).await;
        tokio::time::sleep(DELAY + Duration::from_millis(100)).await;

        assert_eq!(*sink.lock(), vec!["draft one"]);
        autosave.shutdown();
        autosave.stopped().await;
    }

    #[tokio::test(start_paused = true)]
    async fn new_input_resets_the_window() {
        let sink = Arc::new(Mutex::new(Vec::new()));
        let autosave = Autosave::spawn(DELAY, Notifier::default(), recording(&sink));

        autosave.input("a".to_string()).await;
        tokio::time::sleep(Duration::from_millis(1000)).await;
        autosave.input("b".to_string()).await;

        // 2s since the first keystroke, but only 1s since the second
        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert!(sink.lock().is_empty());

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(*sink.lock(), vec!["b"]);

        autosave.shutdown();
        autosave.stopped().await;
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_input_saves_only_last_draft() {
        let sink = Arc::new(Mutex::new(Vec::new()));
        let autosave = Autosave::spawn(DELAY, Notifier::default(), recording(&sink));

        for draft in ["v1", "v2", "v3"] {
            autosave.input(draft.to_string()).await;
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        tokio::time::sleep(DELAY + Duration::from_millis(100)).await;

        assert_eq!(*sink.lock(), vec!["v3"]);
        autosave.shutdown();
        autosave.stopped().await;
    }

    #[tokio::test(start_paused = true)]
    async fn flush_saves_immediately() {
        let sink = Arc::new(Mutex::new(Vec::new()));
        let autosave = Autosave::spawn(DELAY, Notifier::default(), recording(&sink));

        autosave.input("now".to_string()).await;
        autosave.flush().await;
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert_eq!(*sink.lock(), vec!["now"]);

        // The window was consumed by the flush; nothing saves twice
        tokio::time::sleep(DELAY + Duration::from_millis(100)).await;
        assert_eq!(sink.lock().len(), 1);

        autosave.shutdown();
        autosave.stopped().await;
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_flushes_pending_draft() {
        let sink = Arc::new(Mutex::new(Vec::new()));
        let autosave = Autosave::spawn(DELAY, Notifier::default(), recording(&sink));

        autosave.input("unsaved".to_string()).await;
        autosave.shutdown();
        autosave.stopped().await;

        assert_eq!(*sink.lock(), vec!["unsaved"]);
    }

    #[tokio::test(start_paused = true)]
    async fn save_failure_emits_notification() {
        let notifier = Notifier::default();
        let mut rx = notifier.subscribe();
        let autosave = Autosave::spawn(DELAY, notifier, |_draft: String| async {
            Err(ClientError::Decode("boom".into()))
        });

        autosave.input("doomed".to_string()).await;
        tokio::time::sleep(DELAY + Duration::from_millis(100)).await;

        let n = rx.recv().await.unwrap();
        assert_eq!(n.level, crate::notify::Level::Error);
        assert!(n.message.contains("autosave failed"));

        autosave.shutdown();
        autosave.stopped().await;
    }
}
