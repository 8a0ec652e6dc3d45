// clarity-core/src/application/loader.rs
//
// Drives a page load through the view state machine. Every page uses this;
// nothing here knows which fixture is behind the future.

use std::future::Future;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::domain::view_state::{ViewEvent, ViewState};
use crate::error::ClarityError;

/// Awaits `load` and folds its outcome into a terminal `ViewState`.
pub async fn load_view<T, F>(page: &str, load: F) -> ViewState<T>
where
    F: Future<Output = Result<T, ClarityError>>,
{
    let state = ViewState::Idle.reduce(ViewEvent::Start);
    match load.await {
        Ok(data) => state.reduce(ViewEvent::Loaded(data)),
        Err(e) => {
            error!("Error loading {} data: {}", page, e);
            state.reduce(ViewEvent::LoadFailed(e.to_string()))
        }
    }
}

/// Consumer side of a background load.
#[derive(Debug)]
pub struct PendingView<T> {
    page: &'static str,
    rx: oneshot::Receiver<ViewState<T>>,
    task: JoinHandle<()>,
}

impl<T> PendingView<T> {
    pub fn page(&self) -> &'static str {
        self.page
    }

    /// Waits for the load to settle. The state is always terminal.
    pub async fn wait(self) -> ViewState<T> {
        match self.rx.await {
            Ok(state) => state,
            Err(_) => ViewState::Failed(format!("{} load task ended without a result", self.page)),
        }
    }

    /// Navigating away: the load keeps running and its result is dropped.
    pub fn abandon(self) -> JoinHandle<()> {
        drop(self.rx);
        self.task
    }
}

/// Runs `load` on its own task. The result is delivered to the returned
/// `PendingView`, or discarded if that view was dropped in the meantime.
pub fn spawn_view_load<T, F>(page: &'static str, load: F) -> PendingView<T>
where
    T: Send + 'static,
    F: Future<Output = Result<T, ClarityError>> + Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    let task = tokio::spawn(async move {
        let state = load_view(page, load).await;
        if tx.send(state).is_err() {
            debug!(page, "View no longer mounted, discarding load result");
        }
    });
    PendingView { page, rx, task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use crate::domain::fixtures::{FixtureKind, RuleCatalog};
    use crate::ports::{FixtureSource, load_fixture};
    use anyhow::Result;
    use async_trait::async_trait;
    use std::io;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// Serves every dataset with the wrong shape.
    struct Malformed;

    #[async_trait]
    impl FixtureSource for Malformed {
        async fn load_raw(&self, _kind: FixtureKind) -> Result<serde_json::Value, ClarityError> {
            Ok(serde_json::json!({ "rules": 5 }))
        }
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .map_err(|_| io::Error::other("poisoned"))?
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_successful_load_is_ready() {
        let state = load_view("rules", async { Ok::<_, ClarityError>(vec![1, 2, 3]) }).await;
        assert_eq!(state, ViewState::Ready(vec![1, 2, 3]));
    }

    #[tokio::test]
    async fn test_failed_load_is_failed_not_loading() {
        let state = load_view("profiling", async {
            Err::<u8, ClarityError>(DomainError::DatabaseNotFound("nope".into()).into())
        })
        .await;
        assert!(matches!(state, ViewState::Failed(ref reason) if reason.contains("nope")));
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_shape_error_is_logged_once() -> Result<()> {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let state = load_view("Rule Management", async {
            load_fixture::<RuleCatalog>(&Malformed).await
        })
        .await;
        assert!(matches!(state, ViewState::Failed(_)));

        let captured = logs.0.lock().map_err(|_| anyhow::anyhow!("poisoned"))?;
        let text = String::from_utf8_lossy(&captured);
        assert_eq!(text.matches("Error loading").count(), 1);
        assert!(text.contains("Error loading Rule Management data"));
        Ok(())
    }

    #[tokio::test]
    async fn test_spawned_load_delivers_state() {
        let pending = spawn_view_load("costs", async { Ok::<_, ClarityError>(7u32) });
        assert_eq!(pending.page(), "costs");
        assert_eq!(pending.wait().await, ViewState::Ready(7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_consumer_does_not_panic() -> Result<()> {
        let pending = spawn_view_load("incidents", async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            Ok::<_, ClarityError>("late")
        });
        // Join error would mean the task panicked.
        pending.abandon().await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_dropping_pending_view_outright() {
        let (done_tx, done_rx) = oneshot::channel();
        let pending = spawn_view_load("lineage", async move {
            tokio::task::yield_now().await;
            let _ = done_tx.send(());
            Ok::<_, ClarityError>(1u8)
        });
        drop(pending);
        assert!(done_rx.await.is_ok());
    }
}
