//! Background work bound to the lifetime of a view.
//!
//! A page that starts a fetch when it is shown must not receive the result
//! after it has gone away. [`ViewTask`] owns the spawned task and aborts it
//! when dropped, so the result is delivered only to a view that still exists.

use std::future::Future;

use tokio::task::JoinHandle;

/// A spawned task that is aborted when its owner drops it.
#[derive(Debug)]
pub struct ViewTask<T> {
    handle: Option<JoinHandle<T>>,
}

impl<T: Send + 'static> ViewTask<T> {
    /// Spawn `future` on the current runtime.
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self {
            handle: Some(tokio::spawn(future)),
        }
    }
}

impl<T> ViewTask<T> {
    /// Wait for the result.
    ///
    /// Returns `None` if the task was cancelled or panicked. Dropping the
    /// returned future before it completes aborts the task.
    pub async fn join(mut self) -> Option<T> {
        let handle = self.handle.as_mut()?;
        let result = handle.await;
        self.handle = None;
        match result {
            Ok(value) => Some(value),
            Err(err) if err.is_panic() => {
                tracing::error!(error = %err, "View task panicked");
                None
            }
            Err(_) => None,
        }
    }

    /// Abort the task now.
    pub fn cancel(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Whether the task has run to completion (or was aborted).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }
}

impl<T> Drop for ViewTask<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_join_returns_result() {
        let task = ViewTask::spawn(async { 21 * 2 });
        assert_eq!(task.join().await, Some(42));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_aborts_before_completion() {
        let delivered = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&delivered);

        let task = ViewTask::spawn(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            flag.store(true, Ordering::SeqCst);
        });
        drop(task);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(!delivered.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel() {
        let task = ViewTask::spawn(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            "late"
        });
        assert!(!task.is_finished());
        task.cancel();
    }

    #[tokio::test(start_paused = true)]
    async fn test_abandoned_join_aborts_task() {
        let delivered = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&delivered);

        let task = ViewTask::spawn(async move {
            tokio::time::sleep(Duration::from_secs(10)).await;
            flag.store(true, Ordering::SeqCst);
        });

        let timed_out = tokio::time::timeout(Duration::from_secs(1), task.join()).await;
        assert!(timed_out.is_err());

        tokio::time::sleep(Duration::from_secs(30)).await;
        assert!(!delivered.load(Ordering::SeqCst));
    }

    #[allow(clippy::panic)]
    async fn explode() -> u8 {
        panic!("view task failed")
    }

    #[tokio::test]
    async fn test_panic_yields_none() {
        let task = ViewTask::spawn(explode());
        assert_eq!(task.join().await, None);
    }
}
