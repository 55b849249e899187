//! Cancellable delayed tasks
//!
//! A [`Debouncer`] holds at most one pending task. Scheduling a new one
//! cancels the previous task if its delay has not elapsed yet. A task whose
//! delay has already elapsed runs to completion.

use std::future::Future;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tracing::trace;

pub struct Debouncer {
    runtime: Handle,
    pending: Option<CancellationToken>,
}

impl Debouncer {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            pending: None,
        }
    }

    /// Run `task` after `delay` unless another task is scheduled first.
    /// The returned token cancels this task only.
    pub fn schedule<F>(&mut self, delay: Duration, task: F) -> CancellationToken
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();

        let token = CancellationToken::new();
        let guard = token.clone();
        self.runtime.spawn(async move {
            tokio::select! {
                _ = guard.cancelled() => {
                    trace!("Debounced task cancelled");
                }
                _ = tokio::time::sleep(delay) => task.await,
            }
        });
        self.pending = Some(token.clone());
        token
    }

    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
