//! Cancellable debounce timer for transcript finalization.
//!
//! Every new partial transcript cancels the pending dispatch and
//! reschedules it, so a command is only processed after a pause in
//! speech input. Dropping the timer cancels any pending task.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

pub(crate) struct DebounceTimer {
    handle: Option<JoinHandle<()>>,
}

impl DebounceTimer {
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Run `task` after `delay`, cancelling any previously scheduled run.
    pub fn schedule<F>(&mut self, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        }));
    }

    /// Cancel the pending run, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle.as_ref().map(|h| !h.is_finished()).unwrap_or(false)
    }
}

impl Drop for DebounceTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
