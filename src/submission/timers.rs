//! Owned collection of pending timer tasks

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Every background task the orchestrator starts lives here so teardown can
/// abort all of them in one place.
#[derive(Debug, Default)]
pub struct TimerSet {
    handles: Vec<JoinHandle<()>>,
}

impl TimerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` in the background
    pub fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.prune();
        self.handles.push(tokio::spawn(task));
    }

    /// Run `task` once `delay` has elapsed
    pub fn spawn_after<F>(&mut self, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });
    }

    /// Number of tasks that have not finished yet
    pub fn pending(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }

    pub fn abort_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }

    fn prune(&mut self) {
        self.handles.retain(|h| !h.is_finished());
    }
}

impl Drop for TimerSet {
    fn drop(&mut self) {
        self.abort_all();
    }
}
