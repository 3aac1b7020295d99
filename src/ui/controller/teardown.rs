use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Shared flag marking a screen as torn down.
///
/// The controller loop races every await against [`TeardownSignal::wait`],
/// and sinks check [`TeardownSignal::is_torn_down`] so nothing mutates view
/// state once the host discarded the screen.
#[derive(Clone, Default)]
pub struct TeardownSignal {
    torn_down: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl TeardownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::SeqCst)
    }

    pub fn signal(&self) {
        if !self.torn_down.swap(true, Ordering::SeqCst) {
            self.notify.notify_waiters();
        }
    }

    pub async fn wait(&self) {
        // Subscribe to Notify BEFORE checking the flag: signal() could fire
        // between the check and the await, and notify_waiters() does not
        // store a permit.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_torn_down() {
            return;
        }
        notified.await;
    }
}
