//! Cancellable background tasks.
//!
//! Guards and the refresher run as long-lived futures on the UI event loop.
//! Wrapping them here ties their lifetime to a handle the owning view keeps,
//! so teardown stops them instead of leaving timers acting on a disposed view.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::future::Future;

use futures::FutureExt;
use futures::future::{AbortHandle, Abortable};

/// Stops the paired task when cancelled or dropped.
#[derive(Debug)]
pub struct CancelHandle(AbortHandle);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.abort();
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.is_aborted()
    }
}

impl Drop for CancelHandle {
    fn drop(&mut self) {
        self.0.abort();
    }
}

/// Wrap `fut` so it can be stopped through the returned handle.
///
/// The returned future resolves to `()` either when `fut` completes or at the
/// first poll after cancellation.
pub fn cancellable<F>(fut: F) -> (impl Future<Output = ()>, CancelHandle)
where
    F: Future<Output = ()>,
{
    let (handle, registration) = AbortHandle::new_pair();
    let task = Abortable::new(fut, registration).map(|_| ());
    (task, CancelHandle(handle))
}
