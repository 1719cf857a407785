//! Timer seam so timeouts and intervals run on `gloo-timers` in the browser
//! and on the tokio clock in tests.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{Either, select};

pub trait Timer {
    /// Resolve after `duration` has elapsed.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Race `fut` against `duration`. `None` means the deadline won.
pub async fn with_timeout<T, F>(timer: &T, duration: Duration, fut: F) -> Option<F::Output>
where
    T: Timer,
    F: Future,
{
    let fut = pin!(fut);
    let deadline = pin!(timer.sleep(duration));
    match select(fut, deadline).await {
        Either::Left((value, _)) => Some(value),
        Either::Right(((), _)) => None,
    }
}
