//! `gloo-timers` implementation of the session timer seam.

use std::time::Duration;

use session::timer::Timer;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    async fn sleep(&self, duration: Duration) {
        #[cfg(feature = "csr")]
        {
            gloo_timers::future::sleep(duration).await;
        }
        #[cfg(not(feature = "csr"))]
        {
            // No event loop to wake us; never fire.
            let _ = duration;
            std::future::pending::<()>().await;
        }
    }
}
