//! Full-page navigation.
//!
//! Logout leaves the SPA through a real page load so no view keeps state from
//! the previous session.

use session::Route;

/// Replace the current document with `route`.
pub fn full_redirect(route: Route) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(route.path()) {
                log::error!("redirect to {} failed: {e:?}", route.path());
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = route;
    }
}

/// Ask the user to confirm `message`. Always `true` outside the browser.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        true
    }
}
