//! Route guard components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wrap route views in `app`: protected pages in `RequireAuth`, the login and
//! register pages in `GuestOnly`. Each instance owns a `session::Guard`
//! subscription, so an external logout re-renders an open protected page as
//! a redirect to `/login` without polling.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use session::{Decision, Guard, GuardKind};

use crate::state::auth::BrowserAuth;

/// Render children only for signed-in users; otherwise redirect to `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded(GuardKind::Authenticated, "Verifying access...", children)
}

/// Render children only for signed-out users; otherwise redirect to `/dashboard`.
#[component]
pub fn GuestOnly(children: ChildrenFn) -> impl IntoView {
    guarded(GuardKind::GuestOnly, "Checking authentication...", children)
}

fn guarded(kind: GuardKind, pending_label: &'static str, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<BrowserAuth>();
    let mut guard = Guard::new(kind, auth.state());
    let decision = RwSignal::new(guard.current());

    // The subscription is cancelled with the view so no task outlives it.
    #[cfg(feature = "csr")]
    {
        let (task, handle) = session::task::cancellable(async move {
            while let Some(next) = guard.changed().await {
                decision.set(next);
            }
        });
        leptos::task::spawn_local(task);
        on_cleanup(move || handle.cancel());
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = &mut guard;
    }

    move || match decision.get() {
        Decision::Checking => view! {
            <div class="guard-placeholder">
                <div class="guard-placeholder__spinner"></div>
                <p class="guard-placeholder__label">{pending_label}</p>
            </div>
        }
        .into_any(),
        Decision::Render => children(),
        Decision::Redirect(route) => view! { <Redirect path=route.path()/> }.into_any(),
    }
}
