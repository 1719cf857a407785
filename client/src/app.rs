//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the single `SessionState` for the page. Startup verification, the
//! signal mirror and the token refresher are spawned here and cancelled when
//! the root view is torn down.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};
use session::{Auth, AuthConfig, CredentialStore, Session, SessionState};

use crate::components::guard::{GuestOnly, RequireAuth};
use crate::net::api::HttpAuthApi;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage};
use crate::state::auth::BrowserAuth;
use crate::util::config::build_config;
use crate::util::storage::LocalStorage;

/// Root application component.
///
/// Provides the auth handle, API client, session signal and config to every
/// child, then starts the session background tasks.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = build_config();
    let state = SessionState::new();
    let auth: BrowserAuth = Auth::new(state.clone(), CredentialStore::new(LocalStorage));
    let api = HttpAuthApi::new(config.api_base_url.clone());
    let session = RwSignal::new(state.get());

    provide_context(auth.clone());
    provide_context(api.clone());
    provide_context(session);
    provide_context(config.clone());

    start_background(&auth, &api, session, &config);

    view! {
        <Title text="Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <Redirect path=session::Route::Dashboard.path()/> }
                />
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <GuestOnly><LoginPage/></GuestOnly> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <GuestOnly><RegisterPage/></GuestOnly> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}

/// Spawn the signal mirror, startup verification and, if enabled, the
/// periodic refresher.
fn start_background(auth: &BrowserAuth, api: &HttpAuthApi, session: RwSignal<Session>, config: &AuthConfig) {
    #[cfg(feature = "csr")]
    {
        use leptos::task::spawn_local;
        use session::{Refresher, initialize};
        use session::task::cancellable;

        use crate::state::auth::mirror_session;
        use crate::util::timer::BrowserTimer;

        let mut handles = Vec::new();

        let (mirror, handle) = cancellable(mirror_session(auth.state().subscribe(), session));
        spawn_local(mirror);
        handles.push(handle);

        let init = config.init();
        let (init_auth, init_api) = (auth.clone(), api.clone());
        spawn_local(async move {
            initialize(&init_auth, &init_api, &BrowserTimer, init).await;
        });

        if let Some(interval) = config.refresh_interval {
            let refresher = Refresher::new(auth.clone(), api.clone(), BrowserTimer, interval);
            let (task, handle) = cancellable(refresher.run());
            spawn_local(task);
            handles.push(handle);
        } else {
            log::info!("token refresh disabled");
        }

        on_cleanup(move || drop(handles));
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (auth, api, session, config);
    }
}
