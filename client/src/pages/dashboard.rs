//! Dashboard landing page for signed-in users.
//!
//! Fetches the server-confirmed account through an authenticated request; a
//! 401 there logs the session out and the surrounding guard redirects.

use leptos::prelude::*;
use session::{Session, SessionError, User};

use crate::components::header::Header;
use crate::net::api::HttpAuthApi;
use crate::state::auth::{BrowserAuth, display_name};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<BrowserAuth>();
    let api = expect_context::<HttpAuthApi>();
    let session = expect_context::<RwSignal<Session>>();

    let account = LocalResource::new(move || {
        let auth = auth.clone();
        let api = api.clone();
        async move { api.fetch_account(&auth).await }
    });

    view! {
        <div class="dashboard-page">
            <Header/>
            <main class="dashboard-page__main">
                <h1>"Dashboard"</h1>
                <p class="dashboard-page__welcome">{move || format!("Welcome, {}.", display_name(&session.get()))}</p>
                <Suspense fallback=move || view! { <p>"Loading account..."</p> }>
                    {move || account.get().map(account_status)}
                </Suspense>
            </main>
        </div>
    }
}

fn account_status(result: Result<Option<User>, SessionError>) -> AnyView {
    match result {
        Ok(Some(user)) => view! {
            <p class="dashboard-page__account">
                {format!("Account #{} verified: {} <{}>", user.id, user.username, user.email)}
            </p>
        }
        .into_any(),
        Ok(None) => view! { <p class="dashboard-page__account">"Session verified."</p> }.into_any(),
        Err(SessionError::Unauthorized) => view! { <p>"Session expired. Redirecting..."</p> }.into_any(),
        Err(e) => view! {
            <p class="dashboard-page__account dashboard-page__account--offline">
                {format!("Working offline: {e}")}
            </p>
        }
        .into_any(),
    }
}
