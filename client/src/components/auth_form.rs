//! Shared login / registration form.
//!
//! On success the session is authenticated through `BrowserAuth` and the user
//! is sent to `/dashboard`; failures show the server's message inline.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpAuthApi;
use crate::state::auth::BrowserAuth;
use crate::util::form::{CredentialsForm, FormMode};

#[component]
pub fn AuthForm(mode: FormMode) -> impl IntoView {
    let auth = expect_context::<BrowserAuth>();
    let api = expect_context::<HttpAuthApi>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = CredentialsForm { username: username.get(), email: email.get(), password: password.get() };
        if let Err(msg) = form.validate(mode) {
            error.set(Some(msg.to_owned()));
            return;
        }
        error.set(None);
        busy.set(true);

        #[cfg(feature = "csr")]
        {
            use leptos_router::NavigateOptions;
            use session::Route;

            use crate::util::form::error_text;

            let auth = auth.clone();
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let response = match mode {
                    FormMode::Login => api.login(&form.login_request()).await,
                    FormMode::Register => api.register(&form.register_request()).await,
                };
                match response.and_then(|resp| auth.authenticate(resp.user, resp.token)) {
                    Ok(()) => navigate(Route::Dashboard.path(), NavigateOptions::default()),
                    Err(e) => {
                        log::warn!("{:?} failed: {e}", mode);
                        error.set(Some(error_text(&e, mode)));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&auth, &api, &navigate, form);
            busy.set(false);
        }
    };

    let (switch_prompt, switch_label, switch_route) = mode.switch();

    view! {
        <h2 class="auth-form__title">{mode.title()}</h2>
        <p class="auth-form__subtitle">{mode.subtitle()}</p>
        <form class="auth-form" on:submit=on_submit>
            <Show when=move || mode == FormMode::Register>
                <label class="auth-form__label">
                    "Username"
                    <input
                        class="auth-form__input"
                        type="text"
                        placeholder="Enter your username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                        disabled=move || busy.get()
                    />
                </label>
            </Show>
            <label class="auth-form__label">
                "Email"
                <input
                    class="auth-form__input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    disabled=move || busy.get()
                />
            </label>
            <label class="auth-form__label">
                "Password"
                <span class="auth-form__password">
                    <input
                        class="auth-form__input"
                        type=move || if show_password.get() { "text" } else { "password" }
                        placeholder=match mode {
                            FormMode::Login => "Enter password",
                            FormMode::Register => "Create a password",
                        }
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        disabled=move || busy.get()
                    />
                    <button
                        class="auth-form__reveal"
                        type="button"
                        on:click=move |_| show_password.update(|shown| *shown = !*shown)
                        disabled=move || busy.get()
                    >
                        {move || if show_password.get() { "Hide" } else { "Show" }}
                    </button>
                </span>
            </label>
            <Show when=move || error.get().is_some()>
                <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { mode.busy_label() } else { mode.submit_label() }}
            </button>
        </form>
        <p class="auth-form__switch">
            {switch_prompt}
            " "
            <A href=switch_route.path()>{switch_label}</A>
        </p>
    }
}
