//! Top bar with the signed-in user and a logout menu.

use leptos::prelude::*;
use session::Session;

use crate::state::auth::{BrowserAuth, avatar_initial, display_email, display_name};
use crate::util::navigation::{confirm, full_redirect};

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<BrowserAuth>();
    let session = expect_context::<RwSignal<Session>>();
    let show_menu = RwSignal::new(false);

    let on_logout = move |_: leptos::ev::MouseEvent| {
        if !confirm("Are you sure you want to log out?") {
            return;
        }
        show_menu.set(false);
        full_redirect(auth.logout());
    };

    view! {
        <header class="app-header">
            <div class="app-header__spacer"></div>
            <div class="app-header__user">
                <button class="app-header__profile" on:click=move |_| show_menu.update(|open| *open = !*open)>
                    <span class="app-header__avatar">{move || avatar_initial(&session.get()).to_string()}</span>
                    <span class="app-header__identity">
                        <span class="app-header__name">{move || display_name(&session.get())}</span>
                        <span class="app-header__email">{move || display_email(&session.get())}</span>
                    </span>
                </button>
                <Show when=move || show_menu.get()>
                    <div class="app-header__menu">
                        <button class="app-header__logout" on:click=on_logout.clone()>
                            "Log out"
                        </button>
                    </div>
                </Show>
            </div>
        </header>
    }
}
