//! Login page with email + password.

use leptos::prelude::*;

use crate::components::auth_form::AuthForm;
use crate::util::form::FormMode;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-page__card">
                <AuthForm mode=FormMode::Login/>
            </div>
        </div>
    }
}
