//! Login/registration form model and validation.
//!
//! DESIGN
//! ======
//! Kept free of Leptos types so validation rules and user-facing error text
//! can be tested directly; `components::auth_form` only wires signals to it.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use session::wire::{LoginRequest, RegisterRequest};
use session::{Route, SessionError};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Login,
    Register,
}

impl FormMode {
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Welcome back!",
            Self::Register => "Create your account",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Login => "Please enter your details.",
            Self::Register => "Sign up to get started.",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Register => "Create account",
        }
    }

    pub fn busy_label(self) -> &'static str {
        match self {
            Self::Login => "Signing in...",
            Self::Register => "Creating account...",
        }
    }

    /// Prompt and target for switching to the other form.
    pub fn switch(self) -> (&'static str, &'static str, Route) {
        match self {
            Self::Login => ("Don't have an account?", "Sign up", Route::Register),
            Self::Register => ("Already have an account?", "Sign in", Route::Login),
        }
    }

    fn fallback_error(self) -> &'static str {
        match self {
            Self::Login => "Login failed",
            Self::Register => "Registration failed",
        }
    }
}

/// Raw field values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialsForm {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl CredentialsForm {
    /// Check the fields required by `mode`.
    ///
    /// # Errors
    ///
    /// Returns the message to show next to the form.
    pub fn validate(&self, mode: FormMode) -> Result<(), &'static str> {
        let username_missing = mode == FormMode::Register && self.username.trim().is_empty();
        if self.email.trim().is_empty() || self.password.is_empty() || username_missing {
            return Err("All fields are required.");
        }
        if !is_valid_email(self.email.trim()) {
            return Err("Invalid email format.");
        }
        if mode == FormMode::Register && self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err("Password must be at least 6 characters.");
        }
        Ok(())
    }

    pub fn login_request(&self) -> LoginRequest {
        LoginRequest { email: self.email.trim().to_owned(), password: self.password.clone() }
    }

    pub fn register_request(&self) -> RegisterRequest {
        RegisterRequest {
            username: self.username.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
        }
    }
}

/// `local@domain.tld` shape: one `@`, no whitespace, a dot inside the domain.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Message shown when submitting the form failed.
pub fn error_text(err: &SessionError, mode: FormMode) -> String {
    match err {
        SessionError::Rejected { message, .. } => message.clone(),
        SessionError::NetworkUnreachable(_) => "Could not reach the server. Try again later.".to_owned(),
        SessionError::StorageUnavailable(_) => "Signed in, but this browser blocked saving the session.".to_owned(),
        _ => mode.fallback_error().to_owned(),
    }
}
