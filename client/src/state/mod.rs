//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The authoritative session lives in `session::SessionState`; `auth` mirrors
//! it into a Leptos signal for rendering.

pub mod auth;
