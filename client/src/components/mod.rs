//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components read shared auth state from context and never own session
//! data themselves; pages compose them.

pub mod auth_form;
pub mod guard;
pub mod header;
