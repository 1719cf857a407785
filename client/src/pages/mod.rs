//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Access control is applied in `app`, not inside pages.

pub mod dashboard;
pub mod login;
pub mod register;
