//! Networking modules for the auth REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the transport; request/response shapes and status classification
//! live in `session::wire`.

pub mod api;
