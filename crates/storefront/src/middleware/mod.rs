//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. `TraceLayer` (request tracing)
//! 2. Session layer (tower-sessions, signed cookie, in-memory store)

pub mod session;

pub use session::{SESSION_COOKIE_NAME, create_session_layer};
