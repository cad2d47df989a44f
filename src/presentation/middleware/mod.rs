//! HTTP Middleware
//!
//! Request-level middleware: authentication and CORS.

mod auth;
mod cors;

pub use auth::{auth_middleware, AuthUser, Claims};
pub use cors::create_cors_layer;
