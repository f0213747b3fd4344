//! connector_core - Configuration logic for narrative connector clients.
//!
//! Pure, I/O-free building blocks shared by every connector client:
//! endpoint resolution ([`endpoints`]), the bearer credential type
//! ([`auth`]), and the request context handed to the networking layer
//! ([`context`]).

pub mod auth;
pub mod context;
pub mod endpoints;

pub use auth::{AuthError, BearerToken};
pub use context::RequestContext;
pub use endpoints::{Connector, EndpointMap};

/// Crate version, reported by clients as part of their build metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
