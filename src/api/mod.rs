//! HTTP presentation shell.
//!
//! Serves the self-contained estimator page and the small JSON API the
//! page calls. Holds no domain logic beyond request/response mapping;
//! `app_router()` returns a composable `Router` that can be mounted on
//! any axum server instance.

pub mod endpoints;
pub mod error;
pub mod page;
pub mod router;
pub mod server;

pub use router::app_router;
pub use server::serve;
