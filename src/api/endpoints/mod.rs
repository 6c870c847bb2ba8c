//! API endpoint handlers.
//!
//! Each module corresponds to one route. Handlers are stateless; every
//! request recomputes from scratch.

pub mod health;
pub mod reference;
pub mod risk;
