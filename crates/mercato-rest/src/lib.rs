//! # Mercato REST
//!
//! REST API layer using Axum for the Mercato recommendation engine.
//! Exposes the serving endpoint, the sync write path, cache administration,
//! and health checks.

pub mod controllers;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
