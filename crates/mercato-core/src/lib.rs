//! # Mercato Core
//!
//! Core types, traits, and error definitions for the Mercato recommendation
//! engine. This crate provides the foundational abstractions shared by the
//! repository, service, and transport layers.

pub mod context;
pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod validation;

pub use context::*;
pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
