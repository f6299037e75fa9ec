//! # Mercato Server Library
//!
//! Dependency injection configuration and startup utilities for the
//! Mercato recommendation server.

pub mod di;
