//! REST API controllers.

pub mod health_controller;
pub mod recommendation_controller;
pub mod sync_controller;
