//! Application state for Axum handlers.

use mercato_repository::DatabasePoolInterface;
use mercato_service::{CacheStore, RecommendationService, SyncService};
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub recommendation_service: Arc<dyn RecommendationService>,
    pub sync_service: Arc<dyn SyncService>,
    pub database: Arc<dyn DatabasePoolInterface>,
    pub cache: Arc<dyn CacheStore>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        recommendation_service: Arc<dyn RecommendationService>,
        sync_service: Arc<dyn SyncService>,
        database: Arc<dyn DatabasePoolInterface>,
        cache: Arc<dyn CacheStore>,
    ) -> Self {
        Self {
            recommendation_service,
            sync_service,
            database,
            cache,
        }
    }

    /// Creates application state by resolving services from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module
            + HasComponent<dyn RecommendationService>
            + HasComponent<dyn SyncService>
            + HasComponent<dyn DatabasePoolInterface>
            + HasComponent<dyn CacheStore>,
    {
        Self {
            recommendation_service: module.resolve(),
            sync_service: module.resolve(),
            database: module.resolve(),
            cache: module.resolve(),
        }
    }
}
