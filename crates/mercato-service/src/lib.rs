//! # Mercato Service
//!
//! Business logic for the recommendation engine: cache-aside serving,
//! deterministic content-based scoring, and the write-path sync service
//! that keeps the catalog mirror fresh and invalidates stale cache entries.

pub mod cache;
pub mod dto;
mod r#impl;
mod recommendation_service;
mod scoring;
mod sync_service;

pub use cache::{
    cache_keys, CacheExt, CacheStore, InMemoryCacheStore, RedisCacheStore,
    RedisCacheStoreParameters, DEFAULT_TTL, FEATURE_TTL,
};
pub use dto::*;
pub use r#impl::{
    RecommendationServiceImpl, RecommendationServiceImplParameters, SyncServiceImpl,
};
pub use recommendation_service::RecommendationService;
pub use scoring::{ScoringEngine, CACHE_WIDTH, SCORING_WINDOW};
pub use sync_service::SyncService;
