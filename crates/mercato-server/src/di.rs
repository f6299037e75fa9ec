//! Dependency injection module using Shaku.

use mercato_config::{AppConfig, RedisConfig};
use mercato_core::{MercatoError, MercatoResult};
use mercato_repository::{
    DatabasePool, DatabasePoolParameters, PgCandidateSource, PgCatalogRepository,
};
use mercato_service::{
    RecommendationServiceImpl, RecommendationServiceImplParameters, RedisCacheStore,
    RedisCacheStoreParameters, ScoringEngine, SyncServiceImpl,
};
use shaku::module;
use std::sync::Arc;
use tracing::info;

// Single-process module: database pool, PostgreSQL repositories, Redis
// cache and the two business services.
module! {
    pub AppModule {
        components = [
            DatabasePool,
            PgCandidateSource,
            PgCatalogRepository,
            RedisCacheStore,
            RecommendationServiceImpl,
            SyncServiceImpl,
        ],
        providers = [],
    }
}

/// Builds the application module from configuration.
///
/// Connects the database pool eagerly; the Redis pool is created lazily by
/// deadpool so a down cache does not block startup.
pub async fn build_module(config: &AppConfig) -> MercatoResult<Arc<AppModule>> {
    let db_pool = DatabasePool::connect(&config.database).await?;
    let cache_pool = create_cache_pool(&config.redis)?;

    let module = AppModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.inner().clone(),
        })
        .with_component_parameters::<RedisCacheStore>(RedisCacheStoreParameters {
            pool: cache_pool,
        })
        .with_component_parameters::<RecommendationServiceImpl>(
            RecommendationServiceImplParameters {
                config: config.recommendation.clone(),
                scoring: ScoringEngine::new(),
            },
        )
        .build();

    info!("Dependency injection module built");
    Ok(Arc::new(module))
}

fn create_cache_pool(config: &RedisConfig) -> MercatoResult<Option<Arc<deadpool_redis::Pool>>> {
    if !config.enabled {
        info!("Redis caching disabled by configuration");
        return Ok(None);
    }

    let redis_cfg = deadpool_redis::Config::from_url(&config.url);
    let pool = redis_cfg
        .builder()
        .map_err(|e| MercatoError::Cache(format!("Failed to configure Redis pool: {}", e)))?
        .max_size(config.pool_size as usize)
        .runtime(deadpool_redis::Runtime::Tokio1)
        .build()
        .map_err(|e| MercatoError::Cache(format!("Failed to create Redis pool: {}", e)))?;

    Ok(Some(Arc::new(pool)))
}
