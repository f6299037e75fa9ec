//! Cache-aside recommendation service implementation.

use crate::cache::{cache_keys, CacheExt, CacheStore};
use crate::dto::{
    InteractionListResponse, RecommendationItem, RecommendationResponse, RecommendationSource,
};
use crate::recommendation_service::RecommendationService;
use crate::scoring::{ScoringEngine, CACHE_WIDTH};
use async_trait::async_trait;
use mercato_config::RecommendationConfig;
use mercato_core::{MercatoError, MercatoResult, RequestContext, UserId, UserProfile};
use mercato_repository::CandidateSource;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Largest result width a caller may request; also the width cached lists
/// are computed at, so any narrower request can be served by slicing.
const MAX_RESULTS_LIMIT: usize = CACHE_WIDTH;

/// Recommendation service backed by a candidate source and a cache store.
///
/// The cache is strictly an optimization: every cache failure is logged and
/// treated as a miss (reads) or skipped (writes), and the request proceeds
/// against the source of truth. Source failures surface to the caller.
#[derive(Component)]
#[shaku(interface = RecommendationService)]
pub struct RecommendationServiceImpl {
    #[shaku(inject)]
    source: Arc<dyn CandidateSource>,
    #[shaku(inject)]
    cache: Arc<dyn CacheStore>,
    #[shaku(default)]
    config: RecommendationConfig,
    #[shaku(default)]
    scoring: ScoringEngine,
}

impl RecommendationServiceImpl {
    /// Creates a service outside the DI container.
    pub fn new(
        source: Arc<dyn CandidateSource>,
        cache: Arc<dyn CacheStore>,
        config: RecommendationConfig,
    ) -> Self {
        Self {
            source,
            cache,
            config,
            scoring: ScoringEngine::new(),
        }
    }

    /// Looks up a cached recommendation list, treating any failure as a miss.
    async fn cached_list(&self, key: &str) -> Option<Vec<RecommendationItem>> {
        if !self.cache.is_enabled() {
            return None;
        }
        match self.cache.get::<Vec<RecommendationItem>>(key).await {
            Ok(hit) => hit,
            Err(err) => {
                warn!("Cache read failed for {}: {}", key, err);
                None
            }
        }
    }

    /// Writes a recommendation list back to the cache, logging failures.
    async fn store_list(&self, key: &str, items: &[RecommendationItem]) {
        if !self.cache.is_enabled() {
            return;
        }
        if let Err(err) = self.cache.set(key, &items, self.config.cache_ttl()).await {
            warn!("Cache write failed for {}: {}", key, err);
        }
    }

    /// Loads the user's profile, preferring the feature cache.
    ///
    /// On a feature-cache miss the profile comes from the source of truth
    /// and is written back under the `user:features:` namespace with its own
    /// longer TTL. Profile writes clear this entry alongside the cached
    /// lists, so a hit is never staler than the last invalidation.
    async fn load_user(&self, user_id: UserId) -> MercatoResult<UserProfile> {
        let features_key = cache_keys::user_features_key(user_id);

        if self.cache.is_enabled() {
            match self.cache.get::<UserProfile>(&features_key).await {
                Ok(Some(profile)) => {
                    debug!("Feature cache hit for user {}", user_id);
                    return Ok(profile);
                }
                Ok(None) => {}
                Err(err) => warn!("Feature cache read failed for {}: {}", features_key, err),
            }
        }

        let profile = self
            .source
            .fetch_user(user_id)
            .await?
            .ok_or_else(|| MercatoError::not_found("User", user_id))?;

        if self.cache.is_enabled() {
            if let Err(err) = self
                .cache
                .set(&features_key, &profile, self.config.feature_cache_ttl())
                .await
            {
                warn!("Feature cache write failed for {}: {}", features_key, err);
            }
        }

        Ok(profile)
    }
}

#[async_trait]
impl RecommendationService for RecommendationServiceImpl {
    async fn get_recommendations(
        &self,
        user_id: UserId,
        raw_context: Option<&str>,
        max_results: usize,
        use_cache: bool,
    ) -> MercatoResult<RecommendationResponse> {
        debug!(
            "Recommendations for user {} (max {}, cache {})",
            user_id, max_results, use_cache
        );

        if max_results < 1 || max_results > MAX_RESULTS_LIMIT {
            return Err(MercatoError::Validation(format!(
                "max_results must be between 1 and {}",
                MAX_RESULTS_LIMIT
            )));
        }

        let context = RequestContext::parse_or_default(raw_context)?;
        let cache_key = cache_keys::recommendation_key(user_id, &context);

        if use_cache {
            if let Some(mut items) = self.cached_list(&cache_key).await {
                debug!("Cache hit for {}", cache_key);
                items.truncate(max_results);
                return Ok(RecommendationResponse::new(
                    RecommendationSource::Cache,
                    user_id,
                    items,
                ));
            }
        }

        let user = self.load_user(user_id).await?;

        // Recent interactions ride along with every source-served request;
        // they feed future scoring strategies and keep the fetch pattern
        // stable.
        let _ = self
            .source
            .fetch_recent_interactions(user_id, self.config.interaction_limit)
            .await?;

        let candidates = self
            .source
            .fetch_candidate_businesses(self.config.candidate_limit)
            .await?;

        // Always rank at full cache width so the cached list can serve any
        // narrower request later.
        let mut items = self.scoring.rank(&user, &candidates, &context, CACHE_WIDTH);

        if use_cache && !items.is_empty() {
            self.store_list(&cache_key, &items).await;
        }

        items.truncate(max_results);
        info!(
            "Computed {} recommendations for user {}",
            items.len(),
            user_id
        );
        Ok(RecommendationResponse::new(
            RecommendationSource::Database,
            user_id,
            items,
        ))
    }

    async fn invalidate_user(&self, user_id: UserId) -> MercatoResult<u64> {
        if !self.cache.is_enabled() {
            return Ok(0);
        }
        let prefix = cache_keys::user_prefix(user_id);
        let features_key = cache_keys::user_features_key(user_id);

        let mut removed = 0u64;
        match self.cache.delete_prefix(&prefix).await {
            Ok(count) => removed += count,
            Err(err) => warn!("Cache invalidation failed for {}: {}", prefix, err),
        }
        // The cached profile lives outside the list prefix and must go too,
        // or the next recompute would rank against stale interests.
        match self.cache.delete(&features_key).await {
            Ok(true) => removed += 1,
            Ok(false) => {}
            Err(err) => warn!("Cache invalidation failed for {}: {}", features_key, err),
        }

        info!("Invalidated {} cache entries for user {}", removed, user_id);
        Ok(removed)
    }

    async fn user_interactions(&self, user_id: UserId) -> MercatoResult<InteractionListResponse> {
        self.source
            .fetch_user(user_id)
            .await?
            .ok_or_else(|| MercatoError::not_found("User", user_id))?;

        let interactions = self
            .source
            .fetch_recent_interactions(user_id, self.config.interaction_limit)
            .await?;
        Ok(InteractionListResponse::new(user_id, interactions))
    }
}

impl std::fmt::Debug for RecommendationServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecommendationServiceImpl")
            .finish_non_exhaustive()
    }
}
