//! Recommendation service trait definition.

use crate::dto::{InteractionListResponse, RecommendationResponse};
use async_trait::async_trait;
use mercato_core::{Interface, MercatoResult, UserId};

/// Cache-aside recommendation serving.
#[async_trait]
pub trait RecommendationService: Interface + Send + Sync {
    /// Serves ranked recommendations for a user.
    ///
    /// `raw_context` is the caller's context JSON, if any; it participates in
    /// the cache key, so distinct contexts never share entries. `max_results`
    /// must be between 1 and 50. When `use_cache` is false both the lookup
    /// and the write-back are skipped, but invalidation state is untouched.
    async fn get_recommendations(
        &self,
        user_id: UserId,
        raw_context: Option<&str>,
        max_results: usize,
        use_cache: bool,
    ) -> MercatoResult<RecommendationResponse>;

    /// Drops every cached recommendation list for a user. Returns the number
    /// of entries removed.
    async fn invalidate_user(&self, user_id: UserId) -> MercatoResult<u64>;

    /// Lists a user's recent interactions, newest first. Debug surface.
    async fn user_interactions(&self, user_id: UserId) -> MercatoResult<InteractionListResponse>;
}
