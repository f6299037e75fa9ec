//! Recommendation serving and cache administration controller.

use crate::{
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Router,
};
use mercato_core::UserId;
use mercato_service::{InteractionListResponse, RecommendationResponse};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Creates the recommendation router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/recommend/:user_id", get(get_recommendations))
        .route("/user/:user_id/interactions", get(user_interactions))
        .route("/cache/clear/:user_id", post(clear_cache))
}

/// Query parameters for the serving endpoint.
#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    /// Raw context JSON; participates in the cache key.
    pub context: Option<String>,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_use_cache")]
    pub use_cache: bool,
}

fn default_max_results() -> usize {
    10
}

fn default_use_cache() -> bool {
    true
}

/// Serve ranked recommendations for a user.
async fn get_recommendations(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Query(query): Query<RecommendationQuery>,
) -> ApiResult<RecommendationResponse> {
    debug!("Recommendation request for user {}", user_id);

    let response = state
        .recommendation_service
        .get_recommendations(
            UserId::new(user_id),
            query.context.as_deref(),
            query.max_results,
            query.use_cache,
        )
        .await?;
    ok(response)
}

/// Response for a cache clear request.
#[derive(Debug, Serialize)]
pub struct CacheClearResponse {
    pub user_id: UserId,
    pub cleared: u64,
}

/// Drop every cached recommendation list for a user.
async fn clear_cache(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<CacheClearResponse> {
    debug!("Cache clear request for user {}", user_id);

    let user_id = UserId::new(user_id);
    let cleared = state.recommendation_service.invalidate_user(user_id).await?;
    ok(CacheClearResponse { user_id, cleared })
}

/// List a user's recent interactions, newest first.
async fn user_interactions(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<InteractionListResponse> {
    debug!("Interaction list request for user {}", user_id);

    let response = state
        .recommendation_service
        .user_interactions(UserId::new(user_id))
        .await?;
    ok(response)
}
