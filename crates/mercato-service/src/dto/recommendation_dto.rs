//! Recommendation response DTOs.
//!
//! [`RecommendationItem`] is both the unit returned to callers and the unit
//! cached; its JSON encoding must round-trip losslessly through the cache
//! store's opaque string interface.

use chrono::{DateTime, Utc};
use mercato_core::{BusinessId, GeoPoint, Interaction, UserId};
use serde::{Deserialize, Serialize};

/// A single ranked recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationItem {
    /// The recommended business.
    pub business_id: BusinessId,
    /// Business display name.
    pub name: String,
    /// Business categories, as stored.
    pub categories: Vec<String>,
    /// Relevance score, rounded to 3 decimal places at emission.
    pub score: f64,
    /// Scoring strategy tag; always `content_based` today.
    #[serde(rename = "type")]
    pub kind: String,
    /// Business location, if known.
    pub location: Option<GeoPoint>,
}

impl RecommendationItem {
    /// Strategy tag for the content-based scorer.
    pub const CONTENT_BASED: &'static str = "content_based";
}

/// Where a response was served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationSource {
    /// Served from the cache-aside layer.
    Cache,
    /// Computed from the source-of-truth store.
    Database,
}

/// The full response for a recommendation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    /// Where the list was served from.
    pub source: RecommendationSource,
    /// The requesting user.
    pub user_id: UserId,
    /// Ranked recommendations, truncated to the caller's `max_results`.
    pub recommendations: Vec<RecommendationItem>,
    /// Convenience count of `recommendations`.
    pub count: usize,
}

impl RecommendationResponse {
    /// Builds a response, deriving `count` from the item list.
    #[must_use]
    pub fn new(
        source: RecommendationSource,
        user_id: UserId,
        recommendations: Vec<RecommendationItem>,
    ) -> Self {
        let count = recommendations.len();
        Self {
            source,
            user_id,
            recommendations,
            count,
        }
    }
}

/// One interaction as exposed by the debug endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionView {
    pub business_id: BusinessId,
    #[serde(rename = "type")]
    pub interaction_type: String,
    pub timestamp: DateTime<Utc>,
    pub weight: f64,
}

impl From<Interaction> for InteractionView {
    fn from(interaction: Interaction) -> Self {
        Self {
            business_id: interaction.business_id,
            interaction_type: interaction.interaction_type.to_string(),
            timestamp: interaction.timestamp,
            weight: interaction.weight,
        }
    }
}

/// Response for the interaction debug endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionListResponse {
    pub user_id: UserId,
    pub interactions_count: usize,
    pub interactions: Vec<InteractionView>,
}

impl InteractionListResponse {
    /// Builds a response from a recency-ordered interaction list.
    #[must_use]
    pub fn new(user_id: UserId, interactions: Vec<Interaction>) -> Self {
        let interactions: Vec<InteractionView> =
            interactions.into_iter().map(InteractionView::from).collect();
        Self {
            user_id,
            interactions_count: interactions.len(),
            interactions,
        }
    }
}
