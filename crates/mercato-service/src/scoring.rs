//! Deterministic content-based scoring and ranking.

use crate::dto::RecommendationItem;
use mercato_core::{BusinessProfile, RequestContext, UserProfile};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Candidates considered per ranking pass, taken from the head of the
/// popularity-ordered candidate sequence. A fixed window, not a re-sort:
/// work per request stays bounded regardless of catalog size.
pub const SCORING_WINDOW: usize = 50;

/// Width at which cached lists are computed, so narrower requests degrade
/// to a local slice instead of re-running the scorer.
pub const CACHE_WIDTH: usize = 50;

const CATEGORY_WEIGHT: f64 = 0.6;
const TAG_WEIGHT: f64 = 0.4;
const POPULARITY_WEIGHT: f64 = 0.1;
const LOCATION_BONUS: f64 = 0.2;

/// Deterministic, explainable content-based scorer.
///
/// No randomness anywhere: for a fixed (user, candidate set, context) the
/// ranked output is byte-identical across calls. Ties preserve candidate
/// order (popularity descending, as fetched).
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    /// Creates a new scoring engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Computes the unrounded relevance score of one candidate.
    ///
    /// `categoryMatch * 0.6 + tagMatch * 0.4 + popularity * 0.1`, plus a
    /// flat bonus when both the context and the business carry a location.
    /// The location term is a presence check, not a distance computation.
    #[must_use]
    pub fn score(
        &self,
        user: &UserProfile,
        business: &BusinessProfile,
        context: &RequestContext,
    ) -> f64 {
        let interests: HashSet<&str> = user.interests.iter().map(String::as_str).collect();
        let categories: HashSet<&str> = business.categories.iter().map(String::as_str).collect();
        let tags: HashSet<&str> = business.tags.iter().map(String::as_str).collect();

        let category_match = interests.intersection(&categories).count() as f64;
        let tag_match = interests.intersection(&tags).count() as f64;

        let content_score = category_match * CATEGORY_WEIGHT + tag_match * TAG_WEIGHT;
        let popularity_component = business.popularity_score * POPULARITY_WEIGHT;

        let location_bonus = if context.has_location() && business.location.is_some() {
            LOCATION_BONUS
        } else {
            0.0
        };

        content_score + popularity_component + location_bonus
    }

    /// Ranks candidates and emits up to `max_results` recommendation items.
    ///
    /// Only the first [`SCORING_WINDOW`] candidates are scored. Candidates
    /// with a total of zero or less are excluded. The sort is stable and
    /// descends on the unrounded total; scores are rounded to 3 decimal
    /// places once, at emission.
    #[must_use]
    pub fn rank(
        &self,
        user: &UserProfile,
        candidates: &[BusinessProfile],
        context: &RequestContext,
        max_results: usize,
    ) -> Vec<RecommendationItem> {
        let mut scored: Vec<(&BusinessProfile, f64)> = candidates
            .iter()
            .take(SCORING_WINDOW)
            .map(|business| (business, self.score(user, business, context)))
            .filter(|(_, total)| *total > 0.0)
            .collect();

        scored.sort_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap_or(Ordering::Equal));
        scored.truncate(max_results);

        scored
            .into_iter()
            .map(|(business, total)| RecommendationItem {
                business_id: business.id,
                name: business.name.clone(),
                categories: business.categories.clone(),
                score: round3(total),
                kind: RecommendationItem::CONTENT_BASED.to_string(),
                location: business.location,
            })
            .collect()
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
