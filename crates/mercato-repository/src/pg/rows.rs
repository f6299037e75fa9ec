//! Database row representations and JSONB decoding helpers.

use chrono::{DateTime, Utc};
use mercato_core::{
    BusinessId, BusinessProfile, GeoPoint, Interaction, InteractionType, UserId, UserProfile,
};
use serde_json::Value;
use sqlx::FromRow;

/// Database row representation of a user.
#[derive(Debug, FromRow)]
pub(super) struct UserRow {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub interests: Option<Value>,
    pub location: Option<Value>,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for UserProfile {
    fn from(row: UserRow) -> Self {
        let mut user = UserProfile::new(
            UserId::new(row.id),
            row.username,
            row.email,
            decode_string_list(row.interests),
            decode_geo_point(row.location),
        );
        user.created_at = row.created_at;
        user
    }
}

/// Database row representation of a business.
#[derive(Debug, FromRow)]
pub(super) struct BusinessRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub categories: Option<Value>,
    pub tags: Option<Value>,
    pub location: Option<Value>,
    pub popularity_score: f64,
    pub rating: f64,
    pub rating_count: i32,
    pub created_at: DateTime<Utc>,
}

impl From<BusinessRow> for BusinessProfile {
    fn from(row: BusinessRow) -> Self {
        BusinessProfile {
            id: BusinessId::new(row.id),
            name: row.name,
            description: row.description,
            categories: decode_string_list(row.categories),
            tags: decode_string_list(row.tags),
            location: decode_geo_point(row.location),
            popularity_score: row.popularity_score,
            rating: row.rating,
            rating_count: row.rating_count,
            created_at: row.created_at,
        }
    }
}

/// Database row representation of an interaction.
#[derive(Debug, FromRow)]
pub(super) struct InteractionRow {
    pub user_id: i64,
    pub business_id: i64,
    pub interaction_type: String,
    pub weight: f64,
    pub timestamp: DateTime<Utc>,
}

impl From<InteractionRow> for Interaction {
    fn from(row: InteractionRow) -> Self {
        Interaction {
            user_id: UserId::new(row.user_id),
            business_id: BusinessId::new(row.business_id),
            interaction_type: parse_interaction_type(&row.interaction_type),
            weight: row.weight,
            timestamp: row.timestamp,
        }
    }
}

/// Decodes a JSONB column holding an array of strings.
///
/// Null columns and malformed payloads decode to an empty list; non-string
/// array elements are skipped.
pub(super) fn decode_string_list(value: Option<Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Decodes a JSONB column holding a `{"lat": .., "lon": ..}` object.
pub(super) fn decode_geo_point(value: Option<Value>) -> Option<GeoPoint> {
    serde_json::from_value(value?).ok()
}

fn parse_interaction_type(s: &str) -> InteractionType {
    s.parse().unwrap_or(InteractionType::View)
}
