//! Sync request DTOs for the write-path collaborators.

use mercato_core::{
    BusinessId, BusinessProfile, GeoPoint, MercatoError, MercatoResult, UserId, UserProfile,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create or update a user record.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UserSyncRequest {
    /// Upstream user id.
    pub id: i64,
    #[validate(length(min = 1, max = 64))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
}

impl UserSyncRequest {
    /// Converts the request into a domain profile.
    #[must_use]
    pub fn into_profile(self) -> UserProfile {
        UserProfile::new(
            UserId::new(self.id),
            self.username,
            self.email,
            self.interests,
            self.location,
        )
    }
}

/// Request to create or update a business record.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BusinessSyncRequest {
    /// Upstream business id.
    pub id: i64,
    #[validate(length(min = 1, max = 256))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub location: Option<GeoPoint>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub popularity_score: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub rating_count: i32,
}

impl BusinessSyncRequest {
    /// Converts the request into a domain profile.
    #[must_use]
    pub fn into_profile(self) -> BusinessProfile {
        BusinessProfile {
            id: BusinessId::new(self.id),
            name: self.name,
            description: self.description,
            categories: self.categories,
            tags: self.tags,
            location: self.location,
            popularity_score: self.popularity_score,
            rating: self.rating,
            rating_count: self.rating_count,
            created_at: Utc::now(),
        }
    }
}

/// Request to record a user interaction.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct InteractionRequest {
    pub user_id: i64,
    pub business_id: i64,
    /// One of view, like, save, purchase, share. Validated at service level
    /// so the error names the allowed set.
    pub interaction_type: String,
    #[serde(default = "default_weight")]
    #[validate(range(exclusive_min = 0.0))]
    pub weight: f64,
}

impl InteractionRequest {
    /// Parses the interaction type, mapping failures to validation errors.
    pub fn parsed_type(&self) -> MercatoResult<mercato_core::InteractionType> {
        self.interaction_type
            .parse()
            .map_err(MercatoError::Validation)
    }
}

fn default_weight() -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use mercato_core::{InteractionType, ValidateExt};

    #[test]
    fn test_user_sync_into_profile_dedups_interests() {
        let request: UserSyncRequest = serde_json::from_str(
            r#"{"id": 1, "username": "ada", "email": "ada@example.com",
                "interests": ["coffee", "coffee", "tech"]}"#,
        )
        .unwrap();
        let profile = request.into_profile();
        assert_eq!(profile.id, UserId::new(1));
        assert_eq!(profile.interests, vec!["coffee", "tech"]);
    }

    #[test]
    fn test_business_sync_defaults() {
        let request: BusinessSyncRequest =
            serde_json::from_str(r#"{"id": 3, "name": "Blue Bottle"}"#).unwrap();
        assert!(request.categories.is_empty());
        assert_eq!(request.popularity_score, 0.0);
        assert!(request.validate_request().is_ok());
    }

    #[test]
    fn test_negative_popularity_rejected() {
        let request: BusinessSyncRequest =
            serde_json::from_str(r#"{"id": 3, "name": "x", "popularity_score": -1.0}"#).unwrap();
        assert!(request.validate_request().is_err());
    }

    #[test]
    fn test_interaction_type_parsing() {
        let request: InteractionRequest = serde_json::from_str(
            r#"{"user_id": 1, "business_id": 3, "interaction_type": "like"}"#,
        )
        .unwrap();
        assert_eq!(request.weight, 1.0);
        assert_eq!(request.parsed_type().unwrap(), InteractionType::Like);

        let request: InteractionRequest = serde_json::from_str(
            r#"{"user_id": 1, "business_id": 3, "interaction_type": "bookmark"}"#,
        )
        .unwrap();
        let err = request.parsed_type().unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_interaction_weight_must_be_positive() {
        let request: InteractionRequest = serde_json::from_str(
            r#"{"user_id": 1, "business_id": 3, "interaction_type": "like", "weight": 0.0}"#,
        )
        .unwrap();
        assert!(request.validate_request().is_err());

        let request: InteractionRequest = serde_json::from_str(
            r#"{"user_id": 1, "business_id": 3, "interaction_type": "like", "weight": 0.5}"#,
        )
        .unwrap();
        assert!(request.validate_request().is_ok());
    }
}
