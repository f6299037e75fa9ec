//! User profile entity.

use crate::{GeoPoint, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user as read by the recommendation core.
///
/// Immutable snapshot owned by the external store; the core holds a read-only
/// copy for the duration of one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique identifier, assigned upstream.
    pub id: UserId,

    /// Unique username, synced from the upstream catalog.
    pub username: String,

    /// Email address, synced from the upstream catalog.
    pub email: String,

    /// Category/tag strings the user has expressed interest in.
    /// Case-sensitive; deduplicated at construction.
    pub interests: Vec<String>,

    /// Last known location, if any.
    pub location: Option<GeoPoint>,

    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Creates a new user profile, deduplicating interests while preserving
    /// their first-seen order.
    #[must_use]
    pub fn new(
        id: UserId,
        username: String,
        email: String,
        interests: Vec<String>,
        location: Option<GeoPoint>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            interests: dedup_preserving_order(interests),
            location,
            created_at: Utc::now(),
        }
    }
}

fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interests_deduplicated_preserving_order() {
        let user = UserProfile::new(
            UserId::new(1),
            "ada".to_string(),
            "ada@example.com".to_string(),
            vec![
                "coffee".to_string(),
                "tech".to_string(),
                "coffee".to_string(),
            ],
            None,
        );
        assert_eq!(user.interests, vec!["coffee", "tech"]);
    }

    #[test]
    fn test_interests_are_case_sensitive() {
        let user = UserProfile::new(
            UserId::new(1),
            "ada".to_string(),
            "ada@example.com".to_string(),
            vec!["Coffee".to_string(), "coffee".to_string()],
            None,
        );
        assert_eq!(user.interests.len(), 2);
    }
}
