//! Business profile entity.

use crate::{BusinessId, GeoPoint};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A business as read by the recommendation core.
///
/// Read-only snapshot per request. Absent `categories`/`tags`/`location`
/// columns decode to empty sequences / `None`; scoring treats them as empty
/// sets rather than raising.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessProfile {
    /// Unique identifier, assigned upstream.
    pub id: BusinessId,

    /// Display name.
    pub name: String,

    /// Free-text description, if any.
    pub description: Option<String>,

    /// Ordered category strings, e.g. `["restaurant", "italian"]`.
    #[serde(default)]
    pub categories: Vec<String>,

    /// Ordered tag strings, e.g. `["romantic", "vegan"]`.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Business location, if known.
    pub location: Option<GeoPoint>,

    /// Non-negative popularity score maintained by the upstream catalog.
    pub popularity_score: f64,

    /// Average rating.
    pub rating: f64,

    /// Number of ratings behind `rating`.
    pub rating_count: i32,

    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
}
