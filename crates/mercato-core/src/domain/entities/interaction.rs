//! User interaction entity.

use crate::{BusinessId, InteractionType, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded behavioral signal between a user and a business.
///
/// Consumed by the core only as a recency-ordered sequence; the current
/// scoring formula fetches but does not weigh interactions. Kept in the data
/// model as the extension point for interaction-aware scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    /// The user who interacted.
    pub user_id: UserId,

    /// The business interacted with.
    pub business_id: BusinessId,

    /// The kind of interaction.
    pub interaction_type: InteractionType,

    /// Positive weight of this interaction.
    pub weight: f64,

    /// When the interaction occurred.
    pub timestamp: DateTime<Utc>,
}
