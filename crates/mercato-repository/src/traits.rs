//! Repository trait definitions.

use async_trait::async_trait;
use mercato_core::{
    BusinessId, BusinessProfile, Interaction, InteractionType, Interface, MercatoResult, UserId,
    UserProfile,
};

/// Read-only access to the external store for the serving path.
///
/// All three queries are side-effect-free; the serving path never writes
/// through this interface.
#[async_trait]
pub trait CandidateSource: Interface + Send + Sync {
    /// Fetches a user record by id.
    async fn fetch_user(&self, id: UserId) -> MercatoResult<Option<UserProfile>>;

    /// Fetches the most recent interactions for a user, newest first.
    async fn fetch_recent_interactions(
        &self,
        id: UserId,
        limit: i64,
    ) -> MercatoResult<Vec<Interaction>>;

    /// Fetches a bounded candidate set of businesses, ordered by
    /// popularity score descending.
    async fn fetch_candidate_businesses(&self, limit: i64) -> MercatoResult<Vec<BusinessProfile>>;
}

/// Write access for the sync collaborators (upstream catalog pushes).
#[async_trait]
pub trait CatalogRepository: Interface + Send + Sync {
    /// Creates or updates a user record.
    async fn upsert_user(&self, user: &UserProfile) -> MercatoResult<()>;

    /// Creates or updates a business record.
    async fn upsert_business(&self, business: &BusinessProfile) -> MercatoResult<()>;

    /// Records an interaction, replacing the weight and timestamp when the
    /// same (user, business, type) triple already exists.
    async fn record_interaction(
        &self,
        user_id: UserId,
        business_id: BusinessId,
        interaction_type: InteractionType,
        weight: f64,
    ) -> MercatoResult<()>;

    /// Deletes a user and their interactions. Returns `false` if the user
    /// did not exist.
    async fn delete_user(&self, id: UserId) -> MercatoResult<bool>;

    /// Deletes a business and its interactions. Returns `false` if the
    /// business did not exist.
    async fn delete_business(&self, id: BusinessId) -> MercatoResult<bool>;
}
