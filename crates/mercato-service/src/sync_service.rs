//! Sync service trait definition.

use crate::dto::{BusinessSyncRequest, InteractionRequest, UserSyncRequest};
use async_trait::async_trait;
use mercato_core::{BusinessId, Interface, MercatoResult, UserId};

/// Write path for upstream catalog pushes.
///
/// Each mutation decides whether the affected user's cached recommendation
/// lists must be invalidated; business-wide changes are left to expire via
/// TTL rather than fanned out to every user.
#[async_trait]
pub trait SyncService: Interface + Send + Sync {
    /// Creates or updates a user and invalidates their cached lists.
    async fn upsert_user(&self, request: UserSyncRequest) -> MercatoResult<()>;

    /// Creates or updates a business. Cached lists are not invalidated; the
    /// TTL bounds how long stale business data can be served.
    async fn upsert_business(&self, request: BusinessSyncRequest) -> MercatoResult<()>;

    /// Records an interaction and invalidates the acting user's cached lists.
    async fn record_interaction(&self, request: InteractionRequest) -> MercatoResult<()>;

    /// Deletes a user and their interactions, then invalidates their cached
    /// lists. Returns `false` if the user did not exist.
    async fn delete_user(&self, id: UserId) -> MercatoResult<bool>;

    /// Deletes a business and its interactions. Returns `false` if the
    /// business did not exist.
    async fn delete_business(&self, id: BusinessId) -> MercatoResult<bool>;
}
