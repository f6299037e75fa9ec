//! Sync service implementation for upstream catalog pushes.

use crate::dto::{BusinessSyncRequest, InteractionRequest, UserSyncRequest};
use crate::recommendation_service::RecommendationService;
use crate::sync_service::SyncService;
use async_trait::async_trait;
use mercato_core::{BusinessId, MercatoResult, UserId, ValidateExt};
use mercato_repository::CatalogRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// Sync service over the catalog repository.
///
/// User-scoped mutations invalidate that user's cached recommendation lists
/// through the recommendation service. Business mutations do not fan out;
/// the list TTL bounds staleness there.
#[derive(Component)]
#[shaku(interface = SyncService)]
pub struct SyncServiceImpl {
    #[shaku(inject)]
    catalog: Arc<dyn CatalogRepository>,
    #[shaku(inject)]
    recommendations: Arc<dyn RecommendationService>,
}

impl SyncServiceImpl {
    /// Creates a service outside the DI container.
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        recommendations: Arc<dyn RecommendationService>,
    ) -> Self {
        Self {
            catalog,
            recommendations,
        }
    }
}

#[async_trait]
impl SyncService for SyncServiceImpl {
    async fn upsert_user(&self, request: UserSyncRequest) -> MercatoResult<()> {
        debug!("Syncing user: {}", request.id);
        request.validate_request()?;

        let profile = request.into_profile();
        let user_id = profile.id;
        self.catalog.upsert_user(&profile).await?;
        self.recommendations.invalidate_user(user_id).await?;

        info!("User synced: {}", user_id);
        Ok(())
    }

    async fn upsert_business(&self, request: BusinessSyncRequest) -> MercatoResult<()> {
        debug!("Syncing business: {}", request.id);
        request.validate_request()?;

        let profile = request.into_profile();
        self.catalog.upsert_business(&profile).await?;

        info!("Business synced: {}", profile.id);
        Ok(())
    }

    async fn record_interaction(&self, request: InteractionRequest) -> MercatoResult<()> {
        debug!(
            "Recording interaction: user {} -> business {}",
            request.user_id, request.business_id
        );
        request.validate_request()?;
        let interaction_type = request.parsed_type()?;

        let user_id = UserId::new(request.user_id);
        self.catalog
            .record_interaction(
                user_id,
                BusinessId::new(request.business_id),
                interaction_type,
                request.weight,
            )
            .await?;
        self.recommendations.invalidate_user(user_id).await?;

        info!("Interaction recorded for user {}", user_id);
        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> MercatoResult<bool> {
        debug!("Deleting user: {}", id);
        let deleted = self.catalog.delete_user(id).await?;
        if deleted {
            self.recommendations.invalidate_user(id).await?;
            info!("User deleted: {}", id);
        }
        Ok(deleted)
    }

    async fn delete_business(&self, id: BusinessId) -> MercatoResult<bool> {
        debug!("Deleting business: {}", id);
        let deleted = self.catalog.delete_business(id).await?;
        if deleted {
            info!("Business deleted: {}", id);
        }
        Ok(deleted)
    }
}

impl std::fmt::Debug for SyncServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncServiceImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{InteractionListResponse, RecommendationResponse, RecommendationSource};
    use mercato_core::{BusinessProfile, InteractionType, UserProfile};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Catalog repository over in-memory maps.
    struct StubCatalogRepository {
        users: Mutex<HashMap<UserId, UserProfile>>,
        businesses: Mutex<HashMap<BusinessId, BusinessProfile>>,
        interactions: Mutex<Vec<(UserId, BusinessId, InteractionType, f64)>>,
    }

    impl StubCatalogRepository {
        fn new() -> Self {
            Self {
                users: Mutex::new(HashMap::new()),
                businesses: Mutex::new(HashMap::new()),
                interactions: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl CatalogRepository for StubCatalogRepository {
        async fn upsert_user(&self, user: &UserProfile) -> MercatoResult<()> {
            self.users.lock().unwrap().insert(user.id, user.clone());
            Ok(())
        }

        async fn upsert_business(&self, business: &BusinessProfile) -> MercatoResult<()> {
            self.businesses
                .lock()
                .unwrap()
                .insert(business.id, business.clone());
            Ok(())
        }

        async fn record_interaction(
            &self,
            user_id: UserId,
            business_id: BusinessId,
            interaction_type: InteractionType,
            weight: f64,
        ) -> MercatoResult<()> {
            self.interactions
                .lock()
                .unwrap()
                .push((user_id, business_id, interaction_type, weight));
            Ok(())
        }

        async fn delete_user(&self, id: UserId) -> MercatoResult<bool> {
            Ok(self.users.lock().unwrap().remove(&id).is_some())
        }

        async fn delete_business(&self, id: BusinessId) -> MercatoResult<bool> {
            Ok(self.businesses.lock().unwrap().remove(&id).is_some())
        }
    }

    /// Recommendation service that only records invalidations.
    struct RecordingRecommendationService {
        invalidated: Mutex<Vec<UserId>>,
    }

    impl RecordingRecommendationService {
        fn new() -> Self {
            Self {
                invalidated: Mutex::new(Vec::new()),
            }
        }

        fn invalidated(&self) -> Vec<UserId> {
            self.invalidated.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RecommendationService for RecordingRecommendationService {
        async fn get_recommendations(
            &self,
            user_id: UserId,
            _raw_context: Option<&str>,
            _max_results: usize,
            _use_cache: bool,
        ) -> MercatoResult<RecommendationResponse> {
            Ok(RecommendationResponse::new(
                RecommendationSource::Database,
                user_id,
                Vec::new(),
            ))
        }

        async fn invalidate_user(&self, user_id: UserId) -> MercatoResult<u64> {
            self.invalidated.lock().unwrap().push(user_id);
            Ok(0)
        }

        async fn user_interactions(
            &self,
            user_id: UserId,
        ) -> MercatoResult<InteractionListResponse> {
            Ok(InteractionListResponse::new(user_id, Vec::new()))
        }
    }

    fn build_service() -> (
        Arc<StubCatalogRepository>,
        Arc<RecordingRecommendationService>,
        SyncServiceImpl,
    ) {
        let catalog = Arc::new(StubCatalogRepository::new());
        let recs = Arc::new(RecordingRecommendationService::new());
        let service = SyncServiceImpl::new(catalog.clone(), recs.clone());
        (catalog, recs, service)
    }

    fn user_request(id: i64) -> UserSyncRequest {
        serde_json::from_str(&format!(
            r#"{{"id": {id}, "username": "user{id}", "email": "user{id}@example.com",
                "interests": ["coffee"]}}"#
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn test_upsert_user_invalidates_cached_lists() {
        let (catalog, recs, service) = build_service();

        service.upsert_user(user_request(7)).await.unwrap();

        assert!(catalog.users.lock().unwrap().contains_key(&UserId::new(7)));
        assert_eq!(recs.invalidated(), vec![UserId::new(7)]);
    }

    #[tokio::test]
    async fn test_upsert_user_rejects_invalid_email() {
        let (catalog, recs, service) = build_service();
        let request: UserSyncRequest = serde_json::from_str(
            r#"{"id": 7, "username": "ada", "email": "not-an-email"}"#,
        )
        .unwrap();

        let err = service.upsert_user(request).await.unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(catalog.users.lock().unwrap().is_empty());
        assert!(recs.invalidated().is_empty());
    }

    #[tokio::test]
    async fn test_upsert_business_does_not_invalidate() {
        let (catalog, recs, service) = build_service();
        let request: BusinessSyncRequest =
            serde_json::from_str(r#"{"id": 3, "name": "Blue Bottle", "popularity_score": 5.0}"#)
                .unwrap();

        service.upsert_business(request).await.unwrap();

        assert!(catalog
            .businesses
            .lock()
            .unwrap()
            .contains_key(&BusinessId::new(3)));
        assert!(recs.invalidated().is_empty());
    }

    #[tokio::test]
    async fn test_record_interaction_invalidates_acting_user() {
        let (catalog, recs, service) = build_service();
        let request: InteractionRequest = serde_json::from_str(
            r#"{"user_id": 7, "business_id": 3, "interaction_type": "like", "weight": 2.0}"#,
        )
        .unwrap();

        service.record_interaction(request).await.unwrap();

        let recorded = catalog.interactions.lock().unwrap().clone();
        assert_eq!(
            recorded,
            vec![(
                UserId::new(7),
                BusinessId::new(3),
                InteractionType::Like,
                2.0
            )]
        );
        assert_eq!(recs.invalidated(), vec![UserId::new(7)]);
    }

    #[tokio::test]
    async fn test_record_interaction_rejects_unknown_type() {
        let (catalog, recs, service) = build_service();
        let request: InteractionRequest = serde_json::from_str(
            r#"{"user_id": 7, "business_id": 3, "interaction_type": "bookmark"}"#,
        )
        .unwrap();

        let err = service.record_interaction(request).await.unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(catalog.interactions.lock().unwrap().is_empty());
        assert!(recs.invalidated().is_empty());
    }

    #[tokio::test]
    async fn test_delete_user_invalidates_only_when_present() {
        let (_, recs, service) = build_service();

        assert!(!service.delete_user(UserId::new(7)).await.unwrap());
        assert!(recs.invalidated().is_empty());

        service.upsert_user(user_request(7)).await.unwrap();
        assert!(service.delete_user(UserId::new(7)).await.unwrap());
        // One invalidation from the upsert, one from the delete
        assert_eq!(recs.invalidated(), vec![UserId::new(7), UserId::new(7)]);
    }

    #[tokio::test]
    async fn test_delete_business_reports_absence() {
        let (_, recs, service) = build_service();

        assert!(!service.delete_business(BusinessId::new(3)).await.unwrap());

        let request: BusinessSyncRequest =
            serde_json::from_str(r#"{"id": 3, "name": "Blue Bottle"}"#).unwrap();
        service.upsert_business(request).await.unwrap();
        assert!(service.delete_business(BusinessId::new(3)).await.unwrap());
        assert!(recs.invalidated().is_empty());
    }
}
