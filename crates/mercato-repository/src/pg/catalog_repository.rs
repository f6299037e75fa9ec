//! PostgreSQL catalog repository implementation (write path).

use crate::{pool::DatabasePoolInterface, traits::CatalogRepository};
use async_trait::async_trait;
use mercato_core::{
    BusinessId, BusinessProfile, InteractionType, MercatoResult, UserId, UserProfile,
};
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// Write-side catalog repository backed by PostgreSQL.
///
/// Mirrors the upstream catalog into the tables the serving path reads.
/// Cache invalidation is the sync service's responsibility, not this layer's.
#[derive(Component, Clone)]
#[shaku(interface = CatalogRepository)]
pub struct PgCatalogRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl PgCatalogRepository {
    /// Creates a new PostgreSQL catalog repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository for PgCatalogRepository {
    async fn upsert_user(&self, user: &UserProfile) -> MercatoResult<()> {
        debug!("Upserting user {}", user.id);

        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, interests, location)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                username = EXCLUDED.username,
                email = EXCLUDED.email,
                interests = EXCLUDED.interests,
                location = EXCLUDED.location,
                updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(user.id.into_inner())
        .bind(&user.username)
        .bind(&user.email)
        .bind(serde_json::to_value(&user.interests)?)
        .bind(user.location.map(serde_json::to_value).transpose()?)
        .execute(self.pool.inner())
        .await?;

        Ok(())
    }

    async fn upsert_business(&self, business: &BusinessProfile) -> MercatoResult<()> {
        debug!("Upserting business {}", business.id);

        sqlx::query(
            r#"
            INSERT INTO businesses
                (id, name, description, categories, tags, location,
                 popularity_score, rating, rating_count)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                categories = EXCLUDED.categories,
                tags = EXCLUDED.tags,
                location = EXCLUDED.location,
                popularity_score = EXCLUDED.popularity_score,
                rating = EXCLUDED.rating,
                rating_count = EXCLUDED.rating_count,
                updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(business.id.into_inner())
        .bind(&business.name)
        .bind(&business.description)
        .bind(serde_json::to_value(&business.categories)?)
        .bind(serde_json::to_value(&business.tags)?)
        .bind(business.location.map(serde_json::to_value).transpose()?)
        .bind(business.popularity_score)
        .bind(business.rating)
        .bind(business.rating_count)
        .execute(self.pool.inner())
        .await?;

        Ok(())
    }

    async fn record_interaction(
        &self,
        user_id: UserId,
        business_id: BusinessId,
        interaction_type: InteractionType,
        weight: f64,
    ) -> MercatoResult<()> {
        debug!(
            "Recording {} interaction: user {} -> business {}",
            interaction_type, user_id, business_id
        );

        sqlx::query(
            r#"
            INSERT INTO user_interactions (user_id, business_id, interaction_type, weight)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, business_id, interaction_type)
            DO UPDATE SET
                weight = EXCLUDED.weight,
                timestamp = CURRENT_TIMESTAMP
            "#,
        )
        .bind(user_id.into_inner())
        .bind(business_id.into_inner())
        .bind(interaction_type.as_str())
        .bind(weight)
        .execute(self.pool.inner())
        .await?;

        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> MercatoResult<bool> {
        debug!("Deleting user {}", id);

        // Interactions go first; not every deployment has the FK cascade
        sqlx::query("DELETE FROM user_interactions WHERE user_id = $1")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_business(&self, id: BusinessId) -> MercatoResult<bool> {
        debug!("Deleting business {}", id);

        sqlx::query("DELETE FROM user_interactions WHERE business_id = $1")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        let result = sqlx::query("DELETE FROM businesses WHERE id = $1")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

impl std::fmt::Debug for PgCatalogRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgCatalogRepository").finish_non_exhaustive()
    }
}
