//! PostgreSQL candidate source implementation.

use super::rows::{BusinessRow, InteractionRow, UserRow};
use crate::{pool::DatabasePoolInterface, traits::CandidateSource};
use async_trait::async_trait;
use mercato_core::{BusinessProfile, Interaction, MercatoResult, UserId, UserProfile};
use shaku::Component;
use std::sync::Arc;
use tracing::debug;

/// Read-only candidate source backed by PostgreSQL.
#[derive(Component, Clone)]
#[shaku(interface = CandidateSource)]
pub struct PgCandidateSource {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl PgCandidateSource {
    /// Creates a new PostgreSQL candidate source.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateSource for PgCandidateSource {
    async fn fetch_user(&self, id: UserId) -> MercatoResult<Option<UserProfile>> {
        debug!("Fetching user {}", id);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, email, interests, location, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(UserProfile::from))
    }

    async fn fetch_recent_interactions(
        &self,
        id: UserId,
        limit: i64,
    ) -> MercatoResult<Vec<Interaction>> {
        debug!("Fetching up to {} recent interactions for user {}", limit, id);

        let rows = sqlx::query_as::<_, InteractionRow>(
            r#"
            SELECT user_id, business_id, interaction_type, weight, timestamp
            FROM user_interactions
            WHERE user_id = $1
            ORDER BY timestamp DESC
            LIMIT $2
            "#,
        )
        .bind(id.into_inner())
        .bind(limit)
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Interaction::from).collect())
    }

    async fn fetch_candidate_businesses(&self, limit: i64) -> MercatoResult<Vec<BusinessProfile>> {
        debug!("Fetching up to {} candidate businesses", limit);

        let rows = sqlx::query_as::<_, BusinessRow>(
            r#"
            SELECT id, name, description, categories, tags, location,
                   popularity_score, rating, rating_count, created_at
            FROM businesses
            ORDER BY popularity_score DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(BusinessProfile::from).collect())
    }
}

impl std::fmt::Debug for PgCandidateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgCandidateSource").finish_non_exhaustive()
    }
}
