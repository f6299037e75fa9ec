//! Catalog sync controller: the write path pushed by upstream systems.

use crate::{
    responses::{ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::{delete, post},
    Json, Router,
};
use mercato_core::{BusinessId, MercatoError, UserId};
use mercato_service::{BusinessSyncRequest, InteractionRequest, UserSyncRequest};
use serde::Serialize;
use tracing::debug;

/// Creates the sync router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sync/user", post(sync_user))
        .route("/sync/business", post(sync_business))
        .route("/sync/user/:id", delete(delete_user))
        .route("/sync/business/:id", delete(delete_business))
        .route("/interaction", post(record_interaction))
}

/// Acknowledgement for a sync mutation.
#[derive(Debug, Serialize)]
pub struct SyncAck {
    pub status: &'static str,
    pub id: i64,
}

/// Create or update a user record.
async fn sync_user(
    State(state): State<AppState>,
    Json(request): Json<UserSyncRequest>,
) -> ApiResult<SyncAck> {
    debug!("Sync user request: {}", request.id);

    let id = request.id;
    state.sync_service.upsert_user(request).await?;
    ok(SyncAck {
        status: "synced",
        id,
    })
}

/// Create or update a business record.
async fn sync_business(
    State(state): State<AppState>,
    Json(request): Json<BusinessSyncRequest>,
) -> ApiResult<SyncAck> {
    debug!("Sync business request: {}", request.id);

    let id = request.id;
    state.sync_service.upsert_business(request).await?;
    ok(SyncAck {
        status: "synced",
        id,
    })
}

/// Record a user interaction.
async fn record_interaction(
    State(state): State<AppState>,
    Json(request): Json<InteractionRequest>,
) -> ApiResult<SyncAck> {
    debug!(
        "Interaction request: user {} -> business {}",
        request.user_id, request.business_id
    );

    let id = request.user_id;
    state.sync_service.record_interaction(request).await?;
    ok(SyncAck {
        status: "recorded",
        id,
    })
}

/// Delete a user and their interactions.
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<SyncAck> {
    debug!("Delete user request: {}", id);

    let deleted = state.sync_service.delete_user(UserId::new(id)).await?;
    if !deleted {
        return Err(AppError(MercatoError::not_found("User", id)));
    }
    ok(SyncAck {
        status: "deleted",
        id,
    })
}

/// Delete a business and its interactions.
async fn delete_business(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<SyncAck> {
    debug!("Delete business request: {}", id);

    let deleted = state
        .sync_service
        .delete_business(BusinessId::new(id))
        .await?;
    if !deleted {
        return Err(AppError(MercatoError::not_found("Business", id)));
    }
    ok(SyncAck {
        status: "deleted",
        id,
    })
}
