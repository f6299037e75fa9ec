//! Data transfer objects.

mod recommendation_dto;
mod sync_dto;

pub use recommendation_dto::{
    InteractionListResponse, InteractionView, RecommendationItem, RecommendationResponse,
    RecommendationSource,
};
pub use sync_dto::{BusinessSyncRequest, InteractionRequest, UserSyncRequest};
