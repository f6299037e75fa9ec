//! Service implementations.

mod recommendation_service_impl;
mod sync_service_impl;

pub use recommendation_service_impl::{
    RecommendationServiceImpl, RecommendationServiceImplParameters,
};
pub use sync_service_impl::SyncServiceImpl;
