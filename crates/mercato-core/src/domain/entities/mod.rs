//! Domain entities.

pub mod business_profile;
pub mod interaction;
pub mod user_profile;

pub use business_profile::BusinessProfile;
pub use interaction::Interaction;
pub use user_profile::UserProfile;
