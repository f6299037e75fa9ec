//! Cache key generators for consistent key naming.
//!
//! Recommendation lists live under `recs:{userId}:{fingerprint}` so that a
//! single prefix delete clears every cached context for one user without
//! touching neighbors (`recs:7:` never matches `recs:71:` or `recs:8:*`).
//! Precomputed feature blobs live in their own `user:features:` namespace.

use mercato_core::{RequestContext, UserId};
use sha2::{Digest, Sha256};

/// Prefix for cached recommendation lists.
const RECS_PREFIX: &str = "recs";

/// Prefix for precomputed user feature blobs.
const FEATURES_PREFIX: &str = "user:features";

/// Computes the 8-hex-character fingerprint of a canonicalized context.
///
/// Truncated SHA-256: 32 bits is plenty, a collision only costs a wrong
/// cache hit for the same user and is bounded by the TTL.
#[must_use]
pub fn context_fingerprint(context: &RequestContext) -> String {
    let digest = Sha256::digest(context.canonical().as_bytes());
    digest[..4].iter().map(|b| format!("{:02x}", b)).collect()
}

/// Generates the cache key for a user's recommendations under a context.
#[must_use]
pub fn recommendation_key(user_id: UserId, context: &RequestContext) -> String {
    format!("{}:{}:{}", RECS_PREFIX, user_id, context_fingerprint(context))
}

/// Prefix covering every cached recommendation list for a user.
#[must_use]
pub fn user_prefix(user_id: UserId) -> String {
    format!("{}:{}:", RECS_PREFIX, user_id)
}

/// Generates the cache key for a user's precomputed feature blob.
#[must_use]
pub fn user_features_key(user_id: UserId) -> String {
    format!("{}:{}", FEATURES_PREFIX, user_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_key_format() {
        let ctx = RequestContext::default();
        let key = recommendation_key(UserId::new(7), &ctx);
        assert!(key.starts_with("recs:7:"));
        let fingerprint = key.rsplit(':').next().unwrap();
        assert_eq!(fingerprint.len(), 8);
        assert!(fingerprint.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_fingerprint_stable_across_key_order() {
        let a = RequestContext::parse(r#"{"time_of_day": "morning", "location": null}"#).unwrap();
        let b = RequestContext::parse(r#"{"location": null, "time_of_day": "morning"}"#).unwrap();
        assert_eq!(context_fingerprint(&a), context_fingerprint(&b));
    }

    #[test]
    fn test_fingerprint_differs_for_different_contexts() {
        let a = RequestContext::parse(r#"{"time_of_day": "morning"}"#).unwrap();
        let b = RequestContext::parse(r#"{"time_of_day": "evening"}"#).unwrap();
        assert_ne!(context_fingerprint(&a), context_fingerprint(&b));
    }

    #[test]
    fn test_key_falls_under_user_prefix() {
        let ctx = RequestContext::default();
        let key = recommendation_key(UserId::new(7), &ctx);
        assert!(key.starts_with(&user_prefix(UserId::new(7))));
        // A neighboring user's prefix must not match
        assert!(!key.starts_with(&user_prefix(UserId::new(71))));
    }

    #[test]
    fn test_user_features_key() {
        assert_eq!(user_features_key(UserId::new(7)), "user:features:7");
    }
}
