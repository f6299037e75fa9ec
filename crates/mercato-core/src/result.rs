//! Result type aliases for Mercato.

use crate::MercatoError;

/// A specialized `Result` type for Mercato operations.
pub type MercatoResult<T> = Result<T, MercatoError>;

/// A boxed future returning a `MercatoResult`.
pub type BoxFuture<'a, T> =
    std::pin::Pin<Box<dyn std::future::Future<Output = MercatoResult<T>> + Send + 'a>>;
