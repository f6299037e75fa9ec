//! # Mercato Repository
//!
//! PostgreSQL access for the recommendation engine: the read-only
//! [`CandidateSource`] consulted by the serving path and the write-side
//! [`CatalogRepository`] used by the sync collaborators.

mod pg;
mod pool;
mod traits;

pub use pg::{PgCandidateSource, PgCandidateSourceParameters, PgCatalogRepository, PgCatalogRepositoryParameters};
pub use pool::{DatabasePool, DatabasePoolInterface, DatabasePoolParameters, create_pool};
pub use traits::{CandidateSource, CatalogRepository};
