//! PostgreSQL implementations.

mod candidate_source;
mod catalog_repository;
mod rows;

pub use candidate_source::{PgCandidateSource, PgCandidateSourceParameters};
pub use catalog_repository::{PgCatalogRepository, PgCatalogRepositoryParameters};
