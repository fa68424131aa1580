//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;

use crate::domain::{DogSummary, DomainResult, Entity};

/// Core repository trait
///
/// Generic over any Entity type.
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Create a new entity, returning it with its assigned ID
    async fn create(&self, entity: &T) -> DomainResult<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// List all entities
    async fn list(&self) -> DomainResult<Vec<T>>;
}

/// Listing queries over dogs
#[async_trait]
pub trait DogQueries: Send + Sync {
    /// Dogs whose breed name is one of `breeds`; every dog when `breeds` is empty
    async fn list_summaries(&self, breeds: &[String]) -> DomainResult<Vec<DogSummary>>;

    /// IDs of all dogs, ascending
    async fn list_ids(&self) -> DomainResult<Vec<u32>>;
}
