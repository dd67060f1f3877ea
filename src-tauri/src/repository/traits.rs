//! Repository Layer - Core Traits
//!
//! Storage-agnostic access to boards and tasks. The SQLite repositories
//! implement these; extra per-entity operations live in their own traits
//! next to each repository.

use async_trait::async_trait;
use crate::domain::{DomainResult, Entity};

/// Row-level create/read/update/delete for one entity table
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Insert and return the stored entity with its assigned id
    async fn create(&self, entity: &T) -> DomainResult<T>;

    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// Persist editable fields; `NotFound` if the row is gone
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Remove the row and everything that cascades from it
    async fn delete(&self, id: T::Id) -> DomainResult<()>;
}
