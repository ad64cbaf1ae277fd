//! Repository traits for data access abstraction.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{Content, NewContent},
};

/// Repository for Content operations.
pub trait ContentRepository: Send + Sync {
    /// Get a content record by primary key.
    fn find_by_id(&self, id: i64) -> impl Future<Output = DbResult<Option<Content>>> + Send;

    /// Insert a new record and return it as stored.
    fn create(&self, content: &NewContent) -> impl Future<Output = DbResult<Content>> + Send;

    /// Get all records, oldest id first.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Content>>> + Send;
}

/// Combined database interface.
pub trait Database: Send + Sync {
    type Contents<'a>: ContentRepository
    where
        Self: 'a;

    /// Apply pending versioned migrations.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the content repository.
    fn contents(&self) -> Self::Contents<'_>;
}
