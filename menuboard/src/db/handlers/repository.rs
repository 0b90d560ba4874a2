//! Base repository trait for database operations.
//!
//! A repository is the data access layer for one postgres table. It borrows a single
//! `PgConnection` (a pooled connection or an open transaction) for its lifetime, so several
//! repositories can share one transaction by being created one after another.

use crate::db::errors::Result;

/// CRUD operations shared by all table repositories.
///
/// Create, update and response types are separate so the write paths only carry the columns
/// they are allowed to set.
#[async_trait::async_trait]
pub trait Repository {
    /// The request type for creating entities
    type CreateRequest;

    /// The request type for updating entities
    type UpdateRequest;

    /// The row type returned by operations
    type Response;

    /// The identifier type for lookups
    type Id: Send + Sync;

    /// The filter type for list operations
    type Filter: Send + Sync;

    /// Insert a new row and return it with its assigned id
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response>;

    /// Get a row by id
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Option<Self::Response>>;

    /// List rows matching the filter
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>>;

    /// Total number of rows in the table
    async fn count(&mut self) -> Result<i64>;

    /// Delete a row by id, returning whether it existed
    async fn delete(&mut self, id: Self::Id) -> Result<bool>;

    /// Update a row by id. Fails with [`crate::db::errors::DbError::NotFound`] if it does not exist.
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<Self::Response>;
}
