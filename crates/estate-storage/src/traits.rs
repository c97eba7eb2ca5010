//! Storage traits for the property storage abstraction layer.

use async_trait::async_trait;
use estate_core::{NewProperty, Property};

use crate::error::StorageError;
use crate::types::PropertyQuery;

/// The storage contract every property backend implements.
///
/// Every write touches a single record; there are no multi-record
/// transactions. Implementations must be thread-safe (`Send + Sync`) since
/// they are shared behind an `Arc` by concurrent callers.
///
/// # Example
///
/// ```ignore
/// use estate_storage::{PropertyStorage, StorageError};
///
/// async fn price_of(storage: &dyn PropertyStorage, id: &str) -> Result<Option<Decimal>, StorageError> {
///     Ok(storage.find_by_id(id).await?.map(|p| p.price))
/// }
/// ```
#[async_trait]
pub trait PropertyStorage: Send + Sync {
    // ==================== Reads ====================

    /// Returns every stored property, in no particular order.
    async fn find_all(&self) -> Result<Vec<Property>, StorageError>;

    /// Reads a property by ID.
    ///
    /// Returns `None` if the property does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error only for infrastructure issues, not for missing records.
    async fn find_by_id(&self, id: &str) -> Result<Option<Property>, StorageError>;

    /// Returns every property satisfying all filters of `query`, ordered by
    /// the query's sort parameter.
    async fn find_where(&self, query: &PropertyQuery) -> Result<Vec<Property>, StorageError>;

    /// Returns the number of stored properties.
    async fn count(&self) -> Result<u64, StorageError>;

    // ==================== Writes ====================

    /// Stores a new property.
    ///
    /// The backend assigns the identifier and sets both `created_at` and
    /// `updated_at` to the same instant.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::AlreadyExists` if the generated id collides.
    async fn insert(&self, draft: NewProperty) -> Result<Property, StorageError>;

    /// Replaces the property stored under `id`.
    ///
    /// `created_at` is kept from the stored record and `updated_at` is
    /// refreshed. Returns `true` iff a record existed and was replaced.
    async fn replace(&self, id: &str, property: &Property) -> Result<bool, StorageError>;

    /// Removes the property stored under `id` (hard delete).
    ///
    /// Returns `true` iff a record existed and was removed.
    async fn remove(&self, id: &str) -> Result<bool, StorageError>;

    // ==================== Metadata ====================

    /// Returns the name of this storage backend for logging/debugging.
    fn backend_name(&self) -> &'static str;
}
