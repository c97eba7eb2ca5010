//! # estate-storage
//!
//! Storage abstraction layer for the property listings service.
//!
//! This crate defines the trait and query types that every storage backend
//! must implement. It does not contain any implementations - those are
//! provided by separate crates such as `estate-db-memory`.
//!
//! ## Overview
//!
//! The main trait is [`PropertyStorage`], which defines the contract for:
//! - Reads (all records, by id, by query descriptor)
//! - Single-record writes (insert, replace, remove)
//!
//! Queries are expressed as a [`PropertyQuery`]: a conjunction of
//! [`QueryFilter`]s plus a [`SortParam`]. The backend decides how to
//! evaluate it.
//!
//! ## Example
//!
//! ```ignore
//! use estate_core::Property;
//! use estate_storage::{PropertyQuery, PropertyStorage, QueryFilter, StorageError, TextField};
//!
//! async fn houses_on_main_street(
//!     storage: &dyn PropertyStorage,
//! ) -> Result<Vec<Property>, StorageError> {
//!     let query = PropertyQuery::new()
//!         .with_filter(QueryFilter::contains(TextField::Address, "main street"));
//!     storage.find_where(&query).await
//! }
//! ```

mod error;
mod traits;
mod types;

pub use error::{ErrorCategory, StorageError};
pub use traits::PropertyStorage;
pub use types::{PropertyQuery, QueryFilter, SortField, SortOrder, SortParam, TextField};

/// Type alias for a storage result.
pub type StorageResult<T> = Result<T, StorageError>;

/// Type alias for a shareable storage trait object.
pub type DynStorage = std::sync::Arc<dyn PropertyStorage>;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ErrorCategory, StorageError};
    pub use crate::traits::PropertyStorage;
    pub use crate::types::{
        PropertyQuery, QueryFilter, SortField, SortOrder, SortParam, TextField,
    };
    pub use crate::{DynStorage, StorageResult};
}
