//! In-memory property storage backend.
//!
//! This crate provides an in-memory implementation of the `PropertyStorage`
//! trait from `estate-storage`, using a papaya lock-free HashMap for
//! concurrent access.
//!
//! # Example
//!
//! ```ignore
//! use estate_db_memory::InMemoryStorage;
//! use estate_storage::PropertyStorage;
//!
//! let storage = InMemoryStorage::new();
//! let created = storage.insert(draft).await?;
//! assert!(storage.find_by_id(&created.id).await?.is_some());
//! ```

pub mod factory;
pub mod query;
pub mod storage;

pub use estate_storage::{DynStorage, PropertyStorage, StorageError};

pub use factory::{StorageBackend, StorageConfig, StorageOptions, create_storage};
pub use query::PropertyMatcher;
pub use storage::InMemoryStorage;
