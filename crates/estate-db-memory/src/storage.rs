use crate::factory::StorageOptions;
use crate::query::{PropertyMatcher, sort_properties};
use async_trait::async_trait;
use estate_core::{NewProperty, Property, SharedClock, SystemClock, generate_id};
use estate_storage::{PropertyQuery, PropertyStorage, StorageError};
use papaya::HashMap as PapayaHashMap;
use std::sync::Arc;
use tracing::debug;

/// In-memory property storage backend using papaya lock-free HashMap.
///
/// This storage implementation provides:
/// - Lock-free concurrent access via papaya::HashMap
/// - Server-side id and timestamp assignment from an injected clock
/// - Query evaluation with conjunctive filters and sorting
#[derive(Debug)]
pub struct InMemoryStorage {
    /// Records keyed by property id
    pub(crate) data: Arc<PapayaHashMap<String, Property>>,
    /// Clock used to stamp `created_at` / `updated_at`
    clock: SharedClock,
    /// Storage configuration options (soft hints for in-memory backend)
    _options: StorageOptions,
}

impl InMemoryStorage {
    /// Creates a new in-memory storage with default options and the system clock.
    pub fn new() -> Self {
        Self::with_options(StorageOptions::default(), SystemClock::shared())
    }

    /// Creates a new in-memory storage stamping records with `clock`.
    pub fn with_clock(clock: SharedClock) -> Self {
        Self::with_options(StorageOptions::default(), clock)
    }

    /// Creates a new in-memory storage with the given options.
    pub fn with_options(options: StorageOptions, clock: SharedClock) -> Self {
        let data = match options.preallocate_items {
            Some(capacity) => PapayaHashMap::with_capacity(capacity),
            None => PapayaHashMap::new(),
        };
        Self {
            data: Arc::new(data),
            clock,
            _options: options,
        }
    }

    fn snapshot(&self) -> Vec<Property> {
        let guard = self.data.pin();
        guard.values().cloned().collect()
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PropertyStorage for InMemoryStorage {
    async fn find_all(&self) -> Result<Vec<Property>, StorageError> {
        Ok(self.snapshot())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Property>, StorageError> {
        let guard = self.data.pin();
        Ok(guard.get(id).cloned())
    }

    async fn find_where(&self, query: &PropertyQuery) -> Result<Vec<Property>, StorageError> {
        let guard = self.data.pin();
        let mut matching: Vec<Property> = guard
            .values()
            .filter(|property| query.matches(property))
            .cloned()
            .collect();

        sort_properties(&mut matching, query.sort);

        debug!(
            filters = query.filters.len(),
            matched = matching.len(),
            "Executed property query"
        );
        Ok(matching)
    }

    async fn count(&self) -> Result<u64, StorageError> {
        Ok(self.data.pin().len() as u64)
    }

    async fn insert(&self, draft: NewProperty) -> Result<Property, StorageError> {
        let id = generate_id();
        let property = Property::from_draft(id.clone(), draft, self.clock.now());
        let guard = self.data.pin();

        // Check for conflicts
        if guard.try_insert(id.clone(), property.clone()).is_err() {
            return Err(StorageError::already_exists(id));
        }

        debug!(property_id = %id, "Inserted property");
        Ok(property)
    }

    async fn replace(&self, id: &str, property: &Property) -> Result<bool, StorageError> {
        let now = self.clock.now();
        let guard = self.data.pin();

        let replaced = guard
            .update(id.to_string(), |existing| Property {
                id: existing.id.clone(),
                created_at: existing.created_at,
                ..property.clone()
            }
            .touched(now))
            .is_some();

        debug!(property_id = %id, replaced, "Replaced property");
        Ok(replaced)
    }

    async fn remove(&self, id: &str) -> Result<bool, StorageError> {
        let guard = self.data.pin();
        let removed = guard.remove(id).is_some();
        debug!(property_id = %id, removed, "Removed property");
        Ok(removed)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
