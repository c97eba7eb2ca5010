use std::fmt;

use estate_core::Property;
use estate_storage::{DynStorage, PropertyStorage};
use tracing::{debug, error, info, warn};

use crate::error::Result;
use crate::filter::{PropertyFilter, compose_query};
use crate::merge::apply_update;
use crate::validation::{
    CreatePropertyPayload, UpdatePropertyPayload, validate_create_payload, validate_filter,
    validate_identifier, validate_update_payload,
};

/// Outcome of a single-record write.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The target existed and the write went through.
    Applied,
    /// No record with the given id.
    NotFound,
}

impl WriteOutcome {
    fn from_applied(applied: bool) -> Self {
        if applied { Self::Applied } else { Self::NotFound }
    }

    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }

    pub fn is_not_found(self) -> bool {
        self == Self::NotFound
    }
}

/// Property listing operations over an injected storage backend.
///
/// Every request is validated before storage is touched; storage failures
/// are logged and returned unchanged.
#[derive(Clone)]
pub struct PropertyService {
    storage: DynStorage,
}

impl fmt::Debug for PropertyService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyService")
            .field("backend", &self.storage.backend_name())
            .finish()
    }
}

impl PropertyService {
    pub fn new(storage: DynStorage) -> Self {
        Self { storage }
    }

    /// Every property, unfiltered and in storage order.
    pub async fn list_all(&self) -> Result<Vec<Property>> {
        let properties = self
            .storage
            .find_all()
            .await
            .inspect_err(|e| error!(error = %e, "Error retrieving all properties"))?;
        Ok(properties)
    }

    /// Properties matching every populated criterion, newest first.
    ///
    /// `None` is rejected as invalid; pass [`PropertyFilter::default`] for an
    /// unfiltered search.
    pub async fn search(&self, filter: Option<&PropertyFilter>) -> Result<Vec<Property>> {
        let filter = validate_filter(filter)
            .inspect_err(|e| warn!(error = %e, "Rejected property filter"))?;
        let query = compose_query(filter);

        let properties = self
            .storage
            .find_where(&query)
            .await
            .inspect_err(|e| error!(error = %e, "Error retrieving filtered properties"))?;

        debug!(
            unfiltered = filter.is_empty(),
            criteria = query.filters.len(),
            results = properties.len(),
            "Property search completed"
        );
        Ok(properties)
    }

    /// Looks up a property; `Ok(None)` when it does not exist.
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Property>> {
        validate_identifier(id)?;
        let property = self.storage.find_by_id(id).await.inspect_err(
            |e| error!(property_id = %id, error = %e, "Error retrieving property"),
        )?;
        Ok(property)
    }

    /// Validates the payload and stores a new property.
    pub async fn create(&self, payload: CreatePropertyPayload) -> Result<Property> {
        let draft = validate_create_payload(payload)
            .inspect_err(|e| warn!(error = %e, "Rejected property payload"))?;

        let created = self
            .storage
            .insert(draft)
            .await
            .inspect_err(|e| error!(error = %e, "Error creating property"))?;

        info!(property_id = %created.id, "Property created");
        Ok(created)
    }

    /// Applies a partial update.
    ///
    /// An unknown id yields [`WriteOutcome::NotFound`] without writing.
    pub async fn update(&self, id: &str, payload: UpdatePropertyPayload) -> Result<WriteOutcome> {
        validate_identifier(id)?;
        let update = validate_update_payload(payload)
            .inspect_err(|e| warn!(property_id = %id, error = %e, "Rejected property update"))?;

        let existing = self.storage.find_by_id(id).await.inspect_err(
            |e| error!(property_id = %id, error = %e, "Error updating property"),
        )?;
        let Some(existing) = existing else {
            debug!(property_id = %id, "Property not found for update");
            return Ok(WriteOutcome::NotFound);
        };

        let merged = apply_update(&existing, &update);
        let replaced = self.storage.replace(id, &merged).await.inspect_err(
            |e| error!(property_id = %id, error = %e, "Error updating property"),
        )?;

        let outcome = WriteOutcome::from_applied(replaced);
        if outcome.is_applied() {
            info!(property_id = %id, "Property updated");
        }
        Ok(outcome)
    }

    /// Removes a property for good.
    pub async fn delete(&self, id: &str) -> Result<WriteOutcome> {
        validate_identifier(id)?;
        let removed = self.storage.remove(id).await.inspect_err(
            |e| error!(property_id = %id, error = %e, "Error deleting property"),
        )?;

        let outcome = WriteOutcome::from_applied(removed);
        match outcome {
            WriteOutcome::Applied => info!(property_id = %id, "Property deleted"),
            WriteOutcome::NotFound => {
                warn!(property_id = %id, "Property not found for deletion")
            }
        }
        Ok(outcome)
    }

    /// Number of stored properties.
    pub async fn count(&self) -> Result<u64> {
        let count = self
            .storage
            .count()
            .await
            .inspect_err(|e| error!(error = %e, "Error counting properties"))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_db_memory::InMemoryStorage;
    use std::sync::Arc;

    #[test]
    fn test_write_outcome_predicates() {
        assert!(WriteOutcome::from_applied(true).is_applied());
        assert!(WriteOutcome::from_applied(false).is_not_found());
    }

    #[test]
    fn test_debug_shows_backend() {
        let service = PropertyService::new(Arc::new(InMemoryStorage::new()));
        assert_eq!(format!("{service:?}"), "PropertyService { backend: \"memory\" }");
    }

    #[test]
    fn test_blank_identifier_is_rejected_before_storage() {
        let service = PropertyService::new(Arc::new(InMemoryStorage::new()));
        let err = tokio_test::block_on(service.get_by_id(" ")).unwrap_err();
        assert!(err.is_invalid_argument());
        let err = tokio_test::block_on(service.delete("")).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
