//! Input checks that run before any storage access.
//!
//! All functions here are pure. A failure is always
//! [`ServiceError::InvalidArgument`], so callers can never confuse an
//! invalid request with a missing record.

use std::borrow::Cow;

use estate_core::NewProperty;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::{Result, ServiceError};
use crate::filter::PropertyFilter;

/// Payload for creating a property. Every field is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePropertyPayload {
    #[validate(custom(function = "not_blank"))]
    pub owner_id: String,

    #[validate(length(min = 3, max = 200, message = "Name must be between 3 and 200 characters"))]
    pub name: String,

    #[validate(length(
        min = 5,
        max = 500,
        message = "Address must be between 5 and 500 characters"
    ))]
    pub address: String,

    #[validate(custom(function = "positive_price"))]
    pub price: Decimal,

    #[validate(url(message = "Image must be a valid URL"))]
    pub image: String,
}

impl CreatePropertyPayload {
    /// Trims every text field.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            owner_id: self.owner_id.trim().to_string(),
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            price: self.price,
            image: self.image.trim().to_string(),
        }
    }
}

impl From<CreatePropertyPayload> for NewProperty {
    fn from(payload: CreatePropertyPayload) -> Self {
        Self {
            owner_id: payload.owner_id,
            name: payload.name,
            address: payload.address,
            price: payload.price,
            image: payload.image,
        }
    }
}

/// Sparse payload for a partial update. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePropertyPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 3, max = 200, message = "Name must be between 3 and 200 characters"))]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(
        min = 5,
        max = 500,
        message = "Address must be between 5 and 500 characters"
    ))]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "positive_price"))]
    pub price: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "Image must be a valid URL"))]
    pub image: Option<String>,
}

impl UpdatePropertyPayload {
    /// Trims text fields and drops the blank ones: a blank value never
    /// clears a field.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            name: trimmed_non_blank(self.name),
            address: trimmed_non_blank(self.address),
            price: self.price,
            image: trimmed_non_blank(self.image),
        }
    }

    /// Returns true if no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.address.is_none() && self.price.is_none() && self.image.is_none()
    }
}

fn trimmed_non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn not_blank(value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required")
            .with_message(Cow::Borrowed("Owner ID is required")));
    }
    Ok(())
}

fn positive_price(price: &Decimal) -> std::result::Result<(), ValidationError> {
    if *price <= Decimal::ZERO {
        return Err(ValidationError::new("range")
            .with_message(Cow::Borrowed("Price must be greater than 0")));
    }
    Ok(())
}

/// Rejects empty or whitespace-only identifiers.
pub fn validate_identifier(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(ServiceError::invalid_argument(
            "Property ID cannot be null or empty",
        ));
    }
    Ok(())
}

/// Checks that a filter is present and its price range is not inverted.
///
/// An absent filter is a caller bug; the empty filter is valid and
/// matches everything.
pub fn validate_filter(filter: Option<&PropertyFilter>) -> Result<&PropertyFilter> {
    let filter =
        filter.ok_or_else(|| ServiceError::invalid_argument("Filter must be provided"))?;

    if let (Some(min), Some(max)) = (filter.min_price, filter.max_price)
        && min > max
    {
        return Err(ServiceError::invalid_argument(
            "Minimum price cannot be greater than maximum price",
        ));
    }

    Ok(filter)
}

/// Normalizes and validates a creation payload, yielding the storage draft.
pub fn validate_create_payload(payload: CreatePropertyPayload) -> Result<NewProperty> {
    let payload = payload.normalized();
    payload.validate()?;
    Ok(payload.into())
}

/// Normalizes and validates a partial update payload.
pub fn validate_update_payload(payload: UpdatePropertyPayload) -> Result<UpdatePropertyPayload> {
    let payload = payload.normalized();
    payload.validate()?;
    Ok(payload)
}
