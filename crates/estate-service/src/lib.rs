//! Property listing service: the validation guard, the filter composer and
//! the partial-update merge, wired over any [`estate_storage::PropertyStorage`].
//!
//! ```ignore
//! use estate_service::{PropertyFilter, PropertyService};
//!
//! let service = PropertyService::new(storage);
//! let filter = PropertyFilter::new().with_min_price(dec!(120000));
//! let listings = service.search(Some(&filter)).await?;
//! ```

pub mod error;
pub mod filter;
pub mod merge;
pub mod service;
pub mod validation;

pub use error::{ErrorCategory, Result, ServiceError};
pub use filter::{PropertyFilter, compose_query};
pub use merge::apply_update;
pub use service::{PropertyService, WriteOutcome};
pub use validation::{
    CreatePropertyPayload, UpdatePropertyPayload, validate_create_payload, validate_filter,
    validate_identifier, validate_update_payload,
};
