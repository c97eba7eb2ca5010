//! Filter criteria and their translation into a storage query.
//!
//! Every criterion is optional. An absent (or blank) criterion places no
//! constraint; the ones present are combined with AND. The resulting query
//! always orders by creation time, newest first.

use estate_storage::{PropertyQuery, QueryFilter, SortParam, TextField};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Optional search criteria over properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFilter {
    /// Name fragment (case-insensitive substring).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Address fragment (case-insensitive substring).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Inclusive lower price bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<Decimal>,
}

impl PropertyFilter {
    /// The empty filter: matches every property.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn with_min_price(mut self, min_price: Decimal) -> Self {
        self.min_price = Some(min_price);
        self
    }

    #[must_use]
    pub fn with_max_price(mut self, max_price: Decimal) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// Returns true if no criterion would constrain the result.
    pub fn is_empty(&self) -> bool {
        text_criterion(self.name.as_deref()).is_none()
            && text_criterion(self.address.as_deref()).is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
    }
}

/// Folds the populated criteria of `filter` into a conjunctive query.
///
/// Bounds are not checked here; run [`crate::validate_filter`] first.
pub fn compose_query(filter: &PropertyFilter) -> PropertyQuery {
    let text = [
        (TextField::Name, filter.name.as_deref()),
        (TextField::Address, filter.address.as_deref()),
    ]
    .into_iter()
    .filter_map(|(field, value)| {
        text_criterion(value).map(|value| QueryFilter::contains(field, value))
    });

    let price = filter
        .min_price
        .map(QueryFilter::price_at_least)
        .into_iter()
        .chain(filter.max_price.map(QueryFilter::price_at_most));

    text.chain(price)
        .fold(PropertyQuery::new(), |query, f| query.with_filter(f))
        .with_sort(SortParam::newest_first())
}

// Whitespace-only text is no criterion at all.
fn text_criterion(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
