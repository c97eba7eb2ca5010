//! Query descriptor types used by the storage traits.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Free-text property fields that support substring filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextField {
    Name,
    Address,
}

/// A single constraint on a property. A query holds zero or more of these,
/// all of which must hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum QueryFilter {
    /// Case-insensitive literal substring match on a text field.
    Contains { field: TextField, value: String },
    /// `price >= min`
    PriceAtLeast { min: Decimal },
    /// `price <= max`
    PriceAtMost { max: Decimal },
}

impl QueryFilter {
    pub fn contains(field: TextField, value: impl Into<String>) -> Self {
        Self::Contains {
            field,
            value: value.into(),
        }
    }

    pub fn price_at_least(min: Decimal) -> Self {
        Self::PriceAtLeast { min }
    }

    pub fn price_at_most(max: Decimal) -> Self {
        Self::PriceAtMost { max }
    }
}

/// Fields a query can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Sort parameter for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortParam {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortParam {
    /// Most recently created first.
    pub fn newest_first() -> Self {
        Self {
            field: SortField::CreatedAt,
            order: SortOrder::Descending,
        }
    }

    pub fn is_descending(&self) -> bool {
        self.order == SortOrder::Descending
    }
}

impl Default for SortParam {
    fn default() -> Self {
        Self::newest_first()
    }
}

/// A conjunction of filters plus an ordering.
///
/// An empty filter list matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyQuery {
    pub filters: Vec<QueryFilter>,
    pub sort: SortParam,
}

impl PropertyQuery {
    /// The unconstrained query, newest first.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_filter(mut self, filter: QueryFilter) -> Self {
        self.filters.push(filter);
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: SortParam) -> Self {
        self.sort = sort;
        self
    }

    /// Returns true if the query places no constraint on the records.
    pub fn is_unconstrained(&self) -> bool {
        self.filters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_query_is_unconstrained_and_newest_first() {
        let query = PropertyQuery::new();
        assert!(query.is_unconstrained());
        assert_eq!(query.sort.field, SortField::CreatedAt);
        assert!(query.sort.is_descending());
    }

    #[test]
    fn test_query_builder_accumulates_filters() {
        let query = PropertyQuery::new()
            .with_filter(QueryFilter::contains(TextField::Name, "villa"))
            .with_filter(QueryFilter::price_at_least(dec!(100)))
            .with_filter(QueryFilter::price_at_most(dec!(200)));

        assert_eq!(query.filters.len(), 3);
        assert!(!query.is_unconstrained());
        assert_eq!(
            query.filters[0],
            QueryFilter::Contains {
                field: TextField::Name,
                value: "villa".into()
            }
        );
    }

    #[test]
    fn test_with_sort_overrides_default() {
        let sort = SortParam {
            field: SortField::CreatedAt,
            order: SortOrder::Ascending,
        };
        let query = PropertyQuery::new().with_sort(sort);
        assert!(!query.sort.is_descending());
    }
}
