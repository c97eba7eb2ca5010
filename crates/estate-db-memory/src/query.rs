use estate_core::Property;
use estate_storage::{PropertyQuery, QueryFilter, SortField, SortParam, TextField};

/// Evaluates query descriptors against in-memory records.
pub trait PropertyMatcher {
    /// Check if a property satisfies this constraint
    fn matches(&self, property: &Property) -> bool;
}

impl PropertyMatcher for QueryFilter {
    fn matches(&self, property: &Property) -> bool {
        match self {
            QueryFilter::Contains { field, value } => {
                contains_ignore_case(text_field(property, *field), value)
            }
            QueryFilter::PriceAtLeast { min } => property.price >= *min,
            QueryFilter::PriceAtMost { max } => property.price <= *max,
        }
    }
}

impl PropertyMatcher for PropertyQuery {
    fn matches(&self, property: &Property) -> bool {
        self.filters.iter().all(|filter| filter.matches(property))
    }
}

fn text_field(property: &Property, field: TextField) -> &str {
    match field {
        TextField::Name => &property.name,
        TextField::Address => &property.address,
    }
}

// Literal match: the needle carries no pattern syntax.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Orders properties in place according to `sort`.
pub fn sort_properties(properties: &mut [Property], sort: SortParam) {
    properties.sort_by(|a, b| {
        let comparison = match sort.field {
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        };

        if sort.is_descending() {
            comparison.reverse()
        } else {
            comparison
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_core::NewProperty;
    use estate_storage::SortOrder;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;
    use time::macros::datetime;
    use time::{Duration, OffsetDateTime};

    fn create_test_property(id: &str, name: &str, address: &str, price: Decimal) -> Property {
        Property::from_draft(
            id,
            NewProperty {
                owner_id: "owner-1".into(),
                name: name.into(),
                address: address.into(),
                price,
                image: "https://img.example.com/p.jpg".into(),
            },
            datetime!(2024-05-01 12:00:00 UTC),
        )
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let property = create_test_property("p-1", "Villa Serena", "Main Street 5", dec!(100));

        assert!(QueryFilter::contains(TextField::Name, "villa").matches(&property));
        assert!(QueryFilter::contains(TextField::Name, "SERENA").matches(&property));
        assert!(QueryFilter::contains(TextField::Address, "main st").matches(&property));
        assert!(!QueryFilter::contains(TextField::Name, "main").matches(&property));
    }

    #[test]
    fn test_contains_treats_pattern_characters_literally() {
        let property = create_test_property("p-1", "Loft (A)", "Unit 4.B", dec!(100));

        assert!(QueryFilter::contains(TextField::Name, "(a)").matches(&property));
        assert!(QueryFilter::contains(TextField::Address, "4.b").matches(&property));
        assert!(!QueryFilter::contains(TextField::Name, "L.ft").matches(&property));
        assert!(!QueryFilter::contains(TextField::Name, ".*").matches(&property));
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let property = create_test_property("p-1", "Flat", "Somewhere 1", dec!(150000));

        assert!(QueryFilter::price_at_least(dec!(150000)).matches(&property));
        assert!(QueryFilter::price_at_most(dec!(150000)).matches(&property));
        assert!(!QueryFilter::price_at_least(dec!(150000.01)).matches(&property));
        assert!(!QueryFilter::price_at_most(dec!(149999.99)).matches(&property));
    }

    #[test]
    fn test_query_matches_requires_every_filter() {
        let property = create_test_property("p-1", "Villa Serena", "Main Street 5", dec!(150));

        let empty = PropertyQuery::new();
        assert!(empty.matches(&property));

        let both = PropertyQuery::new()
            .with_filter(QueryFilter::contains(TextField::Name, "villa"))
            .with_filter(QueryFilter::price_at_most(dec!(200)));
        assert!(both.matches(&property));

        let one_fails = both.with_filter(QueryFilter::price_at_least(dec!(151)));
        assert!(!one_fails.matches(&property));
    }

    #[test]
    fn test_sort_properties_by_created_at() {
        let base: OffsetDateTime = datetime!(2024-05-01 12:00:00 UTC);
        let mut properties: Vec<Property> = (0..3)
            .map(|i| {
                let mut p = create_test_property(&format!("p-{i}"), "Flat", "Road 12", dec!(1));
                p.created_at = base + Duration::hours(i);
                p
            })
            .collect();

        sort_properties(&mut properties, SortParam::newest_first());
        let ids: Vec<_> = properties.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p-2", "p-1", "p-0"]);

        sort_properties(
            &mut properties,
            SortParam {
                field: SortField::CreatedAt,
                order: SortOrder::Ascending,
            },
        );
        let ids: Vec<_> = properties.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p-0", "p-1", "p-2"]);
    }
}
