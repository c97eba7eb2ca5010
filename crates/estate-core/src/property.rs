use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A property listing as stored in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Identifier assigned by storage on insert.
    pub id: String,
    /// Opaque reference to the owner.
    pub owner_id: String,
    pub name: String,
    pub address: String,
    pub price: Decimal,
    /// URL of the display image.
    pub image: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Property {
    /// Builds a stored record from a draft, an assigned id and a creation instant.
    pub fn from_draft(id: impl Into<String>, draft: NewProperty, now: OffsetDateTime) -> Self {
        Self {
            id: id.into(),
            owner_id: draft.owner_id,
            name: draft.name,
            address: draft.address,
            price: draft.price,
            image: draft.image,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns a copy with `updated_at` set to `now`.
    #[must_use]
    pub fn touched(mut self, now: OffsetDateTime) -> Self {
        self.updated_at = now;
        self
    }
}

/// A property that has not been stored yet: no id, no timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub owner_id: String,
    pub name: String,
    pub address: String,
    pub price: Decimal,
    pub image: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;
    use time::macros::datetime;

    fn draft() -> NewProperty {
        NewProperty {
            owner_id: "owner-1".into(),
            name: "Casa Azul".into(),
            address: "Calle 10 #20-30".into(),
            price: dec!(150000),
            image: "https://img.example.com/1.jpg".into(),
        }
    }

    #[test]
    fn test_from_draft_sets_equal_timestamps() {
        let now = datetime!(2024-01-01 00:00:00 UTC);
        let property = Property::from_draft("p-1", draft(), now);
        assert_eq!(property.id, "p-1");
        assert_eq!(property.created_at, property.updated_at);
        assert_eq!(property.price, dec!(150000));
    }

    #[test]
    fn test_touched_only_changes_updated_at() {
        let created = datetime!(2024-01-01 00:00:00 UTC);
        let later = datetime!(2024-01-02 00:00:00 UTC);
        let property = Property::from_draft("p-1", draft(), created).touched(later);
        assert_eq!(property.created_at, created);
        assert_eq!(property.updated_at, later);
    }

    #[test]
    fn test_serializes_camel_case_with_rfc3339() {
        let property = Property::from_draft("p-1", draft(), datetime!(2024-01-01 00:00:00 UTC));
        let value = serde_json::to_value(&property).unwrap();
        assert_eq!(value["ownerId"], json!("owner-1"));
        assert_eq!(value["createdAt"], json!("2024-01-01T00:00:00Z"));
        let back: Property = serde_json::from_value(value).unwrap();
        assert_eq!(back, property);
    }
}
