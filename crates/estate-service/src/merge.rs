use estate_core::Property;

use crate::validation::UpdatePropertyPayload;

/// Applies a sparse update onto an existing record.
///
/// Text fields are overwritten only with a non-blank value (trimmed); the
/// price only when present. Everything else, including both timestamps, is
/// carried over: storage refreshes `updated_at` on replace.
pub fn apply_update(existing: &Property, update: &UpdatePropertyPayload) -> Property {
    let mut merged = existing.clone();

    if let Some(name) = non_blank(update.name.as_deref()) {
        merged.name = name.to_string();
    }
    if let Some(address) = non_blank(update.address.as_deref()) {
        merged.address = address.to_string();
    }
    if let Some(price) = update.price {
        merged.price = price;
    }
    if let Some(image) = non_blank(update.image.as_deref()) {
        merged.image = image.to_string();
    }

    merged
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
