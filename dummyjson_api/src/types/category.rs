use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A product category as listed by `/products/categories`.
///
/// Only `slug` is required; the live API sends `slug`, `name` and `url`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Category {
    #[serde(default)]
    pub id: Option<i64>,

    /// URL-safe identifier, used as the category key everywhere else.
    pub slug: String,

    /// Display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Listing URL for this category on the remote source.
    #[serde(default)]
    pub url: Option<String>,
}

impl Category {
    /// Builds a category from one element of the categories array.
    ///
    /// Returns `None` unless the element is an object with a string `slug`.
    /// The remaining fields are read leniently: a field of the wrong type is
    /// treated as absent instead of rejecting the entry.
    pub fn from_entry(entry: &Value) -> Option<Self> {
        let object = entry.as_object()?;
        let slug = object.get("slug")?.as_str()?.to_string();
        Some(Self {
            id: object.get("id").and_then(Value::as_i64),
            slug,
            name: object
                .get("name")
                .and_then(Value::as_str)
                .map(str::to_string),
            url: object
                .get("url")
                .and_then(Value::as_str)
                .map(str::to_string),
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Category;

    #[test]
    fn entry_with_slug_is_kept() {
        let entry = json!({"id": 1, "slug": "smartphones", "name": "Smartphones"});
        let category = Category::from_entry(&entry).unwrap();
        assert_eq!(category.slug, "smartphones");
        assert_eq!(category.id, Some(1));
        assert_eq!(category.name.as_deref(), Some("Smartphones"));
        assert_eq!(category.url, None);
    }

    #[test]
    fn entries_without_string_slug_are_rejected() {
        assert!(Category::from_entry(&json!("smartphones")).is_none());
        assert!(Category::from_entry(&json!(null)).is_none());
        assert!(Category::from_entry(&json!({"name": "Laptops"})).is_none());
        assert!(Category::from_entry(&json!({"slug": 42})).is_none());
        assert!(Category::from_entry(&json!([{"slug": "nested"}])).is_none());
    }

    #[test]
    fn mistyped_optional_fields_are_dropped() {
        let entry = json!({"id": "seven", "slug": "tablets", "name": 3});
        let category = Category::from_entry(&entry).unwrap();
        assert_eq!(category.slug, "tablets");
        assert_eq!(category.id, None);
        assert_eq!(category.name, None);
    }
}
