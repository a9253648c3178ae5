use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Category;

/// A single checklist entry.
///
/// The serde shape is the on-disk snapshot format; field names are part of
/// the persisted contract (`created_at` serializes as `createdAt`). Unknown
/// fields in a stored record are ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u64,
    pub text: String,
    pub category: Category,
    pub purchased: bool,
    pub quantity: u32,
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn new(id: u64, text: impl Into<String>, category: Category, quantity: u32) -> Self {
        Self {
            id,
            text: text.into(),
            category,
            purchased: false,
            quantity,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_defaults() {
        let item = Item::new(1, "Milk", Category::Dairy, 2);
        assert_eq!(item.id, 1);
        assert_eq!(item.text, "Milk");
        assert_eq!(item.category, Category::Dairy);
        assert!(!item.purchased);
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn test_serializes_created_at_as_camel_case() {
        let item = Item::new(1, "Milk", Category::Dairy, 1);
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("\"created_at\""));
    }

    #[test]
    fn test_serde_round_trip() {
        let item = Item::new(42, "Wood screws", Category::Hardware, 3);
        let json = serde_json::to_string(&item).unwrap();
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{
            "id": 7,
            "text": "Milk",
            "category": "Dairy",
            "purchased": false,
            "quantity": 1,
            "createdAt": "2024-01-15T10:30:00Z",
            "note": "half gallon",
            "pinned": true
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.category, Category::Dairy);
    }

    #[test]
    fn test_unrecognized_category_loads_as_other() {
        let json = r#"{
            "id": 7,
            "text": "Mystery",
            "category": "Delicatessen",
            "purchased": false,
            "quantity": 1,
            "createdAt": "2024-01-15T10:30:00Z"
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.category, Category::Other);
    }
}
