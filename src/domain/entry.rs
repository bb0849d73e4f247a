use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::coerce::Fields;

/// Metadata key carrying the item discriminant.
pub const ITEM_TYPE_KEY: &str = "itemType";

/// A single user-logged record from the generic entry store.
///
/// Finance items are told apart by `metadata.itemType`; everything else about
/// their shape lives in `metadata` and is read through [`Fields`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainEntry {
    pub id: Uuid,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_metadata")]
    pub metadata: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DomainEntry {
    /// Creates a fresh entry. Non-object metadata is replaced by an empty map.
    pub fn new(title: impl Into<String>, metadata: Value) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            metadata: into_object(metadata),
            created_at: now,
            updated_at: now,
        }
    }

    /// Overrides both timestamps, mostly useful for fixtures.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = created_at;
        self
    }

    /// Returns the raw `metadata.itemType` tag, if it is a string.
    pub fn item_type(&self) -> Option<&str> {
        self.metadata.get(ITEM_TYPE_KEY).and_then(Value::as_str)
    }

    pub fn fields(&self) -> Fields<'_> {
        Fields::new(&self.metadata)
    }
}

fn into_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn deserialize_metadata<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.map(into_object).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_store_payload_in_camel_case() {
        let raw = json!({
            "id": "6f1c5a52-3f0e-4d7e-9a47-4b8f2d1c9e10",
            "title": "Rent",
            "metadata": { "itemType": "bill", "amount": 1500 },
            "createdAt": "2024-03-01T08:00:00Z",
            "updatedAt": "2024-03-02T08:00:00Z"
        });
        let entry: DomainEntry = serde_json::from_value(raw).expect("valid entry");
        assert_eq!(entry.item_type(), Some("bill"));
        assert_eq!(entry.title, "Rent");
        assert!(entry.description.is_none());
    }

    #[test]
    fn null_or_scalar_metadata_becomes_empty() {
        let raw = json!({
            "id": "6f1c5a52-3f0e-4d7e-9a47-4b8f2d1c9e10",
            "title": "Odd",
            "metadata": null,
            "createdAt": "2024-03-01T08:00:00Z",
            "updatedAt": "2024-03-01T08:00:00Z"
        });
        let entry: DomainEntry = serde_json::from_value(raw).expect("valid entry");
        assert!(entry.metadata.is_empty());
        assert_eq!(entry.item_type(), None);

        let scalar = DomainEntry::new("Scalar", json!(42));
        assert!(scalar.metadata.is_empty());
    }

    #[test]
    fn non_string_item_type_is_not_a_tag() {
        let entry = DomainEntry::new("Numeric tag", json!({ "itemType": 7 }));
        assert_eq!(entry.item_type(), None);
    }
}
