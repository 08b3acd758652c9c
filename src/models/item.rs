use serde::{Deserialize, Serialize};

/// A stored record. Immutable once created; the store only ever removes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub description: String,
}

// ── Request payloads ─────────────────────────────────────────────────────────

/// Body of `POST /api/items`. Both fields are optional at the wire level so the
/// store, not serde, decides what a missing name means.
#[derive(Debug, Default, Deserialize)]
pub struct CreateItem {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CreateItem {
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            name: Some(name.into()),
            description: description.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn item_serializes_with_all_three_fields() {
        let item = Item {
            id: 1,
            name: "Test Item".to_string(),
            description: String::new(),
        };
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({ "id": 1, "name": "Test Item", "description": "" })
        );
    }

    #[test]
    fn create_payload_tolerates_missing_and_unknown_fields() {
        let payload: CreateItem =
            serde_json::from_value(json!({ "description": "x", "colour": "red" })).unwrap();
        assert!(payload.name.is_none());
        assert_eq!(payload.description.as_deref(), Some("x"));
    }

    #[test]
    fn create_payload_rejects_non_string_name() {
        assert!(serde_json::from_value::<CreateItem>(json!({ "name": 42 })).is_err());
    }
}
