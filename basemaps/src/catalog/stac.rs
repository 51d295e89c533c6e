//! JSON-backed STAC object.

use std::path::Path;

use serde_json::{Map, Value};

use super::CatalogResource;

/// Kind of STAC object, taken from its `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StacType {
    /// `"Collection"`
    Collection,
    /// `"Feature"` (a STAC item is a GeoJSON feature)
    Item,
    /// `"Catalog"` or any other declared type
    Other,
}

impl StacType {
    fn from_type_field(value: &str) -> Self {
        match value {
            "Collection" => StacType::Collection,
            "Feature" => StacType::Item,
            _ => StacType::Other,
        }
    }
}

/// A STAC document held as raw JSON.
///
/// No schema validation is performed; fields are read lazily and any shape
/// mismatch is treated as missing information.
#[derive(Debug, Clone, PartialEq)]
pub struct StacObject {
    kind: StacType,
    data: Map<String, Value>,
}

impl StacObject {
    /// Wrap a JSON value.
    ///
    /// Returns `None` unless the value is an object carrying a string `type`.
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(data) = value else {
            return None;
        };
        let kind = StacType::from_type_field(data.get("type")?.as_str()?);
        Some(Self { kind, data })
    }

    /// Parse a JSON string.
    ///
    /// Malformed JSON is an error; well-formed JSON that is not a STAC object
    /// yields `Ok(None)`.
    pub fn from_json_str(json: &str) -> Result<Option<Self>, serde_json::Error> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(value))
    }

    /// Read and parse a JSON file.
    pub fn load_from(path: &Path) -> std::io::Result<Option<Self>> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content).map_err(std::io::Error::from)
    }

    /// Kind of object.
    pub fn kind(&self) -> StacType {
        self.kind
    }

    /// The `id` field, when it is a string.
    pub fn id(&self) -> Option<&str> {
        self.data.get("id").and_then(Value::as_str)
    }
}

impl CatalogResource for StacObject {
    fn is_collection(&self) -> bool {
        self.kind == StacType::Collection
    }

    fn is_item(&self) -> bool {
        self.kind == StacType::Item
    }

    fn summaries(&self) -> Option<&Map<String, Value>> {
        self.data.get("summaries").and_then(Value::as_object)
    }

    fn properties(&self) -> Option<&Map<String, Value>> {
        self.data.get("properties").and_then(Value::as_object)
    }

    fn field(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collection_classification() {
        let stac = StacObject::from_value(json!({"type": "Collection", "id": "c1"})).unwrap();

        assert!(stac.is_collection());
        assert!(!stac.is_item());
        assert_eq!(stac.kind(), StacType::Collection);
        assert_eq!(stac.id(), Some("c1"));
    }

    #[test]
    fn test_item_classification() {
        let stac = StacObject::from_value(json!({"type": "Feature", "properties": {}})).unwrap();

        assert!(stac.is_item());
        assert!(!stac.is_collection());
        assert!(stac.properties().is_some());
    }

    #[test]
    fn test_catalog_is_neither() {
        let stac = StacObject::from_value(json!({"type": "Catalog"})).unwrap();

        assert_eq!(stac.kind(), StacType::Other);
        assert!(!stac.is_collection());
        assert!(!stac.is_item());
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(StacObject::from_value(json!([1, 2, 3])).is_none());
        assert!(StacObject::from_value(json!("Collection")).is_none());
        assert!(StacObject::from_value(Value::Null).is_none());
    }

    #[test]
    fn test_object_without_type_is_rejected() {
        assert!(StacObject::from_value(json!({"id": "x"})).is_none());
        assert!(StacObject::from_value(json!({"type": 3})).is_none());
    }

    #[test]
    fn test_summaries_must_be_object() {
        let stac =
            StacObject::from_value(json!({"type": "Collection", "summaries": [1]})).unwrap();
        assert!(stac.summaries().is_none());
    }

    #[test]
    fn test_from_json_str_malformed() {
        assert!(StacObject::from_json_str("{not json").is_err());
        assert!(StacObject::from_json_str("42").unwrap().is_none());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("item.json");
        std::fs::write(&path, r#"{"type": "Feature", "id": "i1", "properties": {}}"#).unwrap();

        let stac = StacObject::load_from(&path).unwrap().unwrap();
        assert_eq!(stac.id(), Some("i1"));
    }
}
