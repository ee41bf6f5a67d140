//! Inferred schema and statistics

use serde::{Deserialize, Serialize};

use super::types::DataType;

/// A named, typed column of an inferred schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaField {
    /// Column name
    pub name: String,
    /// Inferred type, never `Null`
    pub data_type: DataType,
    /// Always true; inference tracks type, not null presence
    pub nullable: bool,
}

impl SchemaField {
    /// Create a nullable field
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: true,
        }
    }
}

/// Statistics from schema inference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceStats {
    /// Rows folded into the result
    pub records_processed: usize,
    /// Columns inferred before pairing with the header
    pub columns_inferred: usize,
    /// Header names supplied
    pub header_names: usize,
}

/// Complete inferred schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferredSchema {
    /// Fields in column order
    pub fields: Vec<SchemaField>,
    /// Inference statistics
    pub stats: InferenceStats,
    /// Non-fatal issues, such as names or columns dropped while pairing
    /// the header with the inferred columns
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl InferredSchema {
    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field types in column order
    pub fn data_types(&self) -> Vec<DataType> {
        self.fields.iter().map(|f| f.data_type).collect()
    }

    /// Convert to JSON Schema format
    pub fn to_json_schema(&self) -> serde_json::Value {
        let mut props = serde_json::Map::new();
        for field in &self.fields {
            let json_type = field.data_type.json_schema_type();
            let type_value = if field.nullable {
                serde_json::json!([json_type, "null"])
            } else {
                serde_json::json!(json_type)
            };
            props.insert(
                field.name.clone(),
                serde_json::json!({
                    "type": type_value,
                    "x-inferredType": field.data_type.type_name(),
                }),
            );
        }

        serde_json::json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "type": "object",
            "properties": serde_json::Value::Object(props),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InferredSchema {
        InferredSchema {
            fields: vec![
                SchemaField::new("id", DataType::Long),
                SchemaField::new("price", DataType::Double),
                SchemaField::new("label", DataType::String),
            ],
            stats: InferenceStats {
                records_processed: 3,
                columns_inferred: 3,
                header_names: 3,
            },
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_field_lookup() {
        let schema = sample();
        assert_eq!(schema.len(), 3);
        assert_eq!(schema.field("price").unwrap().data_type, DataType::Double);
        assert!(schema.field("missing").is_none());
        assert!(schema.fields.iter().all(|f| f.nullable));
    }

    #[test]
    fn test_schema_to_json_schema() {
        let json_schema = sample().to_json_schema();
        assert_eq!(json_schema["type"], "object");
        assert_eq!(
            json_schema["properties"]["id"]["type"],
            serde_json::json!(["integer", "null"])
        );
        assert_eq!(
            json_schema["properties"]["price"]["type"],
            serde_json::json!(["number", "null"])
        );
        assert_eq!(json_schema["properties"]["label"]["x-inferredType"], "string");
    }

    #[test]
    fn test_serialize_skips_empty_warnings() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("warnings").is_none());
        assert_eq!(json["fields"][0]["dataType"], "long");
        assert_eq!(json["stats"]["recordsProcessed"], 3);
    }
}
