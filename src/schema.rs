//! Schema list loading and validation.
//!
//! The input is a JSON document of class definitions, either an array or a
//! keyed object. Each entry may carry an `@id`, an `@inherits` tag naming
//! its category, and an `@metadata` object. Only entries whose metadata
//! holds the definition record under [`DEFINITION_KEY`] produce output;
//! everything else (context blocks, abstract base classes, documentation
//! entries) is skipped.

use std::{path::Path, str::FromStr};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{Error, Result, SourceContext};

/// Key under `@metadata` holding the generator's definition record.
pub const DEFINITION_KEY: &str = "https://terminusdb.com";

/// One operator definition, validated and ready for emission.
#[derive(Debug, Clone)]
pub struct Operator {
    /// Class identifier, used as the discriminant literal and type name.
    pub id: String,
    /// Category this operator belongs to, when tagged.
    pub inherits: Option<String>,
    /// Field names in declaration order.
    pub fields: Vec<String>,
    /// Type tokens, positionally paired with `fields`.
    pub types: Vec<String>,
}

impl Operator {
    /// Whether this operator belongs to the named category.
    pub fn in_category(&self, category: &str) -> bool {
        self.inherits.as_deref() == Some(category)
    }
}

/// The loaded schema list, in file order.
#[derive(Debug, Clone)]
pub struct Schema {
    operators: Vec<Operator>,
}

impl Schema {
    /// Parse the schema list from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::io(path.to_path_buf(), e))?;
        parse_schema(&content, &path.display().to_string())
    }

    /// Operators in schema-file order.
    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }
}

impl FromStr for Schema {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_schema(s, "woql_list.json")
    }
}

/// Raw document shape: an array of entries, or an object keyed by
/// arbitrary names. Object member order is preserved.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Document {
    List(Vec<SchemaEntry>),
    Keyed(IndexMap<String, SchemaEntry>),
}

impl Document {
    fn entries(&self) -> Vec<(String, &SchemaEntry)> {
        match self {
            Self::List(items) => items
                .iter()
                .enumerate()
                .map(|(idx, entry)| (idx.to_string(), entry))
                .collect(),
            Self::Keyed(map) => map
                .iter()
                .map(|(key, entry)| (key.clone(), entry))
                .collect(),
        }
    }
}

/// Raw schema entry as it appears in the file. Unrelated keys such as
/// `@type`, `@key`, or `@documentation` are ignored.
#[derive(Debug, Deserialize)]
struct SchemaEntry {
    #[serde(rename = "@id")]
    id: Option<String>,
    #[serde(rename = "@inherits")]
    inherits: Option<String>,
    #[serde(rename = "@metadata")]
    metadata: Option<Metadata>,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    #[serde(rename = "https://terminusdb.com")]
    definition: Option<DefinitionRecord>,
}

/// The `fields`/`types` record the generator consumes.
#[derive(Debug, Deserialize)]
struct DefinitionRecord {
    fields: Vec<String>,
    types: Vec<String>,
}

/// Parse a schema list from content with the given filename for error
/// reporting.
pub fn parse_schema(content: &str, filename: &str) -> Result<Schema> {
    let ctx = SourceContext::new(content, filename);
    let document: Document =
        serde_json::from_str(content).map_err(|e| ctx.parse_error(e))?;

    let mut operators = Vec::new();
    for (key, entry) in document.entries() {
        let Some(record) = entry.metadata.as_ref().and_then(|m| m.definition.as_ref()) else {
            continue;
        };
        let Some(id) = entry.id.as_deref() else {
            return Err(ctx.schema_error(format!(
                "entry '{key}' has a definition record but no '@id'"
            )));
        };
        if record.fields.len() != record.types.len() {
            return Err(ctx.schema_error(format!(
                "'{id}' declares {} fields but {} types; the two lists must pair up",
                record.fields.len(),
                record.types.len()
            )));
        }
        operators.push(Operator {
            id: id.to_string(),
            inherits: entry.inherits.clone(),
            fields: record.fields.clone(),
            types: record.types.clone(),
        });
    }

    Ok(Schema { operators })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_an_array_document() {
        let schema: Schema = r#"[
            {
                "@id": "Not",
                "@inherits": "Query",
                "@metadata": {
                    "https://terminusdb.com": {
                        "fields": ["query"],
                        "types": ["query"]
                    }
                }
            }
        ]"#
        .parse()
        .unwrap();

        assert_eq!(schema.operators().len(), 1);
        let op = &schema.operators()[0];
        assert_eq!(op.id, "Not");
        assert_eq!(op.inherits.as_deref(), Some("Query"));
        assert_eq!(op.fields, ["query"]);
        assert_eq!(op.types, ["query"]);
        assert!(op.in_category("Query"));
        assert!(!op.in_category("PathPattern"));
    }

    #[test]
    fn test_keyed_document_preserves_member_order() {
        let schema: Schema = r#"{
            "zeta": {
                "@id": "Zeta",
                "@metadata": {
                    "https://terminusdb.com": { "fields": [], "types": [] }
                }
            },
            "alpha": {
                "@id": "Alpha",
                "@metadata": {
                    "https://terminusdb.com": { "fields": [], "types": [] }
                }
            }
        }"#
        .parse()
        .unwrap();

        let ids: Vec<&str> = schema.operators().iter().map(|op| op.id.as_str()).collect();
        assert_eq!(ids, ["Zeta", "Alpha"]);
    }

    #[test]
    fn test_entries_without_a_definition_record_are_skipped() {
        let schema: Schema = r#"[
            { "@type": "@context", "@base": "terminusdb://woql/data/" },
            { "@id": "Query", "@abstract": [] },
            { "@id": "Annotated", "@metadata": { "https://example.com": {} } },
            {
                "@id": "Not",
                "@inherits": "Query",
                "@metadata": {
                    "https://terminusdb.com": { "fields": ["query"], "types": ["query"] }
                }
            }
        ]"#
        .parse()
        .unwrap();

        assert_eq!(schema.operators().len(), 1);
        assert_eq!(schema.operators()[0].id, "Not");
    }

    #[test]
    fn test_length_mismatch_is_a_schema_error() {
        let err = r#"[
            {
                "@id": "Triple",
                "@inherits": "Query",
                "@metadata": {
                    "https://terminusdb.com": {
                        "fields": ["subject", "predicate", "object"],
                        "types": ["node", "node"]
                    }
                }
            }
        ]"#
        .parse::<Schema>()
        .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("Triple"));
        assert!(message.contains("3 fields"));
        assert!(message.contains("2 types"));
    }

    #[test]
    fn test_definition_record_without_id_is_a_schema_error() {
        let err = r#"{
            "stray": {
                "@metadata": {
                    "https://terminusdb.com": { "fields": [], "types": [] }
                }
            }
        }"#
        .parse::<Schema>()
        .unwrap_err();

        assert!(err.to_string().contains("stray"));
        assert!(err.to_string().contains("'@id'"));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let err = "[ { ".parse::<Schema>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = Schema::from_file("does/not/exist/woql_list.json").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
