//! Document assembly - the per-target envelope around a walked schema.

use serde_json::{json, Map, Value};

use crate::dialect::{flatten_mongo32, DRAFT4_SCHEMA_URI};
use crate::error::ConvertError;
use crate::types::Target;

/// Wrap the walked `root` for `target`.
///
/// `definitions` holds the shared definitions reached during the walk; only
/// draft-4 output has a place for them and they are omitted when empty.
///
/// # Errors
///
/// Returns `ConvertError::UnsupportedType` if the mongo32 flattening fails.
pub fn assemble(
    target: Target,
    root: Map<String, Value>,
    definitions: Map<String, Value>,
) -> Result<Value, ConvertError> {
    match target {
        Target::Draft4 => {
            let mut document = Map::new();
            document.insert(
                "$schema".to_string(),
                Value::String(DRAFT4_SCHEMA_URI.to_string()),
            );
            if !definitions.is_empty() {
                document.insert("definitions".to_string(), Value::Object(definitions));
            }
            document.extend(root);
            Ok(Value::Object(document))
        }
        Target::Mongo36 => Ok(json!({ "$jsonSchema": root })),
        Target::Mongo32 => flatten_mongo32(&root),
    }
}
