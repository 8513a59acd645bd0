//! Dialect emitters - per-target keyword vocabulary.
//!
//! Each [`Target`] answers the same questions for the walker: what the type
//! keyword is called, how a type name is spelled, whether shared definitions
//! can be referenced, and which keywords it cannot express.

use serde_json::{json, Map, Value};

use crate::error::{display_path, ConvertError};
use crate::types::{is_json_schema_type, Target};

/// Meta-schema URI written into draft-4 output.
pub const DRAFT4_SCHEMA_URI: &str = "http://json-schema.org/draft-04/schema#";

/// Prefix of a reference into the shared `definitions` table.
pub const DEFINITIONS_POINTER: &str = "#/definitions/";

/// Type names MongoDB accepts in `bsonType` and `$type`.
pub const MONGO_BSON_TYPES: &[&str] = &[
    "double",
    "string",
    "object",
    "array",
    "binData",
    "objectId",
    "bool",
    "date",
    "null",
    "regex",
    "javascript",
    "int",
    "timestamp",
    "long",
    "decimal",
    "minKey",
    "maxKey",
    "number",
];

/// BSON numeric names that draft-4 output spells as `number`.
const DRAFT4_NUMERIC_ALIASES: &[&str] = &["double", "int", "long", "decimal"];

/// Keywords MongoDB's `$jsonSchema` rejects.
const MONGO_UNSUPPORTED_KEYWORDS: &[&str] =
    &["$ref", "$schema", "default", "definitions", "format", "id"];

/// Keywords that give a property a nested shape.
const NESTED_KEYWORDS: &[&str] = &[
    "properties",
    "patternProperties",
    "additionalProperties",
    "dependencies",
    "items",
    "additionalItems",
    "anyOf",
    "oneOf",
    "allOf",
    "not",
];

impl Target {
    /// Keyword carrying the type tag in output.
    pub fn type_keyword(&self) -> &'static str {
        match self {
            Target::Draft4 => "type",
            Target::Mongo36 | Target::Mongo32 => "bsonType",
        }
    }

    /// Whether custom types become `$ref`s into a shared table.
    ///
    /// Targets without references have every definition inlined.
    pub fn supports_references(&self) -> bool {
        matches!(self, Target::Draft4)
    }

    /// Spell a primitive or native type name for this target.
    ///
    /// Returns `None` if the target has no built-in notion of `name`; the
    /// caller then treats it as unknown.
    pub fn emit_type<'a>(&self, name: &'a str) -> Option<&'a str> {
        match self {
            Target::Draft4 => {
                if is_json_schema_type(name) {
                    Some(name)
                } else if DRAFT4_NUMERIC_ALIASES.contains(&name) {
                    Some("number")
                } else {
                    None
                }
            }
            Target::Mongo36 | Target::Mongo32 => match name {
                "integer" => Some("int"),
                "boolean" => Some("bool"),
                _ if is_json_schema_type(name) || MONGO_BSON_TYPES.contains(&name) => Some(name),
                _ => None,
            },
        }
    }

    /// Returns true if a schema keyword cannot appear in this target's output.
    pub fn rejects_keyword(&self, keyword: &str) -> bool {
        match self {
            Target::Draft4 => false,
            Target::Mongo36 | Target::Mongo32 => MONGO_UNSUPPORTED_KEYWORDS.contains(&keyword),
        }
    }
}

/// Escape one JSON-pointer segment (`~` as `~0`, `/` as `~1`).
pub(crate) fn escape_segment(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

/// Build a `$ref` to the shared definition `name`, optionally pointing
/// further into it with an already escaped `tail` such as `/properties/b`.
pub fn definition_ref(name: &str, tail: &str) -> Map<String, Value> {
    let mut reference = Map::new();
    reference.insert(
        "$ref".to_string(),
        Value::String(format!(
            "{}{}{}",
            DEFINITIONS_POINTER,
            escape_segment(name),
            tail
        )),
    );
    reference
}

/// Split a local `#/definitions/<name>...` reference into the unescaped
/// definition name and the remaining pointer (empty for the whole definition).
///
/// Returns `None` for any other reference (external files, other pointers).
pub fn parse_definition_ref(reference: &str) -> Option<(String, String)> {
    let rest = reference.strip_prefix(DEFINITIONS_POINTER)?;
    let (head, tail) = match rest.find('/') {
        Some(i) => rest.split_at(i),
        None => (rest, ""),
    };
    if head.is_empty() {
        return None;
    }
    Some((head.replace("~1", "/").replace("~0", "~"), tail.to_string()))
}

/// Flatten a walked root schema into MongoDB 3.2 query operators.
///
/// The root must describe an object through flat `properties` only. Each
/// property becomes `{"$type", "$regex", "$in"}` as far as it declares them. A required property with none of these gets
/// `"$exists": true`; an optional one is left out. Properties with a nested
/// shape cannot be expressed and fail the conversion.
pub fn flatten_mongo32(root: &Map<String, Value>) -> Result<Value, ConvertError> {
    if let Some(tag) = root.get("bsonType").filter(|t| t.as_str() != Some("object")) {
        return Err(unsupported_mongo32(
            "/type",
            format!("root must be an object, not {}", tag),
        ));
    }
    if let Some(keyword) = NESTED_KEYWORDS
        .iter()
        .filter(|k| **k != "properties")
        .find(|k| is_nested(root, k))
    {
        return Err(unsupported_mongo32(
            &format!("/{}", keyword),
            format!("top-level \"{}\" is not supported, only flat properties", keyword),
        ));
    }

    let required: Vec<&str> = root
        .get("required")
        .and_then(Value::as_array)
        .map(|arr| arr.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut result = Map::new();

    if let Some(props) = root.get("properties").and_then(Value::as_object) {
        for (name, prop) in props {
            let path = format!("/properties/{}", escape_segment(name));
            let Some(prop) = prop.as_object() else {
                return Err(ConvertError::invalid_schema(&path, "expected object"));
            };

            if let Some(keyword) = NESTED_KEYWORDS.iter().find(|k| is_nested(prop, k)) {
                return Err(unsupported_mongo32(
                    &path,
                    format!("nested \"{}\" is not supported, only flat properties", keyword),
                ));
            }

            let mut operators = Map::new();
            if let Some(tag) = prop.get("bsonType") {
                operators.insert("$type".to_string(), tag.clone());
            }
            if let Some(pattern) = prop.get("pattern") {
                operators.insert("$regex".to_string(), pattern.clone());
            }
            if let Some(values) = prop.get("enum") {
                operators.insert("$in".to_string(), values.clone());
            }
            if operators.is_empty() && required.contains(&name.as_str()) {
                operators.insert("$exists".to_string(), Value::Bool(true));
            }

            if !operators.is_empty() {
                result.insert(name.clone(), Value::Object(operators));
            }
        }
    }

    // Required names without a property schema still have to exist
    for name in required {
        if !result.contains_key(name) {
            result.insert(name.to_string(), json!({ "$exists": true }));
        }
    }

    Ok(Value::Object(result))
}

/// Boolean `additionalProperties`/`additionalItems` do not nest a schema.
fn is_nested(prop: &Map<String, Value>, keyword: &str) -> bool {
    match prop.get(keyword) {
        Some(Value::Bool(_)) => !keyword.starts_with("additional"),
        Some(_) => true,
        None => false,
    }
}

fn unsupported_mongo32(path: &str, reason: String) -> ConvertError {
    ConvertError::UnsupportedType {
        target: Target::Mongo32,
        path: display_path(path),
        reason,
    }
}
