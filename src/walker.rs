//! Schema walking - resolves custom types and rewrites keywords for a target.

use serde_json::{Map, Value};

use crate::assembler::assemble;
use crate::catalog::builtin_definitions;
use crate::dialect::{definition_ref, escape_segment, parse_definition_ref};
use crate::error::{display_path, ConvertError};
use crate::registry::{DefinitionSource, Registry, DEFINITION_KEYS};
use crate::tracker::ReferenceTracker;
use crate::types::{is_json_schema_type, json_type_name, ConvertOptions, Family, Target};

/// Keywords that together describe an object's members.
const OBJECT_SHAPE_KEYWORDS: &[&str] = &[
    "properties",
    "patternProperties",
    "required",
    "additionalProperties",
];

/// Convert an extended schema document into the target dialect.
///
/// Definitions are merged from the built-in catalog (unless disabled),
/// `options.sources` in order, and finally the document's own `definitions`
/// and `alt_definitions`.
///
/// # Errors
///
/// Returns `ConvertError::UnknownType` for a type name no source defines,
/// `ConvertError::UnsupportedType` for constructs the target cannot express,
/// and `ConvertError::InvalidSchema` for malformed nodes.
pub fn convert(schema: &Value, options: &ConvertOptions) -> Result<Value, ConvertError> {
    let Some(document) = schema.as_object() else {
        return Err(ConvertError::invalid_schema(
            "",
            format!("expected object, got {}", json_type_name(schema)),
        ));
    };

    let builtin = if options.builtins {
        Some(builtin_definitions()?)
    } else {
        None
    };
    let embedded = DefinitionSource::from_value(schema)?;
    let registry = Registry::merge(
        builtin
            .iter()
            .chain(options.sources.iter())
            .chain(std::iter::once(&embedded)),
    );
    tracing::debug!(
        dialect = %options.target,
        definitions = registry.len(),
        "converting schema"
    );

    // Definition tables feed the registry and $schema belongs to the envelope
    let body: Map<String, Value> = document
        .iter()
        .filter(|(k, _)| !DEFINITION_KEYS.contains(&k.as_str()) && k.as_str() != "$schema")
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    let mut walker = Walker::new(&registry, options.target);
    let root = walker.walk_node(&body, "")?;
    assemble(options.target, root, walker.definitions)
}

struct Walker<'a> {
    registry: &'a Registry,
    target: Target,
    family: Family,
    tracker: ReferenceTracker,
    /// Shared definitions reached so far, in first-reference order.
    definitions: Map<String, Value>,
}

impl<'a> Walker<'a> {
    fn new(registry: &'a Registry, target: Target) -> Self {
        Self {
            registry,
            target,
            family: target.family(),
            tracker: ReferenceTracker::new(),
            definitions: Map::new(),
        }
    }

    fn walk_value(&mut self, value: &Value, path: &str) -> Result<Value, ConvertError> {
        match value {
            Value::Object(map) => Ok(Value::Object(self.walk_node(map, path)?)),
            other => Err(ConvertError::invalid_schema(
                path,
                format!("expected schema object, got {}", json_type_name(other)),
            )),
        }
    }

    fn walk_node(
        &mut self,
        map: &Map<String, Value>,
        path: &str,
    ) -> Result<Map<String, Value>, ConvertError> {
        let mut result = Map::new();

        for (key, value) in map {
            let child_path = format!("{}/{}", path, escape_segment(key));

            match key.as_str() {
                "type" => {
                    let resolved = self.resolve_type(value, &child_path)?;
                    self.splice(&mut result, resolved, map);
                }
                "$ref" => match value.as_str().and_then(parse_definition_ref) {
                    Some((name, tail)) => {
                        let resolved = self.resolve_reference(&name, &tail, &child_path)?;
                        self.splice(&mut result, resolved, map);
                    }
                    None => {
                        self.check_keyword(key, &child_path)?;
                        result.insert(key.clone(), value.clone());
                    }
                },
                "properties" | "patternProperties" | "definitions" => {
                    self.check_keyword(key, &child_path)?;
                    let resolved = self.walk_schema_map(value, &child_path)?;
                    result.insert(key.clone(), resolved);
                }
                "items" => {
                    // Single schema or tuple form
                    let resolved = match value {
                        Value::Array(arr) => self.walk_array(arr, &child_path)?,
                        other => self.walk_value(other, &child_path)?,
                    };
                    result.insert(key.clone(), resolved);
                }
                "additionalProperties" | "additionalItems" => {
                    // Boolean form is kept as-is
                    let resolved = if value.is_object() {
                        self.walk_value(value, &child_path)?
                    } else {
                        value.clone()
                    };
                    result.insert(key.clone(), resolved);
                }
                "allOf" | "anyOf" | "oneOf" => {
                    let Some(arr) = value.as_array() else {
                        return Err(ConvertError::invalid_schema(
                            &child_path,
                            format!("expected array, got {}", json_type_name(value)),
                        ));
                    };
                    let resolved = self.walk_array(arr, &child_path)?;
                    result.insert(key.clone(), resolved);
                }
                "not" => {
                    let resolved = self.walk_value(value, &child_path)?;
                    result.insert(key.clone(), resolved);
                }
                "dependencies" => {
                    let resolved = self.walk_dependencies(value, &child_path)?;
                    result.insert(key.clone(), resolved);
                }
                _ => {
                    // enum, default, pattern, ... are data, not schemas
                    self.check_keyword(key, &child_path)?;
                    result.insert(key.clone(), value.clone());
                }
            }
        }

        Ok(result)
    }

    /// Merge resolved type keywords into `result` at the current position.
    ///
    /// A keyword the node spells out itself wins over the definition's. The
    /// object-shape keywords are replaced as a group: once the node declares
    /// any of them, none of the definition's are kept.
    fn splice(
        &self,
        result: &mut Map<String, Value>,
        resolved: Map<String, Value>,
        node: &Map<String, Value>,
    ) {
        let tag = self.target.type_keyword();
        let reshaped = OBJECT_SHAPE_KEYWORDS.iter().any(|k| node.contains_key(*k));
        for (key, value) in resolved {
            let owned = key == tag || key == "type" || key == "$ref";
            let overridden = node.contains_key(&key)
                || (reshaped && OBJECT_SHAPE_KEYWORDS.contains(&key.as_str()));
            if owned || !overridden {
                result.insert(key, value);
            }
        }
    }

    fn resolve_type(
        &mut self,
        value: &Value,
        path: &str,
    ) -> Result<Map<String, Value>, ConvertError> {
        let name = match value {
            Value::String(s) => s,
            Value::Array(_) => {
                return Err(ConvertError::invalid_schema(
                    path,
                    "type arrays are not supported, use anyOf",
                ))
            }
            other => {
                return Err(ConvertError::invalid_schema(
                    path,
                    format!("expected string, got {}", json_type_name(other)),
                ))
            }
        };

        if is_json_schema_type(name) {
            return Ok(self.tag(name));
        }
        self.resolve_named(name, path)
    }

    /// Resolve a custom type name: definitions first, then the target's
    /// native type names.
    fn resolve_named(
        &mut self,
        name: &str,
        path: &str,
    ) -> Result<Map<String, Value>, ConvertError> {
        let registry = self.registry;
        if let Some(definition) = registry.lookup(name, Some(self.family)) {
            return if self.target.supports_references() {
                self.reference(name, definition)
            } else {
                self.expand(name, definition)
            };
        }

        if self.target.emit_type(name).is_some() {
            return Ok(self.tag(name));
        }

        Err(ConvertError::UnknownType {
            name: name.to_string(),
            path: display_path(path),
        })
    }

    /// Resolve a local `#/definitions/<name>...` reference.
    ///
    /// A reference to a whole definition is handled like `"type": "<name>"`.
    /// A deeper pointer keeps its tail: draft-4 emits the definition and
    /// points into it, inlining targets walk the addressed sub-schema.
    fn resolve_reference(
        &mut self,
        name: &str,
        tail: &str,
        path: &str,
    ) -> Result<Map<String, Value>, ConvertError> {
        let registry = self.registry;
        let Some(definition) = registry.lookup(name, Some(self.family)) else {
            return Err(ConvertError::UnknownType {
                name: name.to_string(),
                path: display_path(path),
            });
        };
        if tail.is_empty() {
            return self.resolve_named(name, path);
        }

        let Some(target) = definition.pointer(tail) else {
            return Err(ConvertError::invalid_schema(
                path,
                format!("\"{}\" does not exist in definition \"{}\"", tail, name),
            ));
        };

        if self.target.supports_references() {
            self.reference(name, definition)?;
            return Ok(definition_ref(name, tail));
        }

        // Sub-schemas are tracked by their full pointer
        let key = format!("{}{}", escape_segment(name), tail);
        let outcome = match self.tracker.enter(&key) {
            Ok(()) => {
                let sub_path = format!("/definitions/{}", key);
                match target {
                    Value::Object(map) => self.walk_node(map, &sub_path),
                    other => Err(ConvertError::invalid_schema(
                        &sub_path,
                        format!("expected schema object, got {}", json_type_name(other)),
                    )),
                }
            }
            Err(_) => Ok(self.truncate(target)),
        };
        self.tracker.leave(&key);
        outcome
    }

    /// Register `name` in the shared table on first use and return a `$ref`.
    fn reference(
        &mut self,
        name: &str,
        definition: &Value,
    ) -> Result<Map<String, Value>, ConvertError> {
        if !self.definitions.contains_key(name) {
            // Reserve the slot so entries keep first-reference order
            self.definitions.insert(name.to_string(), Value::Null);
            let expanded = self.expand(name, definition)?;
            self.definitions
                .insert(name.to_string(), Value::Object(expanded));
        }
        Ok(definition_ref(name, ""))
    }

    /// Walk a definition body with `name` open on the resolution path.
    fn expand(
        &mut self,
        name: &str,
        definition: &Value,
    ) -> Result<Map<String, Value>, ConvertError> {
        let outcome = match self.tracker.enter(name) {
            Ok(()) => {
                tracing::trace!(
                    definition = %name,
                    depth = self.tracker.depth(),
                    "expanding definition"
                );
                let def_path = format!("/definitions/{}", escape_segment(name));
                match definition {
                    Value::Object(map) => self.walk_node(map, &def_path),
                    other => Err(ConvertError::invalid_schema(
                        &def_path,
                        format!("expected schema object, got {}", json_type_name(other)),
                    )),
                }
            }
            Err(cycle) => {
                tracing::debug!(
                    definition = %cycle.name,
                    path = ?self.tracker.path(),
                    "recursive definition truncated"
                );
                Ok(self.truncate(definition))
            }
        };
        self.tracker.leave(name);
        outcome
    }

    /// Primitive approximation of a definition: only its structural type tag.
    ///
    /// Aliases (`"type": "otherCustomType"`) are followed without expanding
    /// anything. A definition without a resolvable tag becomes `{}`.
    fn truncate(&self, definition: &Value) -> Map<String, Value> {
        let registry = self.registry;
        let mut seen: Vec<&str> = Vec::new();
        let mut current = definition;

        loop {
            let Some(declared) = current.get("type").and_then(Value::as_str) else {
                return Map::new();
            };

            if !is_json_schema_type(declared) && !seen.contains(&declared) {
                if let Some(next) = registry.lookup(declared, Some(self.family)) {
                    seen.push(declared);
                    current = next;
                    continue;
                }
            }

            return match self.target.emit_type(declared) {
                Some(_) => self.tag(declared),
                None => Map::new(),
            };
        }
    }

    fn tag(&self, name: &str) -> Map<String, Value> {
        let spelled = self.target.emit_type(name).unwrap_or(name);
        let mut map = Map::new();
        map.insert(
            self.target.type_keyword().to_string(),
            Value::String(spelled.to_string()),
        );
        map
    }

    fn check_keyword(&self, key: &str, path: &str) -> Result<(), ConvertError> {
        if self.target.rejects_keyword(key) {
            return Err(ConvertError::UnsupportedType {
                target: self.target,
                path: display_path(path),
                reason: format!("keyword \"{}\" is not supported", key),
            });
        }
        Ok(())
    }

    fn walk_schema_map(&mut self, value: &Value, path: &str) -> Result<Value, ConvertError> {
        let Some(schemas) = value.as_object() else {
            return Err(ConvertError::invalid_schema(
                path,
                format!("expected object, got {}", json_type_name(value)),
            ));
        };

        let mut result = Map::new();
        for (name, schema) in schemas {
            let schema_path = format!("{}/{}", path, escape_segment(name));
            let resolved = self.walk_value(schema, &schema_path)?;
            result.insert(name.clone(), resolved);
        }
        Ok(Value::Object(result))
    }

    fn walk_array(&mut self, arr: &[Value], path: &str) -> Result<Value, ConvertError> {
        let mut result = Vec::new();
        for (i, item) in arr.iter().enumerate() {
            let item_path = format!("{}/{}", path, i);
            result.push(self.walk_value(item, &item_path)?);
        }
        Ok(Value::Array(result))
    }

    fn walk_dependencies(&mut self, value: &Value, path: &str) -> Result<Value, ConvertError> {
        let Some(deps) = value.as_object() else {
            return Ok(value.clone());
        };

        let mut result = Map::new();
        for (name, dep) in deps {
            // Property dependencies are name lists, schema dependencies recurse
            let resolved = if dep.is_object() {
                self.walk_value(dep, &format!("{}/{}", path, escape_segment(name)))?
            } else {
                dep.clone()
            };
            result.insert(name.clone(), resolved);
        }
        Ok(Value::Object(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn convert_bare(schema: Value, target: Target) -> Result<Value, ConvertError> {
        convert(&schema, &ConvertOptions::new(target).builtins(false))
    }

    // === Primitive Types ===

    #[test]
    fn primitive_tag_renamed_for_mongo() {
        let schema = json!({
            "type": "object",
            "properties": {
                "count": { "type": "integer", "minimum": 0 },
                "active": { "type": "boolean" }
            }
        });
        let result = convert_bare(schema, Target::Mongo36).unwrap();
        assert_eq!(
            result,
            json!({
                "$jsonSchema": {
                    "bsonType": "object",
                    "properties": {
                        "count": { "bsonType": "int", "minimum": 0 },
                        "active": { "bsonType": "bool" }
                    }
                }
            })
        );
    }

    #[test]
    fn tag_keeps_position_of_type_keyword() {
        let schema = json!({
            "description": "first",
            "type": "string",
            "maxLength": 3
        });
        let result = convert_bare(schema, Target::Mongo36).unwrap();
        let keys: Vec<&String> = result["$jsonSchema"].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["description", "bsonType", "maxLength"]);
    }

    #[test]
    fn native_numeric_alias_in_draft4() {
        let schema = json!({ "type": "object", "properties": { "n": { "type": "long" } } });
        let result = convert_bare(schema, Target::Draft4).unwrap();
        assert_eq!(result["properties"]["n"], json!({ "type": "number" }));
    }

    #[test]
    fn native_bson_type_in_mongo() {
        let schema = json!({ "type": "object", "properties": { "at": { "type": "date" } } });
        let result = convert_bare(schema, Target::Mongo36).unwrap();
        assert_eq!(
            result["$jsonSchema"]["properties"]["at"],
            json!({ "bsonType": "date" })
        );
    }

    #[test]
    fn enum_values_are_not_walked() {
        let schema = json!({
            "type": "object",
            "enum": [{ "type": "notAType" }]
        });
        let result = convert_bare(schema, Target::Mongo36).unwrap();
        assert_eq!(
            result["$jsonSchema"]["enum"],
            json!([{ "type": "notAType" }])
        );
    }

    // === Custom Types ===

    #[test]
    fn sibling_keywords_of_custom_type_win() {
        let schema = json!({
            "definitions": {
                "code": { "type": "string", "maxLength": 8, "pattern": "^[A-Z]+$" }
            },
            "type": "object",
            "properties": {
                "c": { "type": "code", "maxLength": 4, "description": "short code" }
            }
        });
        let result = convert_bare(schema, Target::Mongo36).unwrap();
        assert_eq!(
            result["$jsonSchema"]["properties"]["c"],
            json!({
                "bsonType": "string",
                "pattern": "^[A-Z]+$",
                "maxLength": 4,
                "description": "short code"
            })
        );
    }

    #[test]
    fn alias_definitions_resolve_transitively() {
        let schema = json!({
            "definitions": {
                "id": { "type": "uuid" },
                "uuid": { "type": "string", "pattern": "^[0-9a-f-]{36}$" }
            },
            "type": "object",
            "properties": { "id": { "type": "id" } }
        });
        let result = convert_bare(schema, Target::Mongo36).unwrap();
        assert_eq!(
            result["$jsonSchema"]["properties"]["id"],
            json!({ "bsonType": "string", "pattern": "^[0-9a-f-]{36}$" })
        );
    }

    #[test]
    fn local_ref_is_treated_as_type() {
        let schema = json!({
            "definitions": { "name": { "type": "string" } },
            "type": "object",
            "properties": { "n": { "$ref": "#/definitions/name" } }
        });
        let result = convert_bare(schema, Target::Mongo36).unwrap();
        assert_eq!(
            result["$jsonSchema"]["properties"]["n"],
            json!({ "bsonType": "string" })
        );
    }

    #[test]
    fn external_ref_passes_through_draft4() {
        let schema = json!({
            "type": "object",
            "properties": { "a": { "$ref": "other.json#/definitions/a" } }
        });
        let result = convert_bare(schema, Target::Draft4).unwrap();
        assert_eq!(
            result["properties"]["a"],
            json!({ "$ref": "other.json#/definitions/a" })
        );
    }

    #[test]
    fn external_ref_rejected_by_mongo() {
        let schema = json!({
            "type": "object",
            "properties": { "a": { "$ref": "other.json" } }
        });
        let result = convert_bare(schema, Target::Mongo36);
        assert!(matches!(
            result,
            Err(ConvertError::UnsupportedType { path, .. }) if path == "/properties/a/$ref"
        ));
    }

    #[test]
    fn format_rejected_by_mongo() {
        let schema = json!({ "type": "string", "format": "email" });
        let result = convert_bare(schema, Target::Mongo36);
        assert!(matches!(
            result,
            Err(ConvertError::UnsupportedType { target: Target::Mongo36, .. })
        ));
    }

    #[test]
    fn node_properties_replace_definition_shape() {
        let schema = json!({
            "definitions": {
                "point": {
                    "type": "object",
                    "required": ["x"],
                    "properties": { "x": { "type": "number" } },
                    "additionalProperties": false
                }
            },
            "type": "object",
            "properties": {
                "p": { "type": "point", "properties": { "label": { "type": "string" } } }
            }
        });
        let result = convert_bare(schema, Target::Mongo36).unwrap();
        assert_eq!(
            result["$jsonSchema"]["properties"]["p"],
            json!({
                "bsonType": "object",
                "properties": { "label": { "bsonType": "string" } }
            })
        );
    }

    // === Local References ===

    #[test]
    fn unknown_local_ref_is_unknown_type() {
        let schema = json!({
            "type": "object",
            "properties": { "a": { "$ref": "#/definitions/nope" } }
        });
        for target in [Target::Draft4, Target::Mongo36] {
            let result = convert_bare(schema.clone(), target);
            assert!(matches!(
                result,
                Err(ConvertError::UnknownType { name, path })
                    if name == "nope" && path == "/properties/a/$ref"
            ));
        }
    }

    #[test]
    fn deep_local_ref_emits_definition_for_draft4() {
        let schema = json!({
            "definitions": {
                "point": { "type": "object", "properties": { "x": { "type": "number" } } }
            },
            "type": "object",
            "properties": { "x": { "$ref": "#/definitions/point/properties/x" } }
        });
        let result = convert_bare(schema, Target::Draft4).unwrap();
        assert_eq!(
            result["properties"]["x"],
            json!({ "$ref": "#/definitions/point/properties/x" })
        );
        assert_eq!(
            result["definitions"]["point"]["properties"]["x"],
            json!({ "type": "number" })
        );
    }

    #[test]
    fn deep_local_ref_inlines_sub_schema_for_mongo() {
        let schema = json!({
            "definitions": {
                "point": { "type": "object", "properties": { "x": { "type": "integer" } } }
            },
            "type": "object",
            "properties": { "x": { "$ref": "#/definitions/point/properties/x" } }
        });
        let result = convert_bare(schema, Target::Mongo36).unwrap();
        assert_eq!(
            result["$jsonSchema"]["properties"]["x"],
            json!({ "bsonType": "int" })
        );
    }

    #[test]
    fn deep_local_ref_to_missing_member_rejected() {
        let schema = json!({
            "definitions": { "point": { "type": "object" } },
            "$ref": "#/definitions/point/properties/y"
        });
        let result = convert_bare(schema, Target::Draft4);
        assert!(matches!(
            result,
            Err(ConvertError::InvalidSchema { path, .. }) if path == "/$ref"
        ));
    }

    #[test]
    fn self_referencing_pointer_truncates() {
        let schema = json!({
            "definitions": {
                "list": {
                    "type": "object",
                    "properties": {
                        "next": {
                            "type": "object",
                            "properties": { "tail": { "$ref": "#/definitions/list/properties/next" } }
                        }
                    }
                }
            },
            "type": "object",
            "properties": { "n": { "$ref": "#/definitions/list/properties/next" } }
        });
        let result = convert_bare(schema, Target::Mongo36).unwrap();
        assert_eq!(
            result["$jsonSchema"]["properties"]["n"],
            json!({
                "bsonType": "object",
                "properties": { "tail": { "bsonType": "object" } }
            })
        );
    }

    // === Truncation ===

    #[test]
    fn self_recursive_definition_truncates_to_tag() {
        let schema = json!({
            "definitions": {
                "tree": {
                    "type": "object",
                    "properties": {
                        "children": { "type": "array", "items": { "type": "tree" } }
                    }
                }
            },
            "type": "tree"
        });
        let result = convert_bare(schema, Target::Mongo36).unwrap();
        assert_eq!(
            result["$jsonSchema"],
            json!({
                "bsonType": "object",
                "properties": {
                    "children": { "bsonType": "array", "items": { "bsonType": "object" } }
                }
            })
        );
    }

    #[test]
    fn truncated_definition_without_type_is_empty_schema() {
        let schema = json!({
            "definitions": {
                "any": { "anyOf": [{ "type": "string" }, { "type": "any" }] }
            },
            "type": "object",
            "properties": { "v": { "type": "any" } }
        });
        let result = convert_bare(schema, Target::Mongo36).unwrap();
        assert_eq!(
            result["$jsonSchema"]["properties"]["v"],
            json!({ "anyOf": [{ "bsonType": "string" }, {}] })
        );
    }

    #[test]
    fn self_alias_truncates_to_empty_schema() {
        let schema = json!({
            "definitions": { "loop": { "type": "loop" } },
            "type": "object",
            "properties": { "x": { "type": "loop" } }
        });
        let result = convert_bare(schema, Target::Mongo36).unwrap();
        assert_eq!(result["$jsonSchema"]["properties"]["x"], json!({}));
    }

    // === Errors ===

    #[test]
    fn type_array_rejected() {
        let schema = json!({ "type": ["string", "null"] });
        let result = convert_bare(schema, Target::Draft4);
        assert!(matches!(
            result,
            Err(ConvertError::InvalidSchema { path, .. }) if path == "/type"
        ));
    }

    #[test]
    fn non_object_property_schema_rejected() {
        let schema = json!({ "type": "object", "properties": { "a": "string" } });
        let result = convert_bare(schema, Target::Draft4);
        assert!(matches!(
            result,
            Err(ConvertError::InvalidSchema { path, .. }) if path == "/properties/a"
        ));
    }

    #[test]
    fn unknown_type_reports_path() {
        let schema = json!({
            "type": "object",
            "properties": { "items": { "type": "array", "items": { "type": "money" } } }
        });
        let result = convert_bare(schema, Target::Draft4);
        assert!(matches!(
            result,
            Err(ConvertError::UnknownType { name, path })
                if name == "money" && path == "/properties/items/items/type"
        ));
    }

    #[test]
    fn error_path_escapes_segments() {
        let schema = json!({
            "type": "object",
            "properties": { "a/b": { "type": "money" }, "c~d": {} }
        });
        let result = convert_bare(schema, Target::Draft4);
        assert!(matches!(
            result,
            Err(ConvertError::UnknownType { path, .. }) if path == "/properties/a~1b/type"
        ));
    }

    #[test]
    fn unknown_type_inside_definition_reports_definition_path() {
        let schema = json!({
            "definitions": { "price": { "type": "object", "properties": { "v": { "type": "money" } } } },
            "type": "price"
        });
        let result = convert_bare(schema, Target::Mongo36);
        assert!(matches!(
            result,
            Err(ConvertError::UnknownType { path, .. })
                if path == "/definitions/price/properties/v/type"
        ));
    }

    #[test]
    fn non_object_document_rejected() {
        let result = convert(&json!([1]), &ConvertOptions::default());
        assert!(matches!(result, Err(ConvertError::InvalidSchema { path, .. }) if path == "/"));
    }
}
