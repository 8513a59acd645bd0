//! Definitions registry - the merged table of named type definitions.
//!
//! Definitions come from layered sources: the built-in catalog, shared
//! definitions files, and the input document itself. Sources are folded in
//! order and a later source replaces any earlier definition of the same name
//! as a whole. Each source may also carry `alt_definitions`, keyed by output
//! family, that apply only when converting for that family.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ConvertError;
use crate::types::{json_type_name, Family};

/// Keys of a document that hold definition tables.
pub const DEFINITION_KEYS: &[&str] = &["definitions", "alt_definitions"];

/// One layer of definitions, as found in a definitions file or schema document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DefinitionSource {
    /// Primary definitions, keyed by type name.
    #[serde(default)]
    pub definitions: Map<String, Value>,
    /// Family-specific definitions: family tag, then type name.
    #[serde(default)]
    pub alt_definitions: HashMap<String, Map<String, Value>>,
}

impl DefinitionSource {
    /// Extract the definition tables of a JSON document.
    ///
    /// Keys other than `definitions` and `alt_definitions` are ignored, so a
    /// full schema document can be passed.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::InvalidDefinitions` if the document is not an
    /// object or a table has the wrong shape.
    pub fn from_value(value: &Value) -> Result<Self, ConvertError> {
        let Some(doc) = value.as_object() else {
            return Err(ConvertError::InvalidDefinitions {
                message: format!("expected object, got {}", json_type_name(value)),
            });
        };

        let tables: Map<String, Value> = doc
            .iter()
            .filter(|(k, _)| DEFINITION_KEYS.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        serde_json::from_value(Value::Object(tables)).map_err(|e| {
            ConvertError::InvalidDefinitions {
                message: e.to_string(),
            }
        })
    }

    /// Definitions of `family`, if the source has any.
    pub fn alternatives(&self, family: Family) -> Option<&Map<String, Value>> {
        self.alt_definitions.get(family.tag())
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty() && self.alt_definitions.values().all(Map::is_empty)
    }
}

#[derive(Debug, Clone)]
struct Entry {
    layer: usize,
    schema: Value,
}

/// Merged definitions from all sources.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    primary: HashMap<String, Entry>,
    alternatives: HashMap<String, HashMap<String, Entry>>,
}

impl Registry {
    /// Fold `sources` left to right; later sources win on name collision.
    pub fn merge<'a, I>(sources: I) -> Self
    where
        I: IntoIterator<Item = &'a DefinitionSource>,
    {
        let mut registry = Registry::default();
        for (layer, source) in sources.into_iter().enumerate() {
            registry.push(layer, source);
        }
        registry
    }

    fn push(&mut self, layer: usize, source: &DefinitionSource) {
        for (name, schema) in &source.definitions {
            if self.primary.contains_key(name) {
                tracing::trace!(definition = %name, layer, "definition overridden");
            }
            self.primary.insert(
                name.clone(),
                Entry {
                    layer,
                    schema: schema.clone(),
                },
            );
        }
        for (family, table) in &source.alt_definitions {
            let alternatives = self.alternatives.entry(family.clone()).or_default();
            for (name, schema) in table {
                alternatives.insert(
                    name.clone(),
                    Entry {
                        layer,
                        schema: schema.clone(),
                    },
                );
            }
        }
    }

    /// Look up the definition of `name`.
    ///
    /// With a family, a family-specific alternative competes with the primary
    /// definition by source precedence; within the same source the
    /// alternative wins. Returns `None` if no source defines `name` for this
    /// family. There is no fallback to another family's alternatives.
    pub fn lookup(&self, name: &str, family: Option<Family>) -> Option<&Value> {
        let primary = self.primary.get(name);
        let alternative = family
            .and_then(|f| self.alternatives.get(f.tag()))
            .and_then(|table| table.get(name));

        let entry = match (primary, alternative) {
            (Some(p), Some(a)) => {
                if a.layer >= p.layer {
                    a
                } else {
                    p
                }
            }
            (Some(p), None) => p,
            (None, Some(a)) => a,
            (None, None) => return None,
        };
        Some(&entry.schema)
    }

    /// Returns true if `name` resolves for `family`.
    pub fn contains(&self, name: &str, family: Option<Family>) -> bool {
        self.lookup(name, family).is_some()
    }

    /// Number of distinct primary definitions.
    pub fn len(&self) -> usize {
        self.primary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.alternatives.values().all(HashMap::is_empty)
    }
}
