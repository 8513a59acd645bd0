//! Core types for schema conversion.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::registry::DefinitionSource;

/// The primitive type names of JSON Schema draft-4.
pub const JSON_SCHEMA_TYPES: &[&str] = &[
    "string", "number", "boolean", "null", "object", "array", "integer",
];

/// Returns the JSON type name for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Returns true if `name` is one of the draft-4 primitive types.
pub fn is_json_schema_type(name: &str) -> bool {
    JSON_SCHEMA_TYPES.contains(&name)
}

/// Output dialect of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Standard JSON Schema draft-4 with shared `definitions`.
    #[default]
    Draft4,
    /// MongoDB 3.6 `$jsonSchema` validator.
    Mongo36,
    /// MongoDB 3.2 query-operator validator.
    Mongo32,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::Draft4, Target::Mongo36, Target::Mongo32];

    /// Parse a target name.
    ///
    /// Returns `None` for unknown values (caller should error).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft4" => Some(Target::Draft4),
            "mongo36" => Some(Target::Mongo36),
            "mongo32" => Some(Target::Mongo32),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Target::Draft4 => "draft4",
            Target::Mongo36 => "mongo36",
            Target::Mongo32 => "mongo32",
        }
    }

    /// Output family whose alternative definitions apply to this target.
    pub fn family(&self) -> Family {
        match self {
            Target::Draft4 => Family::Json,
            Target::Mongo36 | Target::Mongo32 => Family::Mongodb,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Family tag selecting an `alt_definitions` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Plain JSON output (draft4).
    Json,
    /// Document-store output (mongo36, mongo32).
    Mongodb,
}

impl Family {
    /// Returns the key used under `alt_definitions`.
    pub fn tag(&self) -> &'static str {
        match self {
            Family::Json => "json",
            Family::Mongodb => "mongodb",
        }
    }
}

/// Options for schema conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Output dialect.
    pub target: Target,
    /// Shared definition sources, lowest precedence first.
    pub sources: Vec<DefinitionSource>,
    /// Whether the built-in catalog is loaded below `sources`.
    pub builtins: bool,
}

impl ConvertOptions {
    /// Create options for `target` with the built-in catalog enabled.
    pub fn new(target: Target) -> Self {
        Self {
            target,
            sources: Vec::new(),
            builtins: true,
        }
    }

    /// Append a definitions source; later sources override earlier ones.
    pub fn with_definitions(mut self, source: DefinitionSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Enable or disable the built-in catalog.
    pub fn builtins(mut self, builtins: bool) -> Self {
        self.builtins = builtins;
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::new(Target::default())
    }
}
