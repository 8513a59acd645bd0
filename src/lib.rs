//! Extended JSON Schema converter
//!
//! Converts schemas written in an extended JSON Schema dialect into
//! validator-specific dialects: JSON Schema draft-4, MongoDB 3.6
//! `$jsonSchema`, and MongoDB 3.2 query operators.
//!
//! In the extended dialect every custom type is written `"type": "Name"`.
//! `Name` is resolved against a layered definitions table: a built-in
//! catalog, shared definitions files, and the document's own `definitions`.
//!
//! # Example
//!
//! ```
//! use schema_convert::{convert, ConvertOptions, Target};
//! use serde_json::json;
//!
//! let schema = json!({
//!     "type": "object",
//!     "properties": {
//!         "_id": { "type": "objectId" },
//!         "count": { "type": "integer" }
//!     }
//! });
//!
//! let result = convert(&schema, &ConvertOptions::new(Target::Mongo36)).unwrap();
//! let props = &result["$jsonSchema"]["properties"];
//!
//! assert_eq!(props["count"], json!({ "bsonType": "int" }));
//! assert_eq!(props["_id"]["properties"]["$oid"]["bsonType"], "string");
//! ```
//!
//! # Targets
//!
//! | Target | Type keyword | Custom types | Envelope |
//! |--------|--------------|--------------|----------|
//! | `draft4` | `type` | `$ref` into `definitions` | `$schema` + `definitions` |
//! | `mongo36` | `bsonType` | inlined | `$jsonSchema` |
//! | `mongo32` | `$type` | inlined, flat properties only | none |
//!
//! Recursive definitions are inlined up to the first repetition of a name on
//! the current path; the repeated occurrence is cut down to its type tag.

mod assembler;
mod catalog;
mod dialect;
mod error;
mod loader;
mod registry;
mod tracker;
mod types;
mod validator;
mod walker;

pub use assembler::assemble;
pub use catalog::builtin_definitions;
pub use dialect::{DRAFT4_SCHEMA_URI, MONGO_BSON_TYPES};
pub use error::ConvertError;
pub use loader::{
    is_url, load_definitions, load_schema, load_schema_auto, load_schema_reader, load_schema_str,
};
pub use registry::{DefinitionSource, Registry};
pub use types::{json_type_name, ConvertOptions, Family, Target, JSON_SCHEMA_TYPES};
pub use validator::check_output;
pub use walker::convert;

#[cfg(feature = "remote")]
pub use loader::load_schema_url;
