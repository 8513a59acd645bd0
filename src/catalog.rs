//! Built-in type catalog.
//!
//! The lowest-precedence definitions source. Any name here can be replaced
//! by a shared definitions file or by the input document.

use serde_json::{json, Value};

use crate::error::ConvertError;
use crate::registry::DefinitionSource;

/// The built-in definitions source.
///
/// # Errors
///
/// Returns `ConvertError::InvalidDefinitions` if the catalog literal does not
/// have the shape of a definitions document.
pub fn builtin_definitions() -> Result<DefinitionSource, ConvertError> {
    let value = json!({
        "definitions": {
            "objectId": {
                "type": "object",
                "required": ["$oid"],
                "properties": {
                    "$oid": {
                        "type": "string",
                        "pattern": "^[0-9A-Fa-f]{24}$"
                    }
                },
                "additionalProperties": false
            },
            "geoPosition": {
                "type": "array",
                "minItems": 2,
                "maxItems": 3,
                "items": { "type": "number" }
            },
            "geoCoordinates": {
                "type": "array",
                "items": {
                    "anyOf": [
                        { "type": "number" },
                        { "type": "geoCoordinates" }
                    ]
                }
            },
            "geoPoint": geometry("Point", json!({ "type": "geoPosition" })),
            "geoMultiPoint": geometry("MultiPoint", json!({
                "type": "array",
                "items": { "type": "geoPosition" }
            })),
            "geoLineString": geometry("LineString", json!({
                "type": "array",
                "minItems": 2,
                "items": { "type": "geoPosition" }
            })),
            "geoPolygon": geometry("Polygon", json!({
                "type": "array",
                "items": {
                    "type": "array",
                    "minItems": 4,
                    "items": { "type": "geoPosition" }
                }
            })),
            "geoGeometry": {
                "type": "object",
                "anyOf": [
                    { "type": "geoPoint" },
                    { "type": "geoMultiPoint" },
                    { "type": "geoLineString" },
                    { "type": "geoPolygon" },
                    { "type": "geoGeometryCollection" }
                ]
            },
            "geoGeometryCollection": {
                "type": "object",
                "required": ["type", "geometries"],
                "properties": {
                    "type": { "type": "string", "enum": ["GeometryCollection"] },
                    "geometries": {
                        "type": "array",
                        "items": { "type": "geoGeometry" }
                    }
                }
            }
        },
        "alt_definitions": {
            "json": {
                "binData": {
                    "type": "object",
                    "required": ["$binary", "$type"],
                    "properties": {
                        "$binary": {
                            "type": "string",
                            "pattern": "^[=0-9A-Za-z+/]*$"
                        },
                        "$type": {
                            "type": "string",
                            "pattern": "^[0-9A-Za-z]{1,2}$"
                        }
                    },
                    "additionalProperties": false
                },
                "date": {
                    "type": "object",
                    "required": ["$date"],
                    "properties": {
                        "$date": {
                            "type": "string",
                            "pattern": "^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}(\\.[0-9]{3})?Z$"
                        }
                    },
                    "additionalProperties": false
                }
            }
        }
    });

    DefinitionSource::from_value(&value)
}

fn geometry(kind: &str, coordinates: Value) -> Value {
    json!({
        "type": "object",
        "required": ["type", "coordinates"],
        "properties": {
            "type": { "type": "string", "enum": [kind] },
            "coordinates": coordinates
        }
    })
}
