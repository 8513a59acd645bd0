//! Compile check of converted draft-4 output.

use serde_json::Value;

use crate::error::ConvertError;

/// Check that a converted draft-4 document compiles as a JSON Schema.
///
/// Catches output a validator would refuse to load, e.g. a user definition
/// carrying a keyword value of the wrong JSON type.
///
/// # Errors
///
/// Returns `ConvertError::InvalidOutput` with the compiler's message.
pub fn check_output(schema: &Value) -> Result<(), ConvertError> {
    jsonschema::validator_for(schema)
        .map(|_| ())
        .map_err(|e| ConvertError::InvalidOutput {
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ConvertOptions, Target};
    use crate::walker::convert;
    use serde_json::json;

    #[test]
    fn converted_builtin_types_compile() {
        let schema = json!({
            "type": "object",
            "properties": {
                "_id": { "type": "objectId" },
                "created": { "type": "date" },
                "location": { "type": "geoGeometry" }
            }
        });
        let result = convert(&schema, &ConvertOptions::new(Target::Draft4)).unwrap();
        assert!(check_output(&result).is_ok());
    }

    #[test]
    fn converted_schema_accepts_matching_document() {
        let schema = json!({
            "type": "object",
            "required": ["location"],
            "properties": { "location": { "type": "geoGeometry" } }
        });
        let result = convert(&schema, &ConvertOptions::new(Target::Draft4)).unwrap();
        let validator = jsonschema::validator_for(&result).unwrap();

        let point = json!({ "location": { "type": "Point", "coordinates": [1.5, 2.5] } });
        assert!(validator.is_valid(&point));

        let nested = json!({
            "location": {
                "type": "GeometryCollection",
                "geometries": [{ "type": "Point", "coordinates": [0, 0] }]
            }
        });
        assert!(validator.is_valid(&nested));

        let bad = json!({ "location": { "type": "Point", "coordinates": [1] } });
        assert!(!validator.is_valid(&bad));
    }

    #[test]
    fn invalid_keyword_value_rejected() {
        let schema = json!({
            "$schema": "http://json-schema.org/draft-04/schema#",
            "type": "object",
            "minProperties": "three"
        });
        let result = check_output(&schema);
        assert!(matches!(result, Err(ConvertError::InvalidOutput { .. })));
    }
}
