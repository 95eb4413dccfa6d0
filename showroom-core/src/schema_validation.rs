use serde_json::{json, Value};

/// The JSON Schema every catalog data file must satisfy before
/// deserialization is attempted
pub fn catalog_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "brands": {
                "type": "array",
                "items": { "$ref": "#/definitions/facet_value" },
                "minItems": 1
            },
            "categories": {
                "type": "array",
                "items": { "$ref": "#/definitions/facet_value" },
                "minItems": 1
            },
            "products": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "id": { "type": "string", "minLength": 1 },
                        "brand_slug": { "type": "string", "minLength": 1 },
                        "category_slug": { "type": "string", "minLength": 1 },
                        "name": { "type": "string" }
                    },
                    "required": ["id", "brand_slug", "category_slug"]
                }
            }
        },
        "required": ["brands", "categories", "products"],
        "definitions": {
            "facet_value": {
                "type": "object",
                "properties": {
                    "slug": { "type": "string", "minLength": 1 },
                    "label": { "type": "string", "minLength": 1 },
                    "sort_order": { "type": "integer" },
                    "nav_group": { "type": "string" }
                },
                "required": ["slug", "label", "sort_order"]
            }
        }
    })
}

/// Validate data against a JSON Schema
/// Returns Ok(()) if valid, Err with a list of validation errors if invalid
pub fn validate_against_schema(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let compiled = jsonschema::validator_for(schema)
        .map_err(|e| vec![format!("Schema compilation error: {}", e)])?;

    match compiled.validate(data) {
        Ok(()) => Ok(()),
        Err(error) => {
            let path_str = error.instance_path.to_string();
            let location = if path_str.is_empty() {
                "root".to_string()
            } else {
                path_str
            };
            Err(vec![format!("{} at {}", error, location)])
        }
    }
}
